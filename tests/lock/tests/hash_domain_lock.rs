//! Hash domain lock tests.
//!
//! Proves:
//! 1. The domain set has the expected count
//! 2. All domain byte strings are unique
//! 3. All domains follow the `CONTINGENCY::*::V1\0` convention
//! 4. No raw `CONTINGENCY::` literals in production source outside `digest.rs`

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use contingency_search::digest::ALL_DOMAINS;

#[test]
fn domain_set_count() {
    assert_eq!(
        ALL_DOMAINS.len(),
        2,
        "if you added a new domain, update this count"
    );
}

#[test]
fn domain_bytes_unique() {
    let mut seen = BTreeSet::new();
    for domain in ALL_DOMAINS {
        assert!(
            seen.insert(*domain),
            "duplicate domain bytes: {}",
            String::from_utf8_lossy(domain)
        );
    }
}

#[test]
fn domain_naming_convention() {
    for domain in ALL_DOMAINS {
        let shown = String::from_utf8_lossy(domain);
        assert!(domain.starts_with(b"CONTINGENCY::"), "{shown}");
        assert!(domain.ends_with(b"::V1\0"), "{shown}");
        assert_eq!(
            domain.iter().filter(|&&b| b == 0).count(),
            1,
            "{shown} must contain exactly one NUL"
        );
    }
}

#[test]
fn no_raw_domain_literals_outside_digest() {
    let production_dirs = [
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../search/src"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../harness/src"),
    ];
    let pattern = "b\"CONTINGENCY::";

    let mut violations = Vec::new();
    for dir in production_dirs {
        for path in rust_files(Path::new(dir)) {
            if path.file_name().and_then(|n| n.to_str()) == Some("digest.rs") {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            for (i, line) in content.lines().enumerate() {
                let trimmed = line.trim();
                if !trimmed.starts_with("//") && trimmed.contains(pattern) {
                    violations.push(format!("  {}:{}: {trimmed}", path.display(), i + 1));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "raw domain literals found outside digest.rs:\n{}",
        violations.join("\n")
    );
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                out.extend(rust_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                out.push(path);
            }
        }
    }
    out
}
