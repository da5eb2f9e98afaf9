//! Report directory persistence: write/read `PlanReportV1` to/from disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   report.json         canonical JSON report (the hashed surface)
//!   report_digest.txt   ASCII digest string (e.g. "sha256:...")
//!   plan.txt            rendered plan, success only (observational)
//! ```
//!
//! The directory path is never part of any hash surface.
//!
//! # Fail-closed semantics
//!
//! - Missing `report.json` / `report_digest.txt` → error
//! - Extra files, or `plan.txt` on a failure report → error
//! - Digest mismatch, non-canonical JSON, or `plan.txt` ≠ `rendered` → error

use std::collections::BTreeSet;
use std::path::Path;

use contingency_search::digest::{
    canonical_hash, canonical_json_bytes, ContentHash, DOMAIN_PLAN_REPORT,
};
use contingency_search::stats::SearchStatsV1;

use crate::runner::{PlanReportV1, REPORT_SCHEMA_VERSION};

const REPORT_FILENAME: &str = "report.json";
const DIGEST_FILENAME: &str = "report_digest.txt";
const PLAN_FILENAME: &str = "plan.txt";

/// Error writing a report directory.
#[derive(Debug)]
pub enum ReportDirWriteError {
    /// I/O error during write.
    Io { detail: String },
}

impl std::fmt::Display for ReportDirWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
        }
    }
}

impl std::error::Error for ReportDirWriteError {}

/// Error reading a report directory.
#[derive(Debug)]
pub enum ReportDirReadError {
    /// I/O error during read.
    Io { detail: String },
    /// A required file is missing.
    MissingFile { filename: String },
    /// A file exists that the report does not declare.
    ExtraFile { name: String },
    /// `report.json` is not valid JSON or lacks a required field.
    ReportParseError { detail: String },
    /// `report.json` is valid JSON but not in canonical form.
    NonCanonical,
    /// `schema_version` is not recognized.
    VersionMismatch { found: String },
    /// `report_digest.txt` doesn't match the recomputed digest.
    DigestMismatch { stored: String, recomputed: String },
    /// `plan.txt` disagrees with the report's `rendered` field.
    RenderedMismatch,
}

impl std::fmt::Display for ReportDirReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::MissingFile { filename } => write!(f, "missing file: {filename}"),
            Self::ExtraFile { name } => write!(f, "undeclared extra file: {name}"),
            Self::ReportParseError { detail } => write!(f, "report parse error: {detail}"),
            Self::NonCanonical => f.write_str("report.json is not canonical JSON"),
            Self::VersionMismatch { found } => write!(f, "report version mismatch: {found}"),
            Self::DigestMismatch { stored, recomputed } => {
                write!(
                    f,
                    "digest mismatch: stored={stored}, recomputed={recomputed}"
                )
            }
            Self::RenderedMismatch => f.write_str("plan.txt does not match report"),
        }
    }
}

impl std::error::Error for ReportDirReadError {}

/// Write `report` into `dir`, creating it if needed.
///
/// # Errors
///
/// Returns [`ReportDirWriteError::Io`] on any filesystem failure.
pub fn write_report_dir(report: &PlanReportV1, dir: &Path) -> Result<(), ReportDirWriteError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportDirWriteError::Io {
        detail: format!("create_dir_all: {e}"),
    })?;

    write_file(dir, REPORT_FILENAME, &report.content)?;
    write_file(dir, DIGEST_FILENAME, report.digest.as_str().as_bytes())?;
    if let Some(rendered) = &report.rendered {
        write_file(dir, PLAN_FILENAME, rendered.as_bytes())?;
    }
    Ok(())
}

/// Read and validate a report directory.
///
/// # Errors
///
/// Returns [`ReportDirReadError`] on any validation failure.
pub fn read_report_dir(dir: &Path) -> Result<PlanReportV1, ReportDirReadError> {
    let content = read_required(dir, REPORT_FILENAME)?;
    let stored = read_required(dir, DIGEST_FILENAME)?;

    let value: serde_json::Value =
        serde_json::from_slice(&content).map_err(|e| ReportDirReadError::ReportParseError {
            detail: format!("{e}"),
        })?;
    let canonical = canonical_json_bytes(&value).map_err(|e| {
        ReportDirReadError::ReportParseError {
            detail: format!("{e}"),
        }
    })?;
    if canonical != content {
        return Err(ReportDirReadError::NonCanonical);
    }

    let schema_version = value["schema_version"].as_str().unwrap_or("");
    if schema_version != REPORT_SCHEMA_VERSION {
        return Err(ReportDirReadError::VersionMismatch {
            found: schema_version.to_string(),
        });
    }

    let recomputed = canonical_hash(DOMAIN_PLAN_REPORT, &content);
    let stored = String::from_utf8_lossy(&stored).trim().to_string();
    if recomputed.as_str() != stored {
        return Err(ReportDirReadError::DigestMismatch {
            stored,
            recomputed: recomputed.as_str().to_string(),
        });
    }

    let world_id = required_str(&value, "world_id")?.to_string();
    let success = match required_str(&value, "outcome")? {
        "success" => true,
        "failure" => false,
        other => {
            return Err(ReportDirReadError::ReportParseError {
                detail: format!("unknown outcome: {other}"),
            })
        }
    };
    let rendered = value["rendered"].as_str().map(String::from);
    let plan_digest = match value["plan_digest"].as_str() {
        Some(s) => Some(ContentHash::parse(s).ok_or_else(|| {
            ReportDirReadError::ReportParseError {
                detail: format!("invalid plan_digest: {s}"),
            }
        })?),
        None => None,
    };
    let stats = stats_from_json(&value["stats"])?;

    let mut declared: BTreeSet<&str> = [REPORT_FILENAME, DIGEST_FILENAME].into_iter().collect();
    if let Some(text) = &rendered {
        let on_disk = read_required(dir, PLAN_FILENAME)?;
        if on_disk != text.as_bytes() {
            return Err(ReportDirReadError::RenderedMismatch);
        }
        declared.insert(PLAN_FILENAME);
    }
    for name in list_files(dir)? {
        if !declared.contains(name.as_str()) {
            return Err(ReportDirReadError::ExtraFile { name });
        }
    }

    Ok(PlanReportV1 {
        world_id,
        success,
        rendered,
        plan_digest,
        stats,
        content,
        digest: recomputed,
    })
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn stats_from_json(value: &serde_json::Value) -> Result<SearchStatsV1, ReportDirReadError> {
    let field = |name: &str| {
        value[name]
            .as_u64()
            .ok_or_else(|| ReportDirReadError::ReportParseError {
                detail: format!("missing stats.{name}"),
            })
    };
    Ok(SearchStatsV1 {
        or_nodes: field("or_nodes")?,
        and_nodes: field("and_nodes")?,
        goal_leaves: field("goal_leaves")?,
        cycles_pruned: field("cycles_pruned")?,
        dead_ends: field("dead_ends")?,
        max_path_len: field("max_path_len")?,
    })
}

fn required_str<'a>(
    value: &'a serde_json::Value,
    key: &str,
) -> Result<&'a str, ReportDirReadError> {
    value[key]
        .as_str()
        .ok_or_else(|| ReportDirReadError::ReportParseError {
            detail: format!("missing \"{key}\""),
        })
}

fn write_file(dir: &Path, filename: &str, content: &[u8]) -> Result<(), ReportDirWriteError> {
    let path = dir.join(filename);
    std::fs::write(&path, content).map_err(|e| ReportDirWriteError::Io {
        detail: format!("write {}: {e}", path.display()),
    })
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportDirReadError> {
    std::fs::read(dir.join(filename)).map_err(|_| ReportDirReadError::MissingFile {
        filename: filename.to_string(),
    })
}

/// All regular files in `dir` (names only).
fn list_files(dir: &Path) -> Result<BTreeSet<String>, ReportDirReadError> {
    let mut files = BTreeSet::new();
    let entries = std::fs::read_dir(dir).map_err(|e| ReportDirReadError::Io {
        detail: format!("read_dir: {e}"),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ReportDirReadError::Io {
            detail: format!("dir entry: {e}"),
        })?;
        let file_type = entry.file_type().map_err(|e| ReportDirReadError::Io {
            detail: format!("file_type: {e}"),
        })?;
        if file_type.is_file() {
            files.insert(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(files)
}
