//! Report directory lock tests: run → write → read → compare, through the
//! public harness API.

use contingency_harness::report_dir::{read_report_dir, write_report_dir, ReportDirReadError};
use contingency_harness::runner::run_search;
use contingency_harness::worlds::vacuum::ErraticVacuum;
use contingency_search::policy::{AndOrPolicyV1, EmptyOutcomePolicyV1};

#[test]
fn roundtrip_preserves_digest_and_content() {
    let report = run_search(&ErraticVacuum::default(), &AndOrPolicyV1::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();

    write_report_dir(&report, dir.path()).unwrap();
    let loaded = read_report_dir(dir.path()).unwrap();

    assert_eq!(loaded.digest.as_str(), report.digest.as_str());
    assert_eq!(loaded.content, report.content);
    assert_eq!(loaded.rendered, report.rendered);
    assert_eq!(loaded.stats, report.stats);
}

#[test]
fn policy_is_bound_into_digest() {
    let strict = run_search(&ErraticVacuum::default(), &AndOrPolicyV1::default()).unwrap();
    let lenient = run_search(
        &ErraticVacuum::default(),
        &AndOrPolicyV1 {
            empty_outcomes: EmptyOutcomePolicyV1::TreatAsFailure,
        },
    )
    .unwrap();

    // Same plan, different policy: plan digests agree, report digests do not.
    assert_eq!(strict.plan_digest, lenient.plan_digest);
    assert_ne!(strict.digest, lenient.digest);
}

#[test]
fn non_canonical_report_is_rejected() {
    let report = run_search(&ErraticVacuum::default(), &AndOrPolicyV1::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&report, dir.path()).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&report.content).unwrap();
    let pretty = serde_json::to_vec_pretty(&value).unwrap();
    std::fs::write(dir.path().join("report.json"), pretty).unwrap();

    let err = read_report_dir(dir.path()).unwrap_err();
    assert!(
        matches!(err, ReportDirReadError::NonCanonical),
        "expected NonCanonical, got {err:?}"
    );
}
