//! Harness runner: runs the And-Or engine on a world and packages the result
//! as an auditable plan report.
//!
//! The runner uses ONLY `contingency_search` APIs. It does not implement any
//! search or verification logic itself.
//!
//! # Pipeline
//!
//! ```text
//! search_with_policy() → verify_plan_from_root() (success only)
//!   → plan / policy / stats projections → canonical bytes → report digest
//! ```

use std::fmt::Display;

use tracing::{debug, info};

use contingency_search::digest::{
    canonical_hash, canonical_json_bytes, plan_digest, plan_to_json_value, ContentHash,
    DOMAIN_PLAN_REPORT,
};
use contingency_search::error::SearchError;
use contingency_search::policy::AndOrPolicyV1;
use contingency_search::render::render_plan;
use contingency_search::search::{search_with_policy, SearchResult};
use contingency_search::stats::SearchStatsV1;
use contingency_search::verify::{verify_plan_from_root, PlanVerifyError};

use crate::contract::PlanningWorldV1;

/// Schema tag written into every report.
pub const REPORT_SCHEMA_VERSION: &str = "plan_report.v1";

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The engine aborted (problem contract violation).
    SearchFailed(SearchError),
    /// The engine returned a plan that does not verify against the world.
    PlanRejected(PlanVerifyError),
    /// Canonical JSON serialization failed.
    CanonFailed { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SearchFailed(e) => write!(f, "search failed: {e}"),
            Self::PlanRejected(e) => write!(f, "plan rejected: {e}"),
            Self::CanonFailed { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for RunError {}

/// The product of one harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanReportV1 {
    /// The world that was searched.
    pub world_id: String,
    /// True if a conditional plan was found.
    pub success: bool,
    /// One-line rendering of the plan (`None` on failure).
    pub rendered: Option<String>,
    /// Content hash of the plan projection (`None` on failure).
    pub plan_digest: Option<ContentHash>,
    /// Counters from the search call.
    pub stats: SearchStatsV1,
    /// Canonical JSON bytes of the whole report.
    pub content: Vec<u8>,
    /// `canonical_hash(DOMAIN_PLAN_REPORT, content)`.
    pub digest: ContentHash,
}

/// Search `world` under `policy` and build a verified report.
///
/// A `Failure` outcome is a successful run; the report records it.
///
/// # Errors
///
/// Returns [`RunError`] if the engine aborts, the plan fails verification,
/// or serialization fails.
pub fn run_search<W>(world: &W, policy: &AndOrPolicyV1) -> Result<PlanReportV1, RunError>
where
    W: PlanningWorldV1,
    W::State: Display,
{
    let world_id = world.world_id().to_string();
    debug!(world_id = %world_id, "run started");

    let outcome = search_with_policy(world, policy).map_err(RunError::SearchFailed)?;

    let (plan_json, rendered, plan_hash) = match &outcome.result {
        SearchResult::Success(plan) => {
            verify_plan_from_root(world, plan).map_err(RunError::PlanRejected)?;
            let hash = plan_digest(plan).map_err(|e| RunError::CanonFailed {
                detail: format!("plan: {e}"),
            })?;
            (plan_to_json_value(plan), Some(render_plan(plan)), Some(hash))
        }
        SearchResult::Failure => (serde_json::Value::Null, None, None),
    };

    let success = outcome.result.is_success();
    let outcome_tag = if success { "success" } else { "failure" };
    let report_value = serde_json::json!({
        "outcome": outcome_tag,
        "plan": plan_json,
        "plan_digest": plan_hash.as_ref().map(ContentHash::as_str),
        "policy": policy.to_json_value(),
        "rendered": rendered,
        "schema_version": REPORT_SCHEMA_VERSION,
        "stats": outcome.stats.to_json_value(),
        "world_id": world_id,
    });
    let content = canonical_json_bytes(&report_value).map_err(|e| RunError::CanonFailed {
        detail: format!("report: {e}"),
    })?;
    let digest = canonical_hash(DOMAIN_PLAN_REPORT, &content);

    info!(world_id = %world_id, success, digest = %digest, "run finished");

    Ok(PlanReportV1 {
        world_id,
        success,
        rendered,
        plan_digest: plan_hash,
        stats: outcome.stats,
        content,
        digest,
    })
}
