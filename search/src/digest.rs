//! Canonical JSON projection and content hashing for plans.
//!
//! Canonical bytes are compact JSON with object keys in lexicographic order
//! (`serde_json::Map` is ordered unless `preserve_order` is enabled, which
//! this workspace never does). Hashes are SHA-256 over a null-terminated
//! domain prefix followed by the payload, formatted as `"sha256:<hex>"`.

use std::fmt::Display;

use sha2::{Digest, Sha256};

use crate::plan::ConditionalPlan;

/// Domain prefix for conditional plan hashing.
pub const DOMAIN_CONDITIONAL_PLAN: &[u8] = b"CONTINGENCY::CONDITIONAL_PLAN::V1\0";

/// Domain prefix for plan report hashing.
pub const DOMAIN_PLAN_REPORT: &[u8] = b"CONTINGENCY::PLAN_REPORT::V1\0";

/// Every hash domain in use. New domains must be added here.
pub const ALL_DOMAINS: &[&[u8]] = &[DOMAIN_CONDITIONAL_PLAN, DOMAIN_PLAN_REPORT];

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 of `domain || data`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let full = format!("sha256:{}", hex::encode(hasher.finalize()));
    ContentHash { full, colon: 6 }
}

/// Error producing canonical JSON bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// `serde_json` refused to serialize the value.
    Serialize { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Compact, key-sorted JSON bytes for `value`.
///
/// # Errors
///
/// Returns [`CanonError::Serialize`] if serialization fails.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    serde_json::to_vec(value).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

/// JSON projection of a plan: `{"action", "children", "state"}` per node.
///
/// States and actions are projected through `Display`; a goal leaf's action
/// is `null`.
#[must_use]
pub fn plan_to_json_value<S: Display, A: Display>(plan: &ConditionalPlan<S, A>) -> serde_json::Value {
    serde_json::json!({
        "action": plan.action().map(ToString::to_string),
        "children": plan.children().iter().map(plan_to_json_value).collect::<Vec<_>>(),
        "state": plan.state().to_string(),
    })
}

/// Content hash of the plan's canonical JSON projection.
///
/// # Errors
///
/// Returns [`CanonError`] if the projection cannot be serialized.
pub fn plan_digest<S: Display, A: Display>(
    plan: &ConditionalPlan<S, A>,
) -> Result<ContentHash, CanonError> {
    let bytes = canonical_json_bytes(&plan_to_json_value(plan))?;
    Ok(canonical_hash(DOMAIN_CONDITIONAL_PLAN, &bytes))
}
