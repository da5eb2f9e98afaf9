//! Search policy types.

/// And-Or search configuration.
///
/// The default is the strict policy: an action offered with zero outcomes is a
/// fatal contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AndOrPolicyV1 {
    /// How the AND-phase treats an empty outcome list.
    pub empty_outcomes: EmptyOutcomePolicyV1,
}

impl AndOrPolicyV1 {
    /// Canonical JSON projection for report binding.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "empty_outcomes": empty_outcomes_str(self.empty_outcomes),
        })
    }
}

/// What the AND-phase does when `results` returns nothing for an offered action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyOutcomePolicyV1 {
    /// Abort the search with `SearchError::ContractViolation`. Default.
    #[default]
    Fatal,
    /// Treat the action as unsolvable and let the OR-phase try the next one.
    TreatAsFailure,
}

fn empty_outcomes_str(p: EmptyOutcomePolicyV1) -> &'static str {
    match p {
        EmptyOutcomePolicyV1::Fatal => "fatal",
        EmptyOutcomePolicyV1::TreatAsFailure => "treat_as_failure",
    }
}
