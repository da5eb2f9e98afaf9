//! Typed search errors.
//!
//! `SearchError` is reserved for conditions that mean the *inputs* are broken,
//! not that a plan is unreachable. "No plan exists" is the ordinary
//! [`crate::search::SearchResult::Failure`] value and never appears here.

/// Fatal failure raised by the engine or by a problem adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A problem offered `action` in `state` but `results` produced no
    /// outcome for it. The problem implementation is broken.
    ContractViolation { state: String, action: String },
    /// A deterministic-only operation was invoked on a non-deterministic
    /// problem.
    UnsupportedOperation { operation: &'static str },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContractViolation { state, action } => {
                write!(
                    f,
                    "problem contract violation: action {action} offered in state {state} has no outcomes"
                )
            }
            Self::UnsupportedOperation { operation } => {
                write!(
                    f,
                    "operation `{operation}` is unsupported for a non-deterministic problem"
                )
            }
        }
    }
}

impl std::error::Error for SearchError {}
