//! World contract: a named non-deterministic problem the runner can report on.
//!
//! Worlds provide domain data only (states, actions, outcomes, goal test).
//! Worlds may NOT implement search, plan verification, hashing, or report
//! persistence; those are engine and runner concerns.

use contingency_search::contract::NondeterministicProblem;

/// A non-deterministic problem with a stable identifier.
pub trait PlanningWorldV1: NondeterministicProblem {
    /// Unique world identifier (e.g., `"erratic_vacuum"`).
    fn world_id(&self) -> &str;
}
