//! Contingency Search: And-Or search for conditional plans in
//! non-deterministic problems.
//!
//! Given a problem whose actions may each produce several states, the engine
//! finds a plan that reaches a goal whichever outcome occurs, or reports that
//! no acyclic plan exists. It depends on nothing but the problem contract;
//! it does NOT depend on `contingency_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! contingency_search  ←  contingency_harness
//! (contract, engine)     (worlds, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`NondeterministicProblem`]: the contract the engine searches over
//! - [`ConditionalPlan`]: immutable branching plan, one child per outcome
//! - [`SearchResult`]: `Success(plan)` or `Failure`
//! - [`AndOrPolicyV1`]: empty-outcome policy
//! - [`SearchStatsV1`]: per-call counters
//!
//! [`NondeterministicProblem`]: contract::NondeterministicProblem
//! [`ConditionalPlan`]: plan::ConditionalPlan
//! [`SearchResult`]: search::SearchResult
//! [`AndOrPolicyV1`]: policy::AndOrPolicyV1
//! [`SearchStatsV1`]: stats::SearchStatsV1

#![forbid(unsafe_code)]

pub mod contract;
pub mod digest;
pub mod error;
pub mod plan;
pub mod policy;
pub mod render;
pub mod search;
pub mod stats;
pub mod verify;
