//! Plan verification against a problem.
//!
//! Re-derives every structural guarantee of a conditional plan from the
//! problem itself: goal leaves, offered actions, and outcome coverage in
//! `results` order. Used by the harness before a plan is reported, and by
//! tests as an oracle.

use crate::contract::NondeterministicProblem;
use crate::search::PlanOf;

/// Typed failure for plan verification. `node` is the pre-order index of the
/// offending node (root = 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanVerifyError {
    /// The root state is not the problem's initial state.
    RootMismatch { expected: String, actual: String },
    /// A leaf's state does not satisfy the goal test.
    LeafNotGoal { node: usize, state: String },
    /// A node's action is not offered by `actions(state)`.
    ActionNotOffered {
        node: usize,
        state: String,
        action: String,
    },
    /// The node's action has no outcomes in the problem.
    EmptyOutcomes {
        node: usize,
        state: String,
        action: String,
    },
    /// Child count differs from the number of outcomes.
    OutcomeCountMismatch {
        node: usize,
        state: String,
        expected: usize,
        actual: usize,
    },
    /// A child's state differs from the outcome at the same position.
    OutcomeOrderMismatch {
        node: usize,
        index: usize,
        expected: String,
        actual: String,
    },
}

impl std::fmt::Display for PlanVerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RootMismatch { expected, actual } => {
                write!(f, "root state mismatch: expected {expected}, got {actual}")
            }
            Self::LeafNotGoal { node, state } => {
                write!(f, "node {node}: leaf state {state} is not a goal")
            }
            Self::ActionNotOffered {
                node,
                state,
                action,
            } => write!(f, "node {node}: action {action} not offered in {state}"),
            Self::EmptyOutcomes {
                node,
                state,
                action,
            } => write!(f, "node {node}: action {action} has no outcomes in {state}"),
            Self::OutcomeCountMismatch {
                node,
                state,
                expected,
                actual,
            } => write!(
                f,
                "node {node}: {actual} children for {expected} outcomes of {state}"
            ),
            Self::OutcomeOrderMismatch {
                node,
                index,
                expected,
                actual,
            } => write!(
                f,
                "node {node}: child {index} is {actual}, expected outcome {expected}"
            ),
        }
    }
}

impl std::error::Error for PlanVerifyError {}

/// Check every node of `plan` against `problem`.
///
/// # Errors
///
/// Returns the first [`PlanVerifyError`] found in pre-order.
pub fn verify_plan<P: NondeterministicProblem>(
    problem: &P,
    plan: &PlanOf<P>,
) -> Result<(), PlanVerifyError> {
    for (node, n) in plan.iter().enumerate() {
        let state = n.state();
        let Some(action) = n.action() else {
            // Leaves built by `ConditionalPlan::goal` cannot have children.
            if !problem.is_goal(state) {
                return Err(PlanVerifyError::LeafNotGoal {
                    node,
                    state: format!("{state:?}"),
                });
            }
            continue;
        };

        if !problem.actions(state).contains(action) {
            return Err(PlanVerifyError::ActionNotOffered {
                node,
                state: format!("{state:?}"),
                action: action.to_string(),
            });
        }

        let outcomes = problem.results(state, action);
        if outcomes.len() != n.children().len() {
            return Err(PlanVerifyError::OutcomeCountMismatch {
                node,
                state: format!("{state:?}"),
                expected: outcomes.len(),
                actual: n.children().len(),
            });
        }

        for (index, (expected, child)) in outcomes.iter().zip(n.children()).enumerate() {
            if expected != child.state() {
                return Err(PlanVerifyError::OutcomeOrderMismatch {
                    node,
                    index,
                    expected: format!("{expected:?}"),
                    actual: format!("{:?}", child.state()),
                });
            }
        }

        if outcomes.is_empty() {
            return Err(PlanVerifyError::EmptyOutcomes {
                node,
                state: format!("{state:?}"),
                action: action.to_string(),
            });
        }
    }
    Ok(())
}

/// [`verify_plan`], additionally requiring the root to be the initial state.
///
/// # Errors
///
/// Returns [`PlanVerifyError::RootMismatch`] or any error from [`verify_plan`].
pub fn verify_plan_from_root<P: NondeterministicProblem>(
    problem: &P,
    plan: &PlanOf<P>,
) -> Result<(), PlanVerifyError> {
    let initial = problem.initial_state();
    if *plan.state() != initial {
        return Err(PlanVerifyError::RootMismatch {
            expected: format!("{initial:?}"),
            actual: format!("{:?}", plan.state()),
        });
    }
    verify_plan(problem, plan)
}
