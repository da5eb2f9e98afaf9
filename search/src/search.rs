//! And-Or search entry point and the two mutually recursive phases.
//!
//! The OR-phase picks one action (succeeds if any action's AND-phase
//! succeeds). The AND-phase handles every outcome of that action (succeeds only
//! if every outcome's OR-phase succeeds). Actions and outcomes are tried in the
//! exact order the problem returns them; the first complete plan wins.

use tracing::{debug, trace};

use crate::contract::NondeterministicProblem;
use crate::error::SearchError;
use crate::plan::ConditionalPlan;
use crate::policy::{AndOrPolicyV1, EmptyOutcomePolicyV1};
use crate::stats::SearchStatsV1;

/// Plan type produced for problem `P`.
pub type PlanOf<P> = ConditionalPlan<
    <P as NondeterministicProblem>::State,
    <P as NondeterministicProblem>::Action,
>;

/// Result type produced for problem `P`.
pub type ResultOf<P> =
    SearchResult<<P as NondeterministicProblem>::State, <P as NondeterministicProblem>::Action>;

/// Outcome of a search: a plan covering every outcome, or proof that none
/// exists along the explored choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<S, A> {
    /// A conditional plan reaching a goal whatever outcomes occur.
    Success(ConditionalPlan<S, A>),
    /// No acyclic conditional plan exists from this state.
    Failure,
}

impl<S, A> SearchResult<S, A> {
    /// Returns `true` for [`SearchResult::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The plan, if the search succeeded.
    #[must_use]
    pub fn plan(&self) -> Option<&ConditionalPlan<S, A>> {
        match self {
            Self::Success(plan) => Some(plan),
            Self::Failure => None,
        }
    }

    /// Consume the result, yielding the plan if the search succeeded.
    #[must_use]
    pub fn into_plan(self) -> Option<ConditionalPlan<S, A>> {
        match self {
            Self::Success(plan) => Some(plan),
            Self::Failure => None,
        }
    }
}

/// A search result together with the counters collected while producing it.
#[derive(Debug, Clone)]
pub struct SearchOutcome<S, A> {
    pub result: SearchResult<S, A>,
    pub stats: SearchStatsV1,
}

/// Run And-Or search from the problem's initial state with the default
/// (strict) policy.
///
/// # Errors
///
/// Returns [`SearchError::ContractViolation`] if the problem offers an action
/// whose `results` is empty. `Failure` is not an error.
pub fn search<P: NondeterministicProblem>(problem: &P) -> Result<ResultOf<P>, SearchError> {
    search_with_policy(problem, &AndOrPolicyV1::default()).map(|outcome| outcome.result)
}

/// Run And-Or search under `policy` and report counters.
///
/// Each call starts with an empty ancestor path and fresh counters; nothing
/// carries over between calls.
///
/// # Errors
///
/// Returns [`SearchError::ContractViolation`] if the problem offers an action
/// whose `results` is empty and `policy.empty_outcomes` is
/// [`EmptyOutcomePolicyV1::Fatal`].
pub fn search_with_policy<P: NondeterministicProblem>(
    problem: &P,
    policy: &AndOrPolicyV1,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError> {
    let root = problem.initial_state();
    debug!(root = ?root, policy = ?policy.empty_outcomes, "and-or search started");

    let mut engine = AndOrSearch {
        problem,
        policy,
        stats: SearchStatsV1::default(),
    };
    let mut path = Vec::new();
    let result = engine.or_search(root, &mut path)?;

    debug!(
        success = result.is_success(),
        or_nodes = engine.stats.or_nodes,
        and_nodes = engine.stats.and_nodes,
        cycles_pruned = engine.stats.cycles_pruned,
        "and-or search finished"
    );

    Ok(SearchOutcome {
        result,
        stats: engine.stats,
    })
}

struct AndOrSearch<'a, P: NondeterministicProblem> {
    problem: &'a P,
    policy: &'a AndOrPolicyV1,
    stats: SearchStatsV1,
}

impl<P: NondeterministicProblem> AndOrSearch<'_, P> {
    /// OR-phase. `path` holds the states reached by choices above `state`
    /// and is restored to its entry contents before returning `Ok`.
    fn or_search(
        &mut self,
        state: P::State,
        path: &mut Vec<P::State>,
    ) -> Result<ResultOf<P>, SearchError> {
        self.stats.or_nodes += 1;
        self.stats.max_path_len = self.stats.max_path_len.max(path.len() as u64);

        if self.problem.is_goal(&state) {
            self.stats.goal_leaves += 1;
            trace!(state = ?state, "goal reached");
            return Ok(SearchResult::Success(ConditionalPlan::goal(state)));
        }

        if path.contains(&state) {
            self.stats.cycles_pruned += 1;
            trace!(state = ?state, depth = path.len(), "cycle pruned");
            return Ok(SearchResult::Failure);
        }

        path.push(state.clone());
        let attempt = self.try_actions(&state, path);
        path.pop();
        let result = attempt?;

        if !result.is_success() {
            self.stats.dead_ends += 1;
            trace!(state = ?state, "dead end");
        }
        Ok(result)
    }

    /// First-applicable-action policy: the first action whose AND-phase
    /// succeeds is the answer.
    fn try_actions(
        &mut self,
        state: &P::State,
        path: &mut Vec<P::State>,
    ) -> Result<ResultOf<P>, SearchError> {
        for action in self.problem.actions(state) {
            let outcomes = self.problem.results(state, &action);
            let result = self.and_search(state, &action, outcomes, path)?;
            if result.is_success() {
                return Ok(result);
            }
        }
        Ok(SearchResult::Failure)
    }

    /// AND-phase. Every outcome is solved against the same ancestor `path`.
    fn and_search(
        &mut self,
        origin: &P::State,
        action: &P::Action,
        outcomes: Vec<P::State>,
        path: &mut Vec<P::State>,
    ) -> Result<ResultOf<P>, SearchError> {
        self.stats.and_nodes += 1;

        if outcomes.is_empty() {
            return match self.policy.empty_outcomes {
                EmptyOutcomePolicyV1::Fatal => Err(SearchError::ContractViolation {
                    state: format!("{origin:?}"),
                    action: action.to_string(),
                }),
                EmptyOutcomePolicyV1::TreatAsFailure => {
                    trace!(state = ?origin, action = %action, "empty outcomes treated as failure");
                    Ok(SearchResult::Failure)
                }
            };
        }

        trace!(state = ?origin, action = %action, outcomes = outcomes.len(), "and-phase");

        let mut children = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match self.or_search(outcome, path)? {
                SearchResult::Success(child) => children.push(child),
                SearchResult::Failure => return Ok(SearchResult::Failure),
            }
        }

        Ok(SearchResult::Success(ConditionalPlan::branch(
            origin.clone(),
            action.clone(),
            children,
        )))
    }
}
