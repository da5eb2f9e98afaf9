//! Problem contracts.
//!
//! Two disjoint traits: [`NondeterministicProblem`] (consumed by the And-Or
//! engine) and [`DeterministicProblem`] (for single-outcome search). They share
//! no supertrait, so a single-result transition can never be requested through
//! a non-deterministic problem's own surface. [`Determinized`] is the only
//! bridge, and it refuses the deterministic-only operations.

use std::fmt::{Debug, Display};

use crate::error::SearchError;

/// A problem whose actions may each produce several possible states.
///
/// # Contract
///
/// - `actions` must be deterministic: same state → same actions in the same
///   order. An empty list marks a dead end, not an error.
/// - `results` must return a non-empty, duplicate-free list for every action
///   that `actions` offered for that state. Order is significant and becomes
///   the child order of the plan node.
/// - The engine never calls `results` with an action `actions` did not offer.
pub trait NondeterministicProblem {
    /// Opaque problem state. Equality drives cycle detection.
    type State: Clone + Eq + Debug;
    /// Opaque action. `Display` is only used for rendering and errors.
    type Action: Clone + Eq + Debug + Display;

    /// The search's starting point. Constant for the problem instance.
    fn initial_state(&self) -> Self::State;

    /// All actions available in `state`, in preference order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Every state executing `action` in `state` might produce.
    fn results(&self, state: &Self::State, action: &Self::Action) -> Vec<Self::State>;

    /// True iff `state` is a goal.
    fn is_goal(&self, state: &Self::State) -> bool;
}

/// A problem whose actions each produce exactly one state.
pub trait DeterministicProblem {
    type State: Clone + Eq + Debug;
    type Action: Clone + Eq + Debug + Display;

    fn initial_state(&self) -> Self::State;

    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The single state produced by `action` in `state`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnsupportedOperation`] when the underlying
    /// problem cannot answer with a single state.
    fn result(&self, state: &Self::State, action: &Self::Action)
        -> Result<Self::State, SearchError>;

    /// `(action, result)` pairs for every action available in `state`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnsupportedOperation`] when the underlying
    /// problem cannot answer with single states.
    fn successors(
        &self,
        state: &Self::State,
    ) -> Result<Vec<(Self::Action, Self::State)>, SearchError>;

    fn is_goal(&self, state: &Self::State) -> bool;
}

/// Presents a [`NondeterministicProblem`] through the [`DeterministicProblem`]
/// interface.
///
/// `initial_state`, `actions` and `is_goal` are forwarded. `result` and
/// `successors` fail immediately: there is no sound way to pick one outcome.
#[derive(Debug, Clone, Copy)]
pub struct Determinized<'a, P> {
    inner: &'a P,
}

impl<'a, P: NondeterministicProblem> Determinized<'a, P> {
    #[must_use]
    pub fn new(inner: &'a P) -> Self {
        Self { inner }
    }

    /// The wrapped non-deterministic problem.
    #[must_use]
    pub fn inner(&self) -> &'a P {
        self.inner
    }
}

impl<P: NondeterministicProblem> DeterministicProblem for Determinized<'_, P> {
    type State = P::State;
    type Action = P::Action;

    fn initial_state(&self) -> Self::State {
        self.inner.initial_state()
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        self.inner.actions(state)
    }

    fn result(
        &self,
        _state: &Self::State,
        _action: &Self::Action,
    ) -> Result<Self::State, SearchError> {
        Err(SearchError::UnsupportedOperation {
            operation: "result",
        })
    }

    fn successors(
        &self,
        _state: &Self::State,
    ) -> Result<Vec<(Self::Action, Self::State)>, SearchError> {
        Err(SearchError::UnsupportedOperation {
            operation: "successors",
        })
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.inner.is_goal(state)
    }
}
