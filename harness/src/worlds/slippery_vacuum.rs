//! `SlipperyVacuum`: vacuum world where movement may fail.
//!
//! `Suck` is deterministic (cleans the current square, no effect if already
//! clean). `Right` / `Left` either move or leave the agent where it is:
//! outcomes `[moved, unchanged]`, collapsed to one when already there.
//!
//! Every move keeps the current state as a possible outcome, so any plan that
//! needs a move must loop. And-Or search reports `Failure` for those starts.

use contingency_search::contract::NondeterministicProblem;

use crate::contract::PlanningWorldV1;
use crate::worlds::vacuum::{Dirt, VacuumAction, VacuumState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlipperyVacuum {
    initial: VacuumState,
}

impl SlipperyVacuum {
    #[must_use]
    pub const fn new(initial: VacuumState) -> Self {
        Self { initial }
    }
}

impl NondeterministicProblem for SlipperyVacuum {
    type State = VacuumState;
    type Action = VacuumAction;

    fn initial_state(&self) -> VacuumState {
        self.initial
    }

    fn actions(&self, _state: &VacuumState) -> Vec<VacuumAction> {
        VacuumAction::ALL.to_vec()
    }

    fn results(&self, state: &VacuumState, action: &VacuumAction) -> Vec<VacuumState> {
        match action.destination() {
            Some(to) if to != state.location => vec![state.moved_to(to), *state],
            Some(_) => vec![*state],
            None => vec![state.with_dirt(state.location, Dirt::Clean)],
        }
    }

    fn is_goal(&self, state: &VacuumState) -> bool {
        state.is_clean()
    }
}

impl PlanningWorldV1 for SlipperyVacuum {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "slippery_vacuum"
    }
}
