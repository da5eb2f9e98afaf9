//! `ErraticVacuum`: the two-location erratic vacuum world.
//!
//! Two squares, `A` (left) and `B` (right), each `Clean` or `Dirty`, and one
//! agent. Actions are offered in the order `Suck`, `Right`, `Left` in every
//! state.
//!
//! - `Suck` on a dirty square cleans it and sometimes also cleans the other
//!   square: outcomes `[only here cleaned, both cleaned]` (one outcome if the
//!   other square is already clean).
//! - `Suck` on a clean square sometimes deposits dirt: outcomes
//!   `[unchanged, here dirty]`.
//! - `Right` / `Left` move deterministically (moving into the wall stays put).
//!
//! Goal: both squares clean.

use std::fmt;

use contingency_search::contract::NondeterministicProblem;

use crate::contract::PlanningWorldV1;

/// A square in the vacuum world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    A,
    B,
}

impl Location {
    /// The other square.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// Dirt status of one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dirt {
    Clean,
    Dirty,
}

/// Agent location plus the dirt status of both squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VacuumState {
    pub location: Location,
    pub a: Dirt,
    pub b: Dirt,
}

impl VacuumState {
    #[must_use]
    pub const fn new(location: Location, a: Dirt, b: Dirt) -> Self {
        Self { location, a, b }
    }

    /// Dirt status at `location`.
    #[must_use]
    pub fn dirt_at(&self, location: Location) -> Dirt {
        match location {
            Location::A => self.a,
            Location::B => self.b,
        }
    }

    /// Copy with the dirt at `location` replaced.
    #[must_use]
    pub fn with_dirt(mut self, location: Location, dirt: Dirt) -> Self {
        match location {
            Location::A => self.a = dirt,
            Location::B => self.b = dirt,
        }
        self
    }

    /// Copy with the agent at `location`.
    #[must_use]
    pub fn moved_to(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Both squares clean.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.a == Dirt::Clean && self.b == Dirt::Clean
    }
}

impl fmt::Display for VacuumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(at {:?}, A={:?}, B={:?})",
            self.location, self.a, self.b
        )
    }
}

/// Vacuum agent actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VacuumAction {
    Suck,
    Right,
    Left,
}

impl VacuumAction {
    /// Enumeration order used by both vacuum worlds.
    pub const ALL: [Self; 3] = [Self::Suck, Self::Right, Self::Left];

    /// Destination square for a move action.
    #[must_use]
    pub fn destination(self) -> Option<Location> {
        match self {
            Self::Suck => None,
            Self::Right => Some(Location::B),
            Self::Left => Some(Location::A),
        }
    }
}

impl fmt::Display for VacuumAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Suck => "Suck",
            Self::Right => "Right",
            Self::Left => "Left",
        };
        f.write_str(name)
    }
}

/// The erratic vacuum world from a configurable start state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErraticVacuum {
    initial: VacuumState,
}

impl ErraticVacuum {
    #[must_use]
    pub const fn new(initial: VacuumState) -> Self {
        Self { initial }
    }
}

impl Default for ErraticVacuum {
    /// Agent at `A`, both squares dirty.
    fn default() -> Self {
        Self::new(VacuumState::new(Location::A, Dirt::Dirty, Dirt::Dirty))
    }
}

impl NondeterministicProblem for ErraticVacuum {
    type State = VacuumState;
    type Action = VacuumAction;

    fn initial_state(&self) -> VacuumState {
        self.initial
    }

    fn actions(&self, _state: &VacuumState) -> Vec<VacuumAction> {
        VacuumAction::ALL.to_vec()
    }

    fn results(&self, state: &VacuumState, action: &VacuumAction) -> Vec<VacuumState> {
        if let Some(to) = action.destination() {
            return vec![state.moved_to(to)];
        }

        let here = state.location;
        match state.dirt_at(here) {
            Dirt::Dirty => {
                let cleaned = state.with_dirt(here, Dirt::Clean);
                let both = cleaned.with_dirt(here.other(), Dirt::Clean);
                if both == cleaned {
                    vec![cleaned]
                } else {
                    vec![cleaned, both]
                }
            }
            Dirt::Clean => vec![*state, state.with_dirt(here, Dirt::Dirty)],
        }
    }

    fn is_goal(&self, state: &VacuumState) -> bool {
        state.is_clean()
    }
}

impl PlanningWorldV1 for ErraticVacuum {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "erratic_vacuum"
    }
}
