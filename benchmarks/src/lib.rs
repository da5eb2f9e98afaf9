//! Shared worlds for the contingency benchmark suites.

use std::fmt;

use contingency_search::contract::NondeterministicProblem;

/// Ladder action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rung {
    /// Looks promising but loops back to the current state or the start.
    Detour,
    /// Moves up one level onto any of `width` lanes.
    Climb,
}

impl fmt::Display for Rung {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detour => f.write_str("Detour"),
            Self::Climb => f.write_str("Climb"),
        }
    }
}

/// Position on the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Foothold {
    pub level: u32,
    pub lane: u32,
}

impl Foothold {
    const START: Self = Self { level: 0, lane: 0 };
}

impl fmt::Display for Foothold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}.{}", self.level, self.lane)
    }
}

/// A `width`-lane ladder of height `depth`. Every non-top state offers
/// `Detour` before `Climb`, so each OR-node pays for one failed AND-branch
/// (a cycle) before finding the climb. The plan is a complete `width`-ary
/// tree.
#[derive(Debug, Clone, Copy)]
pub struct DetourLadder {
    pub width: u32,
    pub depth: u32,
}

impl NondeterministicProblem for DetourLadder {
    type State = Foothold;
    type Action = Rung;

    fn initial_state(&self) -> Foothold {
        Foothold::START
    }

    fn actions(&self, state: &Foothold) -> Vec<Rung> {
        if state.level < self.depth {
            vec![Rung::Detour, Rung::Climb]
        } else {
            Vec::new()
        }
    }

    fn results(&self, state: &Foothold, action: &Rung) -> Vec<Foothold> {
        match action {
            Rung::Detour if *state == Foothold::START => vec![Foothold::START],
            Rung::Detour => vec![*state, Foothold::START],
            Rung::Climb => (0..self.width)
                .map(|lane| Foothold {
                    level: state.level + 1,
                    lane,
                })
                .collect(),
        }
    }

    fn is_goal(&self, state: &Foothold) -> bool {
        state.level == self.depth
    }
}

/// Configurations timed by the ladder benchmark: `(width, depth)`.
pub const LADDER_REGIMES: &[(u32, u32)] = &[(2, 4), (2, 8), (3, 6)];
