//! Small hand-built problems that pin down engine behavior at the edges:
//! inescapable cycles, broken contracts, and wide outcome fan-out.

use std::fmt;

use contingency_search::contract::NondeterministicProblem;

/// Action label shared by the fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(pub &'static str);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A ring of `size` states. Every action leads back into the ring, and no
/// state is a goal: every branch must end in a cycle.
///
/// `Step` moves to the next state; `Drift` lands on the next state or
/// stays put.
#[derive(Debug, Clone, Copy)]
pub struct CyclicTrap {
    pub size: u32,
}

impl NondeterministicProblem for CyclicTrap {
    type State = u32;
    type Action = Label;

    fn initial_state(&self) -> u32 {
        0
    }

    fn actions(&self, _state: &u32) -> Vec<Label> {
        vec![Label("Step"), Label("Drift")]
    }

    fn results(&self, state: &u32, action: &Label) -> Vec<u32> {
        let next = (state + 1) % self.size;
        match action.0 {
            "Step" => vec![next],
            _ if next == *state => vec![next],
            _ => vec![next, *state],
        }
    }

    fn is_goal(&self, _state: &u32) -> bool {
        false
    }
}

/// Offers `Vanish` at the start state, which has no outcomes, followed by a
/// working `Finish`.
#[derive(Debug, Clone, Copy)]
pub struct VanishingAction;

impl NondeterministicProblem for VanishingAction {
    type State = &'static str;
    type Action = Label;

    fn initial_state(&self) -> &'static str {
        "start"
    }

    fn actions(&self, state: &&'static str) -> Vec<Label> {
        if *state == "start" {
            vec![Label("Vanish"), Label("Finish")]
        } else {
            Vec::new()
        }
    }

    fn results(&self, _state: &&'static str, action: &Label) -> Vec<&'static str> {
        match action.0 {
            "Finish" => vec!["done"],
            _ => Vec::new(),
        }
    }

    fn is_goal(&self, state: &&'static str) -> bool {
        *state == "done"
    }
}

/// Layered world: from `(level, lane)` the single action `Advance` lands on
/// any of `width` lanes of the next level. Level `depth` is the goal.
///
/// A plan is a complete `width`-ary tree of height `depth`.
#[derive(Debug, Clone, Copy)]
pub struct FanOut {
    pub width: u32,
    pub depth: u32,
}

impl NondeterministicProblem for FanOut {
    type State = (u32, u32);
    type Action = Label;

    fn initial_state(&self) -> (u32, u32) {
        (0, 0)
    }

    fn actions(&self, state: &(u32, u32)) -> Vec<Label> {
        if state.0 < self.depth {
            vec![Label("Advance")]
        } else {
            Vec::new()
        }
    }

    fn results(&self, state: &(u32, u32), _action: &Label) -> Vec<(u32, u32)> {
        (0..self.width).map(|lane| (state.0 + 1, lane)).collect()
    }

    fn is_goal(&self, state: &(u32, u32)) -> bool {
        state.0 == self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_trap_never_leaves_the_ring() {
        let trap = CyclicTrap { size: 3 };
        for s in 0..3 {
            for a in trap.actions(&s) {
                assert!(trap.results(&s, &a).iter().all(|r| *r < 3));
            }
        }
    }

    #[test]
    fn fan_out_has_width_outcomes() {
        let world = FanOut { width: 3, depth: 2 };
        assert_eq!(world.results(&(0, 0), &Label("Advance")).len(), 3);
        assert!(world.actions(&(2, 1)).is_empty());
    }
}
