//! Lock tests for the erratic vacuum scenario: plan shape, rendering,
//! counters, and verification against the world.

use contingency_harness::worlds::vacuum::Dirt::{Clean, Dirty};
use contingency_harness::worlds::vacuum::Location::{A, B};
use contingency_harness::worlds::vacuum::{ErraticVacuum, VacuumAction, VacuumState};
use contingency_search::contract::{DeterministicProblem, Determinized, NondeterministicProblem};
use contingency_search::error::SearchError;
use contingency_search::policy::AndOrPolicyV1;
use contingency_search::render::render_plan;
use contingency_search::search::{search, search_with_policy, SearchResult};
use contingency_search::verify::verify_plan_from_root;

#[test]
fn both_dirty_at_a_yields_suck_rooted_plan() {
    let world = ErraticVacuum::default();
    let SearchResult::Success(plan) = search(&world).unwrap() else {
        panic!("erratic vacuum must be solvable");
    };

    assert_eq!(*plan.state(), VacuumState::new(A, Dirty, Dirty));
    assert_eq!(plan.action(), Some(&VacuumAction::Suck));
    assert_eq!(plan.children().len(), 2);

    // Outcome 0: only A cleaned → Right, Suck, goal.
    let partial = &plan.children()[0];
    assert_eq!(*partial.state(), VacuumState::new(A, Clean, Dirty));
    assert_eq!(partial.action(), Some(&VacuumAction::Right));
    assert_eq!(partial.children().len(), 1);
    let at_b = &partial.children()[0];
    assert_eq!(*at_b.state(), VacuumState::new(B, Clean, Dirty));
    assert_eq!(at_b.action(), Some(&VacuumAction::Suck));
    assert_eq!(at_b.children().len(), 1);
    let done = &at_b.children()[0];
    assert_eq!(*done.state(), VacuumState::new(B, Clean, Clean));
    assert!(done.action().is_none());
    assert!(done.is_leaf());

    // Outcome 1: both cleaned → immediate goal leaf.
    let lucky = &plan.children()[1];
    assert_eq!(*lucky.state(), VacuumState::new(A, Clean, Clean));
    assert!(lucky.action().is_none());
    assert!(lucky.is_leaf());
}

#[test]
fn rendered_plan_is_stable() {
    let plan = search(&ErraticVacuum::default())
        .unwrap()
        .into_plan()
        .unwrap();
    assert_eq!(
        render_plan(&plan),
        "Suck IF (at A, A=Clean, B=Dirty) THEN [Right Suck NoOp] \
         ELSE IF (at A, A=Clean, B=Clean) THEN [NoOp]"
    );
}

#[test]
fn counters_match_hand_trace() {
    let outcome = search_with_policy(&ErraticVacuum::default(), &AndOrPolicyV1::default()).unwrap();
    let stats = outcome.stats;
    assert_eq!(stats.or_nodes, 6);
    assert_eq!(stats.and_nodes, 4);
    assert_eq!(stats.goal_leaves, 2);
    assert_eq!(stats.cycles_pruned, 1, "Suck on clean A loops back");
    assert_eq!(stats.dead_ends, 0);
    assert_eq!(stats.max_path_len, 3);
}

#[test]
fn every_start_state_is_solvable_and_verifies() {
    for location in [A, B] {
        for a in [Clean, Dirty] {
            for b in [Clean, Dirty] {
                let world = ErraticVacuum::new(VacuumState::new(location, a, b));
                let plan = search(&world)
                    .unwrap()
                    .into_plan()
                    .unwrap_or_else(|| panic!("no plan from {}", world.initial_state()));
                verify_plan_from_root(&world, &plan).unwrap();
            }
        }
    }
}

#[test]
fn clean_start_is_a_bare_goal_leaf() {
    let world = ErraticVacuum::new(VacuumState::new(B, Clean, Clean));
    let plan = search(&world).unwrap().into_plan().unwrap();
    assert!(plan.action().is_none());
    assert!(plan.children().is_empty());
    assert_eq!(render_plan(&plan), "NoOp");
}

#[test]
fn deterministic_transition_is_refused() {
    let world = ErraticVacuum::default();
    let det = Determinized::new(&world);
    let s = world.initial_state();

    assert_eq!(
        det.result(&s, &VacuumAction::Right),
        Err(SearchError::UnsupportedOperation {
            operation: "result"
        })
    );
    assert_eq!(
        det.successors(&s),
        Err(SearchError::UnsupportedOperation {
            operation: "successors"
        })
    );
    // Non-transition queries still answer.
    assert_eq!(det.actions(&s).len(), 3);
    assert!(!det.is_goal(&s));
}
