//! Property tests for the round loop.

use proptest::prelude::*;
use steploop::Scheduler;

/// Between one and eight tasks, each with zero to five short steps.
fn step_lists() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-z]{1,8}", 0..6), 1..9)
}

fn build(lists: &[Vec<String>]) -> Scheduler {
    let mut sched = Scheduler::new();
    for (i, steps) in lists.iter().enumerate() {
        sched.register(format!("t{}", i), steps.clone());
    }
    sched
}

proptest! {
    #[test]
    fn rounds_equal_longest_step_count(lists in step_lists()) {
        let report = build(&lists).run();
        let longest = lists.iter().map(Vec::len).max().unwrap_or(0);
        prop_assert_eq!(report.rounds, longest);
    }

    #[test]
    fn every_task_emits_its_steps_in_order(lists in step_lists()) {
        let report = build(&lists).run();
        for (i, steps) in lists.iter().enumerate() {
            let name = format!("t{}", i);
            let emitted: Vec<&str> = report
                .records
                .iter()
                .filter(|r| r.task == name)
                .map(|r| r.step.as_str())
                .collect();
            let expected: Vec<&str> = steps.iter().map(String::as_str).collect();
            prop_assert_eq!(emitted, expected);
        }
    }

    #[test]
    fn rounds_advance_tasks_in_registration_order(lists in step_lists()) {
        let report = build(&lists).run();
        for round in 1..=report.rounds {
            let in_round: Vec<&str> = report
                .records
                .iter()
                .filter(|r| r.round == round)
                .map(|r| r.task.as_str())
                .collect();
            // Exactly the tasks with at least `round` steps, in order.
            let expected: Vec<String> = lists
                .iter()
                .enumerate()
                .filter(|(_, steps)| steps.len() >= round)
                .map(|(i, _)| format!("t{}", i))
                .collect();
            let expected: Vec<&str> = expected.iter().map(String::as_str).collect();
            prop_assert_eq!(in_round, expected);
        }
    }

    #[test]
    fn runs_are_deterministic(lists in step_lists()) {
        let first = build(&lists).run();
        let second = build(&lists).run();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn total_emissions_equal_total_steps(lists in step_lists()) {
        let report = build(&lists).run();
        let total: usize = lists.iter().map(Vec::len).sum();
        prop_assert_eq!(report.records.len(), total);
    }
}
