//! End-to-end runs through the public API.

use steploop::{RunReport, Scheduler, StepRecord};

fn rec(
    round: usize,
    task: &str,
    step: &str,
) -> StepRecord {
    StepRecord::new(round, task, step)
}

#[test]
fn two_tasks_finish_in_two_rounds() {
    let mut sched = Scheduler::new();
    sched.register("A", ["a1", "a2"]);
    sched.register("B", ["b1"]);

    let report = sched.run();
    assert_eq!(report.rounds, 2);
    assert_eq!(
        report.records,
        vec![rec(1, "A", "a1"), rec(1, "B", "b1"), rec(2, "A", "a2")]
    );
}

#[test]
fn zero_step_task_never_appears_in_the_log() {
    let mut sched = Scheduler::new();
    sched.register("phantom", Vec::<String>::new());
    sched.register("worker", ["w1", "w2"]);

    let report = sched.run();
    assert_eq!(report.rounds, 2);
    assert!(report.records.iter().all(|r| r.task == "worker"));
}

#[test]
fn cancellation_mid_run_stops_a_pending_task() {
    let mut sched = Scheduler::new();
    sched.register("t1", ["a", "b", "c"]);
    sched.register("t2", ["a"]);
    sched.register("t3", ["a", "b"]);

    let mut report = RunReport::default();
    assert!(sched.run_round(&mut report));
    sched.cancel("t3");
    while sched.run_round(&mut report) {}

    assert_eq!(report.rounds, 3);
    // Round 1 ran all three; t2 finished there; t3 never ran again.
    assert_eq!(
        report.records,
        vec![
            rec(1, "t1", "a"),
            rec(1, "t2", "a"),
            rec(1, "t3", "a"),
            rec(2, "t1", "b"),
            rec(3, "t1", "c"),
        ]
    );
}

#[test]
fn step_record_display_is_readable() {
    let record = rec(2, "A", "a2");
    assert_eq!(record.to_string(), "round 2: A: a2");
}

#[test]
fn report_serializes_to_json() {
    let mut sched = Scheduler::new();
    sched.register("A", ["a1"]);
    let report = sched.run();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains(r#""rounds":1"#));
    assert!(json.contains(r#""task":"A""#));
}
