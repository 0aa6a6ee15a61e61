//! Cooperative round-robin step scheduler
//!
//! This module provides the [`Scheduler`], which owns a collection of
//! [`StepTask`]s and drives each one forward by exactly one step per round.
//! "Concurrency" here means interleaved progress on a single thread: a task
//! yields control simply by returning from `advance`, and gets its next step
//! in the next round. Nothing blocks, sleeps, or touches a clock.

pub mod task;
pub mod trace;

pub use task::{Advance, StepTask, TaskId, TaskIdGenerator};
pub use trace::StepRecord;

use serde::Serialize;
use smallvec::SmallVec;
use tracing::{debug, info, trace};


/// Result of driving a scheduler to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Total number of rounds executed.
    pub rounds: usize,
    /// Ordered step log: round order, registration order within a round.
    pub records: Vec<StepRecord>,
}

/// Round-robin scheduler over a registration-ordered task collection.
///
/// Tasks run in registration order within every round; a task that reports
/// no more work is removed at the end of the round it finished in. The
/// scheduler is a plain value with no global state, so tests can run any
/// number of independent instances.
#[derive(Debug, Default)]
pub struct Scheduler {
    /// Active tasks, in registration order.
    tasks: Vec<StepTask>,
    /// ID source for registrations.
    ids: TaskIdGenerator,
}

impl Scheduler {
    /// Create a new empty scheduler.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task and return its ID.
    ///
    /// Order of registration is the round-robin execution order. Names are
    /// not checked for uniqueness; `TaskId` is the unambiguous handle. A
    /// task with zero steps is accepted and completes trivially: it is swept
    /// before the first round without emitting a step.
    pub fn register<N, I, S>(
        &mut self,
        name: N,
        steps: I,
    ) -> TaskId
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = self.ids.next();
        let steps: Vec<String> = steps.into_iter().map(Into::into).collect();
        let task = StepTask::new(id, name, steps);
        debug!("registered {} '{}' ({} steps)", id, task.name(), task.steps().len());
        self.tasks.push(task);
        id
    }

    /// Cancel every pending task with the given name.
    ///
    /// Cancelled tasks never advance again and are removed before the next
    /// round; already-consumed steps are not rolled back. Returns whether
    /// any task was cancelled. An unknown name is a no-op, not an error:
    /// the task may simply have finished naturally in an earlier round, and
    /// callers cannot tell the two cases apart.
    pub fn cancel(
        &mut self,
        name: &str,
    ) -> bool {
        let mut hit = false;
        for task in self
            .tasks
            .iter_mut()
            .filter(|t| t.name() == name && !t.is_cancelled())
        {
            task.cancel();
            debug!("cancelled {} '{}'", task.id(), task.name());
            hit = true;
        }
        hit
    }

    /// Cancel the pending task with the given ID. No-op if absent.
    pub fn cancel_id(
        &mut self,
        id: TaskId,
    ) -> bool {
        match self
            .tasks
            .iter_mut()
            .find(|t| t.id() == id && !t.is_cancelled())
        {
            Some(task) => {
                task.cancel();
                debug!("cancelled {} '{}'", task.id(), task.name());
                true
            }
            None => false,
        }
    }

    /// Number of tasks still registered (finished tasks are swept by runs).
    #[inline]
    pub fn active(&self) -> usize {
        self.tasks.len()
    }

    /// Check whether no tasks remain.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Run all registered tasks to completion.
    ///
    /// Each round gives every active task exactly one `advance` call, in
    /// registration order; tasks that finish are removed after the round.
    /// Terminates because every task's remaining step count strictly
    /// decreases each round. Given identical registrations, two runs
    /// produce identical reports.
    pub fn run(&mut self) -> RunReport {
        info!("scheduler starting with {} tasks", self.tasks.len());

        let mut report = RunReport::default();
        while self.run_round(&mut report) {}

        info!("all tasks complete after {} rounds", report.rounds);
        report
    }

    /// Execute one scheduling round, appending to `report`.
    ///
    /// Sweeps finished and cancelled tasks before counting the round, so a
    /// round only happens when runnable work exists. Returns whether active
    /// tasks remain afterwards. This is the hook for drivers that need to
    /// act between rounds (registration mid-run, cancellation).
    pub fn run_round(
        &mut self,
        report: &mut RunReport,
    ) -> bool {
        self.sweep();
        if self.tasks.is_empty() {
            return false;
        }

        report.rounds += 1;
        let round = report.rounds;

        // Stable snapshot of the active set: which tasks run this round is
        // fixed at round start. Positions stay valid for the whole round
        // because the sweep only runs between rounds.
        let snapshot: SmallVec<[usize; 8]> = (0..self.tasks.len()).collect();

        for index in snapshot {
            let Some(task) = self.tasks.get_mut(index) else {
                continue;
            };
            let name = task.name().to_owned();
            match task.advance() {
                Advance::More(step) | Advance::Last(step) => {
                    debug!("round {}: {}: {}", round, name, step);
                    report.records.push(StepRecord::new(round, name, step));
                }
                Advance::Exhausted => {}
            }
        }

        self.sweep();
        !self.tasks.is_empty()
    }

    /// Remove finished and cancelled tasks from the active collection.
    fn sweep(&mut self) {
        self.tasks.retain(|task| {
            let done = task.is_finished() || task.is_cancelled();
            if done {
                trace!("removing {} '{}'", task.id(), task.name());
            }
            !done
        });
    }
}
