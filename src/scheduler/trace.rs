//! Observability records emitted by a scheduler run.

use serde::Serialize;

/// One advanced step: which round ran which task's step.
///
/// Records appear in round order, and within a round in registration order,
/// so an ordered record log fully describes a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// 1-based round number.
    pub round: usize,
    /// Name of the task that ran.
    pub task: String,
    /// The step description that was consumed.
    pub step: String,
}

impl StepRecord {
    /// Create a new record.
    #[inline]
    pub fn new(
        round: usize,
        task: impl Into<String>,
        step: impl Into<String>,
    ) -> Self {
        Self {
            round,
            task: task.into(),
            step: step.into(),
        }
    }
}

impl std::fmt::Display for StepRecord {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "round {}: {}: {}", self.round, self.task, self.step)
    }
}
