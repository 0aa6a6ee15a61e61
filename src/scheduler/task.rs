//! Task definitions for the scheduler.
//!
//! A task is a plain record: a name and a fixed, ordered sequence of step
//! descriptions, consumed one step per `advance` call.

/// Unique task identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub usize);

impl TaskId {
    /// Get the inner value.
    #[inline]
    pub fn inner(&self) -> usize {
        self.0
    }
}

impl From<usize> for TaskId {
    fn from(val: usize) -> Self {
        Self(val)
    }
}

impl From<TaskId> for usize {
    fn from(val: TaskId) -> Self {
        val.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

/// Outcome of advancing a task by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance<'a> {
    /// A step ran and the task still has work left.
    More(&'a str),
    /// A step ran and it was the task's last.
    Last(&'a str),
    /// The task had already finished; nothing ran.
    Exhausted,
}

impl<'a> Advance<'a> {
    /// The step that ran, if any.
    #[inline]
    pub fn step(&self) -> Option<&'a str> {
        match self {
            Advance::More(step) | Advance::Last(step) => Some(step),
            Advance::Exhausted => None,
        }
    }

    /// Whether the task has work left after this advance.
    #[inline]
    pub fn has_more(&self) -> bool {
        matches!(self, Advance::More(_))
    }
}

/// One unit of cooperative work: a fixed sequence of named steps and a
/// cursor marking how far it has progressed.
///
/// Invariant: `cursor <= steps.len()`; the task is finished exactly when
/// the two are equal. The step sequence never changes after construction.
#[derive(Debug, Clone)]
pub struct StepTask {
    /// Unique task ID, assigned at registration.
    id: TaskId,
    /// Task name for log lines and cancellation.
    name: String,
    /// Ordered step descriptions, fixed at creation.
    steps: Vec<String>,
    /// Index of the next step to run.
    cursor: usize,
    /// Set by the scheduler; a cancelled task never advances again.
    cancelled: bool,
}

impl StepTask {
    /// Create a new task with the given ID, name, and steps.
    pub fn new(
        id: TaskId,
        name: impl Into<String>,
        steps: Vec<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            steps,
            cursor: 0,
            cancelled: false,
        }
    }

    /// Get the task ID.
    #[inline]
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Get the task name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the full step sequence.
    #[inline]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Index of the next step to run.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of steps not yet run.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.steps.len() - self.cursor
    }

    /// Check if the task has consumed all of its steps.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.cursor == self.steps.len()
    }

    /// Check if the task was cancelled.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Mark the task cancelled. It keeps its cursor; no step is rolled back.
    #[inline]
    pub(crate) fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Run one step.
    ///
    /// Consumes the step at the cursor and reports whether work remains.
    /// Calling on an already-finished task is a no-op returning
    /// [`Advance::Exhausted`]; no step is skipped or repeated.
    pub fn advance(&mut self) -> Advance<'_> {
        if self.cursor >= self.steps.len() {
            return Advance::Exhausted;
        }

        let index = self.cursor;
        self.cursor += 1;

        let step = self.steps[index].as_str();
        if self.cursor < self.steps.len() {
            Advance::More(step)
        } else {
            Advance::Last(step)
        }
    }
}

/// Iterator for generating task IDs.
#[derive(Debug)]
pub struct TaskIdGenerator {
    next_id: usize,
}

impl TaskIdGenerator {
    /// Create a new task ID generator.
    #[inline]
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Generate the next task ID.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;
        TaskId(id)
    }
}

impl Default for TaskIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
