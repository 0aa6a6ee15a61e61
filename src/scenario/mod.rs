//! Scenario files: declarative task sets for the scheduler.
//!
//! A scenario is a named list of tasks, each a name plus its ordered steps.
//! Scenarios load from JSON or RON (picked by file extension) and run as a
//! unit: a fresh scheduler, tasks registered in listing order, driven to
//! completion.
//!
//! # Example
//!
//! ```
//! use steploop::Scenario;
//!
//! let report = Scenario::kitchen().run();
//! assert_eq!(report.rounds, 4);
//! ```

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::scheduler::{RunReport, Scheduler};


/// Errors raised while loading a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The file could not be read.
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    /// The file was not valid JSON for a scenario.
    #[error("invalid JSON scenario: {0}")]
    Json(#[from] serde_json::Error),
    /// The file was not valid RON for a scenario.
    #[error("invalid RON scenario: {0}")]
    Ron(#[from] ron::error::SpannedError),
    /// The extension maps to no known format.
    #[error("unsupported scenario format: '{0}' (expected .json or .ron)")]
    UnsupportedFormat(String),
}

/// One task entry: a name and its ordered steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDef {
    /// Task name.
    pub name: String,
    /// Ordered step descriptions.
    #[serde(default)]
    pub steps: Vec<String>,
}

impl TaskDef {
    /// Create a task entry.
    pub fn new(
        name: impl Into<String>,
        steps: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }
}

/// A named collection of tasks, registered in listing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name, for banners and log lines.
    pub name: String,
    /// Tasks in registration order.
    #[serde(default)]
    pub tasks: Vec<TaskDef>,
}

impl Scenario {
    /// Load a scenario from a `.json` or `.ron` file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path)?;
        let scenario = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&text)?,
            Some("ron") => ron::from_str(&text)?,
            other => {
                return Err(ScenarioError::UnsupportedFormat(
                    other.unwrap_or("").to_string(),
                ))
            }
        };
        debug!("loaded scenario from {}", path.display());
        Ok(scenario)
    }

    /// Build a scheduler with this scenario's tasks registered in order.
    pub fn scheduler(&self) -> Scheduler {
        let mut sched = Scheduler::new();
        for task in &self.tasks {
            sched.register(task.name.clone(), task.steps.clone());
        }
        sched
    }

    /// Run the scenario on a fresh scheduler.
    pub fn run(&self) -> RunReport {
        self.scheduler().run()
    }

    /// The built-in kitchen demo: three tasks cooking dinner cooperatively,
    /// sized so their steps interleave visibly over four rounds.
    pub fn kitchen() -> &'static Scenario {
        &KITCHEN
    }
}

static KITCHEN: Lazy<Scenario> = Lazy::new(|| Scenario {
    name: "kitchen".to_string(),
    tasks: vec![
        TaskDef::new(
            "Cook Pasta",
            ["Boil water", "Add pasta (then wait)", "Drain pasta", "Serve"],
        ),
        TaskDef::new(
            "Make Sauce",
            ["Heat pan", "Add ingredients (then simmer)", "Stir", "Done"],
        ),
        TaskDef::new("Set Table", ["Get plates", "Arrange utensils", "Done"]),
    ],
});
