//! steploop
//!
//! A cooperative round-robin step scheduler: tasks carry a fixed, ordered
//! list of step descriptions, and the scheduler advances every active task
//! by exactly one step per round until none remain. Single-threaded,
//! clock-free, deterministic — interleaving comes from cooperation, not
//! preemption.
//!
//! # Example
//!
//! ```
//! use steploop::Scheduler;
//!
//! let mut sched = Scheduler::new();
//! sched.register("A", ["a1", "a2"]);
//! sched.register("B", ["b1"]);
//!
//! let report = sched.run();
//! assert_eq!(report.rounds, 2);
//! assert_eq!(report.records[0].task, "A");
//! ```

#![doc(html_root_url = "https://docs.rs/steploop")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod scenario;
pub mod scheduler;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use thiserror::Error;

pub use scenario::{Scenario, ScenarioError, TaskDef};
pub use scheduler::{Advance, RunReport, Scheduler, StepRecord, StepTask, TaskId};

use std::path::Path;
use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "steploop";

/// Load a scenario file and run it to completion.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use steploop::{run_file, Result};
///
/// fn main() -> Result<()> {
///     let report = run_file(Path::new("demos/kitchen.ron"))?;
///     println!("{} rounds", report.rounds);
///     Ok(())
/// }
/// ```
pub fn run_file(path: &Path) -> Result<RunReport> {
    let scenario = Scenario::load(path)?;
    debug!("running scenario '{}' ({} tasks)", scenario.name, scenario.tasks.len());
    Ok(scenario.run())
}
