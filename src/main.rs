//! steploop - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use steploop::util::logger;
use steploop::{RunReport, Scenario, NAME, VERSION};

/// A cooperative round-robin step scheduler for teaching interleaved execution
#[derive(Parser, Debug)]
#[command(name = "steploop")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit the step log as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the built-in kitchen demo scenario
    Demo,

    /// Run a scenario file (.json or .ron)
    Run {
        /// Scenario file to run
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        logger::init_debug();
    } else {
        logger::init_cli();
    }

    match args.command {
        Commands::Demo => {
            let scenario = Scenario::kitchen();
            let report = scenario.run();
            print_report(scenario, &report, args.json)?;
        }
        Commands::Run { file } => {
            let scenario = Scenario::load(&file)
                .with_context(|| format!("Failed to load scenario: {}", file.display()))?;
            let report = scenario.run();
            print_report(&scenario, &report, args.json)?;
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}

/// Print a finished run, either as colored text grouped by round or as JSON.
fn print_report(
    scenario: &Scenario,
    report: &RunReport,
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("{} ({} tasks)", scenario.name.bold(), scenario.tasks.len());
    let mut current = 0;
    for record in &report.records {
        if record.round != current {
            current = record.round;
            println!("{}", format!("--- round {} ---", current).dimmed());
        }
        println!("  {}: {}", record.task.green(), record.step);
    }
    println!("{}", format!("done in {} rounds", report.rounds).cyan());

    Ok(())
}
