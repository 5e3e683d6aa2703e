// src/bin/stalker-sim.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stalker_core::sim::{self, Scenario};

/// Command-line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "stalker-sim")]
#[command(author, version, about = "Replay a scripted host scenario and print the notifications it raises")]
struct Args {
    /// Path to the scenario JSON file
    scenario: PathBuf,

    /// Print notifications as JSON lines instead of plain text
    #[arg(long, default_value = "false")]
    json: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let scenario = Scenario::from_file(&args.scenario)
        .with_context(|| format!("loading scenario {}", args.scenario.display()))?;
    let outcomes = sim::run(&scenario)?;

    let mut total = 0;
    for outcome in &outcomes {
        for notification in &outcome.notifications {
            total += 1;
            if args.json {
                println!("{}", serde_json::to_string(notification)?);
            } else {
                println!(
                    "[step {}] {}: {}",
                    outcome.index,
                    notification.title,
                    notification.body.replace('\n', " / ")
                );
            }
        }
    }

    if !args.json {
        println!("{} step(s), {} notification(s)", outcomes.len(), total);
    }
    Ok(())
}
