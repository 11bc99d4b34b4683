//! dbcompare - Compare two build-time profiling databases

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use dbcompare::config::Config;
use dbcompare::diff::compare_datasets;
use dbcompare::loader::load_dataset;
use dbcompare::output::{render_to_stdout, SIGNIFICANT_DIFF};

/// Compare two build-time profiling databases and report significant differences
#[derive(Parser, Debug)]
#[command(name = "dbcompare")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First database file
    db1: PathBuf,

    /// Second database file
    db2: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.db1, cli.db2);

    let first = load_dataset(&config.first_db).with_context(|| {
        format!("Failed to load first database: {}", config.first_db.display())
    })?;
    let second = load_dataset(&config.second_db).with_context(|| {
        format!("Failed to load second database: {}", config.second_db.display())
    })?;
    for dataset in [&first, &second] {
        debug!(
            "Loaded {} records from {}",
            dataset.record_count(),
            dataset.path.display()
        );
    }

    let diff = compare_datasets(&first, &second);
    diff.log_stats(SIGNIFICANT_DIFF);

    render_to_stdout(&diff)
}
