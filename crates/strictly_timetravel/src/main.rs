//! Strictly Time Travel - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_timetravel::{AppConfig, logging, render_json, render_text, run_script, run_tui};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { size, config } => run_play(&config, size),
        Command::Script {
            size,
            config,
            json,
            strict,
            steps,
        } => run_headless(&config, size, json, strict, &steps),
    }
}

/// Run the interactive terminal game
fn run_play(config_path: &Path, size: Option<usize>) -> Result<()> {
    let config = AppConfig::load(config_path, size)?;
    logging::init_file_logging(&config)?;
    info!(board_size = config.board_size(), "Starting Strictly Time Travel");

    let size = config.tui_size()?;
    run_tui(size)
}

/// Run a script of steps and print the final state
#[instrument(skip(steps), fields(config_path = %config_path.display()))]
fn run_headless(
    config_path: &Path,
    size: Option<usize>,
    json: bool,
    strict: bool,
    steps: &[String],
) -> Result<()> {
    let config = AppConfig::load(config_path, size)?;
    logging::init_stderr_logging(&config);

    let size = config.validated_size()?;
    let report = run_script(size, steps, strict).context("Script failed")?;

    let output = if json {
        render_json(&report)?
    } else {
        render_text(&report)
    };
    println!("{}", output);
    Ok(())
}
