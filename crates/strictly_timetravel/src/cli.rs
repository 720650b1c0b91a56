//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Time Travel - tic-tac-toe with replayable history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "N×N tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Board dimension N (overrides config and environment)
        #[arg(short, long)]
        size: Option<usize>,

        /// Path to the TOML config file
        #[arg(short, long, default_value = strictly_timetravel::config::DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Apply a sequence of steps headlessly and print the result
    Script {
        /// Board dimension N (overrides config and environment)
        #[arg(short, long)]
        size: Option<usize>,

        /// Path to the TOML config file
        #[arg(short, long, default_value = strictly_timetravel::config::DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Fail on an unknown history step instead of skipping it
        #[arg(long)]
        strict: bool,

        /// Steps: `row,col`, `jump=N` or `reset`
        steps: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let cli = Cli::try_parse_from([
            "strictly_timetravel",
            "script",
            "--size",
            "4",
            "--json",
            "0,0",
            "jump=0",
            "reset",
        ])
        .unwrap();
        match cli.command {
            Command::Script {
                size,
                json,
                strict,
                steps,
                ..
            } => {
                assert_eq!(size, Some(4));
                assert!(json);
                assert!(!strict);
                assert_eq!(steps, vec!["0,0", "jump=0", "reset"]);
            }
            Command::Play { .. } => panic!("expected script command"),
        }
    }

    #[test]
    fn test_parse_play_defaults() {
        let cli = Cli::try_parse_from(["strictly_timetravel", "play"]).unwrap();
        match cli.command {
            Command::Play { size, config } => {
                assert_eq!(size, None);
                assert_eq!(config, PathBuf::from(strictly_timetravel::config::DEFAULT_CONFIG_PATH));
            }
            Command::Script { .. } => panic!("expected play command"),
        }
    }
}
