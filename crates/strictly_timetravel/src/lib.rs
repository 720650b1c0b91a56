//! Strictly Time Travel - terminal tic-tac-toe with replayable history.
//!
//! The game rules and history live in [`timetravel_tictactoe`]; this crate
//! is the presentation layer around them.
//!
//! # Architecture
//!
//! - **Config**: board size and logging settings (TOML, environment, flags)
//! - **Logging**: tracing subscribers for the interactive and headless modes
//! - **Script**: headless runner applying textual steps
//! - **TUI**: ratatui board, history list and game-over banner
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{render_text, run_script};
//! use timetravel_tictactoe::BoardSize;
//!
//! # fn example() -> anyhow::Result<()> {
//! let report = run_script(BoardSize::default(), &["1,1", "0,0", "jump=1"], false)?;
//! assert!(render_text(&report).contains("Current step: #1"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod logging;
mod script;
mod tui;

pub use config::{AppConfig, ConfigError};
pub use script::{Rejection, ScriptReport, render_json, render_text, run_script, status_line};
pub use tui::{App, AppAction, Focus, run_tui};
