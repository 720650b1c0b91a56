//! User intents forwarded by a presentation layer.

use crate::coord::Coord;
use crate::error::CommandParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A request to change the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(derive_more::Display)]
#[serde(rename_all = "snake_case", tag = "command", content = "arg")]
pub enum Command {
    /// Place the next player's mark.
    #[display("play {}", _0)]
    Play(Coord),
    /// Show an earlier (or later, if still recorded) history entry.
    #[display("jump to #{}", _0)]
    JumpTo(usize),
    /// Start over with an empty board.
    #[display("reset")]
    Reset,
}

/// Parses `row,col`, `jump=N` or `reset`.
impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("reset") {
            return Ok(Command::Reset);
        }
        if let Some(step) = trimmed.strip_prefix("jump=") {
            return step
                .trim()
                .parse()
                .map(Command::JumpTo)
                .map_err(|_| CommandParseError::Malformed(s.to_string()));
        }
        trimmed.parse().map(Command::Play)
    }
}
