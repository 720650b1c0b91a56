//! Pure N×N tic-tac-toe with an immutable move history.
//!
//! Every accepted move produces a new [`Snapshot`] and a new [`GameState`]
//! value. Earlier states stay valid forever, which is what makes replay
//! ("time travel") trivial: jumping to a step just moves a cursor over the
//! recorded history.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Coord`], [`Cell`], [`Board`], [`BoardSize`]
//! - **Rules**: win detection seeded at the last move ([`detect_line`])
//! - **Game**: the [`GameState`] machine (`apply_move`, `jump_to`, `reset`)
//! - **Session**: the [`Command`] surface used by a presentation layer
//! - **Invariants**: checkable properties every history must satisfy
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{BoardSize, Coord, GameState, LineKind};
//!
//! let game = GameState::new(BoardSize::default())
//!     .apply_move(Coord::new(0, 0))
//!     .apply_move(Coord::new(1, 1))
//!     .apply_move(Coord::new(0, 1))
//!     .apply_move(Coord::new(1, 0))
//!     .apply_move(Coord::new(0, 2));
//!
//! assert_eq!(game.game_over().map(|o| o.line), Some(LineKind::Horizontal));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod coord;
mod error;
mod game;
mod history;
pub mod invariants;
mod rules;
mod session;
mod snapshot;
mod types;

pub use command::Command;
pub use coord::Coord;
pub use error::{BoardSizeError, CommandParseError, GameError, HistoryError, MoveError};
pub use game::GameState;
pub use history::History;
pub use rules::{LineKind, Outcome, detect_line};
pub use session::{Dispatch, Session};
pub use snapshot::Snapshot;
pub use types::{Board, BoardSize, Cell, Mark, Player};
