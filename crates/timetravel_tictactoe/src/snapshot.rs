//! Immutable per-step game records.

use crate::rules::Outcome;
use crate::types::{Board, BoardSize, Player};
use serde::Serialize;

/// Board, turn and outcome after a given move (or before the first one).
///
/// Snapshots are created once and then only ever read; they are shared
/// between game states behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Snapshot {
    board: Board,
    next_player: Player,
    game_over: Option<Outcome>,
}

impl Snapshot {
    /// The empty board with X to move.
    pub fn initial(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            next_player: Player::X,
            game_over: None,
        }
    }

    pub(crate) fn new(board: Board, next_player: Player, game_over: Option<Outcome>) -> Self {
        Self {
            board,
            next_player,
            game_over,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Returns the outcome if a line was completed.
    pub fn game_over(&self) -> Option<&Outcome> {
        self.game_over.as_ref()
    }
}
