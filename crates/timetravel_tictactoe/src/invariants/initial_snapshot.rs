//! The first snapshot is always the empty board with X to move.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: `history[0]` is empty, X to move, not over.
pub struct InitialSnapshotInvariant;

impl Invariant<GameState> for InitialSnapshotInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().get(0).is_some_and(|first| {
            first.board().occupied_count() == 0
                && first.next_player() == Player::X
                && first.game_over().is_none()
        })
    }

    fn description() -> &'static str {
        "First snapshot is the empty board with X to move"
    }
}
