//! The cursor always points at a recorded snapshot.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_step < history.len()`.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_step() < game.history_len()
    }

    fn description() -> &'static str {
        "Current step indexes an existing snapshot"
    }
}
