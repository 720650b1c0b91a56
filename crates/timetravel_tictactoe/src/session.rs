//! Command dispatch for a single running game.

use crate::command::Command;
use crate::error::GameError;
use crate::game::GameState;
use crate::rules::Outcome;
use crate::types::BoardSize;
use tracing::{debug, info, instrument, warn};

/// Result of an accepted command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    /// The command that was applied.
    pub command: Command,
    /// Set when this command is the move that ended the game.
    pub game_over: Option<Outcome>,
}

/// The single writer of a game's state.
///
/// A presentation layer forwards user intents as [`Command`]s and renders
/// [`Session::state`] afterwards. When a move ends the game, a one-shot
/// notice is recorded; the caller takes it with
/// [`Session::take_game_over_notice`] once the winning board has been drawn.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    pending_game_over: Option<Outcome>,
}

impl Session {
    /// Starts a session with a fresh game.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        info!("Starting game session");
        Self {
            state: GameState::new(size),
            pending_game_over: None,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies a command.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason for an illegal move or an unknown
    /// history step; the state is left unchanged in both cases.
    #[instrument(skip(self), fields(step = self.state.current_step()))]
    pub fn dispatch(&mut self, command: Command) -> Result<Dispatch, GameError> {
        let (next, game_over) = match command {
            Command::Play(coord) => {
                let next = self.state.try_apply_move(coord).inspect_err(|e| {
                    debug!(error = %e, "Move rejected");
                })?;
                let game_over = next.game_over().copied();
                (next, game_over)
            }
            Command::JumpTo(step) => {
                let next = self.state.jump_to(step).inspect_err(|e| {
                    warn!(error = %e, "History jump rejected");
                })?;
                (next, None)
            }
            Command::Reset => (self.state.reset(), None),
        };

        if let Some(outcome) = game_over {
            info!(%outcome, "Game over");
        }
        // A notice belongs to the move that ended the game; any other
        // accepted command leaves that game behind.
        self.pending_game_over = game_over;
        self.state = next;
        debug!(step = self.state.current_step(), "Command applied");
        Ok(Dispatch { command, game_over })
    }

    /// Takes the pending game-over notice, if the last winning move has not
    /// been announced yet.
    pub fn take_game_over_notice(&mut self) -> Option<Outcome> {
        self.pending_game_over.take()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
