//! The game state machine.
//!
//! A [`GameState`] is an immutable value: transitions take `&self` and
//! return the next state. The board, the player to move and the outcome are
//! never stored separately; they are read from the snapshot under the
//! current step, so they cannot drift out of sync with the history.

use crate::coord::Coord;
use crate::error::{HistoryError, MoveError};
use crate::history::History;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules::{LineKind, Outcome, detect_line, is_draw};
use crate::snapshot::Snapshot;
use crate::types::{Board, BoardSize, Player};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// History of snapshots plus a cursor into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    size: BoardSize,
    history: History,
    current_step: usize,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            history: History::new(size),
            current_step: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(size: BoardSize, history: History, current_step: usize) -> Self {
        Self {
            size,
            history,
            current_step,
        }
    }

    /// Returns the board dimension.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the recorded history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the step the game is currently showing.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the snapshot under the current step.
    pub fn snapshot(&self) -> &Snapshot {
        // `current_step` is only ever set to an existing index.
        self.history
            .get(self.current_step)
            .unwrap_or_else(|| self.history.last())
    }

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        self.snapshot().board()
    }

    /// Returns the player to move at the current step.
    pub fn next_player(&self) -> Player {
        self.snapshot().next_player()
    }

    /// Returns the outcome at the current step, if a line is complete.
    pub fn game_over(&self) -> Option<&Outcome> {
        self.snapshot().game_over()
    }

    /// Returns true once a line has been completed.
    pub fn is_over(&self) -> bool {
        self.game_over().is_some()
    }

    /// Returns true if the board is full and nobody completed a line.
    pub fn is_draw(&self) -> bool {
        is_draw(self.board(), self.game_over())
    }

    /// Coordinates still open at the current step.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.board().empty_cells()
    }

    /// Number of recorded snapshots.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Label for a history entry: `start` or `step #i`.
    pub fn step_label(step: usize) -> String {
        History::label(step)
    }

    /// Places the next player's mark at `coord`.
    ///
    /// Any snapshots after the current step are discarded first. If the
    /// move completes a line, that line is highlighted and the game ends.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if a line is already complete
    /// - [`MoveError::OutOfBounds`] if `coord` is off the board
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn try_apply_move(&self, coord: Coord) -> Result<GameState, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let size = self.size.get();
        if !coord.fits(size) {
            return Err(MoveError::OutOfBounds { coord, size });
        }
        if !self.board().is_empty(coord) {
            return Err(MoveError::CellOccupied(coord));
        }

        let player = self.next_player();
        let mut board = self.board().clone();
        board.place(coord, player);

        let game_over = detect_line(&board, coord, player).map(|line| {
            highlight_line(&mut board, line, coord);
            Outcome {
                line,
                winner: player,
            }
        });
        if let Some(outcome) = &game_over {
            info!(%outcome, "Line completed");
        }

        let mut history = self.history.clone();
        history.truncate_after(self.current_step);
        history.push(Snapshot::new(board, player.opponent(), game_over));

        let next = GameState {
            size: self.size,
            history,
            current_step: self.current_step + 1,
        };
        debug_assert!(
            GameInvariants::check_all(&next).is_ok(),
            "game invariants violated after move"
        );
        debug!(step = next.current_step, "Move applied");
        Ok(next)
    }

    /// Like [`try_apply_move`](Self::try_apply_move), but a rejected move
    /// yields an unchanged copy of the current state.
    pub fn apply_move(&self, coord: Coord) -> GameState {
        match self.try_apply_move(coord) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, %coord, "Move rejected");
                self.clone()
            }
        }
    }

    /// Moves the cursor to an existing history entry.
    ///
    /// History is left intact; the next move made from here discards the
    /// entries after `step`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if `step` was never recorded.
    #[instrument(skip(self), fields(current = self.current_step, len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<GameState, HistoryError> {
        if step >= self.history.len() {
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        debug!("Jumping through history");
        Ok(GameState {
            size: self.size,
            history: self.history.clone(),
            current_step: step,
        })
    }

    /// A fresh game of the same size.
    #[instrument(skip(self))]
    pub fn reset(&self) -> GameState {
        GameState::new(self.size)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

fn highlight_line(board: &mut Board, line: LineKind, through: Coord) {
    let size = board.size().get();
    for coord in line.cells(through, size) {
        board.highlight(coord);
    }
}
