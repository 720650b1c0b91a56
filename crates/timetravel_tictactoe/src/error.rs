//! Error types for the game core.
//!
//! No error here is fatal: every rejection leaves the game state untouched
//! and the caller can simply retry.

use crate::coord::Coord;

/// Reason a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// A line has already been completed.
    #[display("Game is already over")]
    GameOver,

    /// The coordinate does not lie on the board.
    #[display("Cell {} is outside the {}x{} board", coord, size, size)]
    OutOfBounds {
        /// Requested coordinate.
        coord: Coord,
        /// Board dimension.
        size: usize,
    },
}

impl std::error::Error for MoveError {}

/// Reason a history jump was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested step was never recorded.
    #[display("Step #{} does not exist (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of recorded snapshots.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}

/// Invalid board dimension.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Board size {} is outside the supported range {}..={}", requested, min, max)]
pub struct BoardSizeError {
    /// Requested dimension.
    pub requested: usize,
    /// Smallest accepted dimension.
    pub min: usize,
    /// Largest accepted dimension.
    pub max: usize,
}

impl std::error::Error for BoardSizeError {}

/// Text that could not be parsed as a coordinate or command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandParseError {
    /// Input matched no known form.
    #[display("Cannot parse {:?}: expected `row,col`, `jump=N` or `reset`", _0)]
    Malformed(String),
}

impl std::error::Error for CommandParseError {}

/// Any rejection produced by a [`Session`](crate::Session) command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// A move was rejected.
    #[display("{}", _0)]
    Move(MoveError),
    /// A history jump was rejected.
    #[display("{}", _0)]
    History(HistoryError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(e) => Some(e),
            GameError::History(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MoveError::CellOccupied(Coord::new(1, 1)).to_string(),
            "Cell (1, 1) is already occupied"
        );
        assert_eq!(
            HistoryError::StepOutOfRange { step: 7, len: 3 }.to_string(),
            "Step #7 does not exist (history has 3 entries)"
        );
    }

    #[test]
    fn test_game_error_from() {
        let err: GameError = MoveError::GameOver.into();
        assert_eq!(err, GameError::Move(MoveError::GameOver));
        assert_eq!(err.to_string(), "Game is already over");
    }
}
