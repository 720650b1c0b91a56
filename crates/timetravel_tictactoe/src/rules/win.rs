//! Win detection seeded at the last move.
//!
//! Only the cell that just changed can complete a line, so it is enough to
//! look at the row, the column and (when the cell lies on them) the two
//! diagonals through it. The order of [`LineKind`]'s variants is the order
//! in which lines are checked; the first complete one is reported even if
//! the same move completes several.

use crate::coord::Coord;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// Which kind of line was completed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum LineKind {
    /// The full row through the move.
    Horizontal,
    /// The full column through the move.
    Vertical,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    SecDiagonal,
}

impl LineKind {
    /// Returns true if this line kind passes through `coord` on a board of `size`.
    pub fn passes_through(self, coord: Coord, size: usize) -> bool {
        match self {
            LineKind::Horizontal | LineKind::Vertical => true,
            LineKind::MainDiagonal => coord.on_main_diagonal(),
            LineKind::SecDiagonal => coord.on_anti_diagonal(size),
        }
    }

    /// Coordinates of the line of this kind through `coord`.
    ///
    /// Diagonals ignore `coord` and always yield the full diagonal.
    pub fn cells(self, coord: Coord, size: usize) -> impl Iterator<Item = Coord> {
        (0..size).map(move |k| match self {
            LineKind::Horizontal => Coord::new(coord.row, k),
            LineKind::Vertical => Coord::new(k, coord.col),
            LineKind::MainDiagonal => Coord::new(k, k),
            LineKind::SecDiagonal => Coord::new(k, size - 1 - k),
        })
    }
}

/// A completed line: the value of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(derive_more::Display)]
#[display("{} wins ({})", winner, line)]
pub struct Outcome {
    /// The completed line.
    pub line: LineKind,
    /// Owner of the line.
    pub winner: Player,
}

/// Returns the first line through `coord` fully owned by `player`.
///
/// Lines are checked horizontal, vertical, main diagonal, anti-diagonal;
/// that order decides which single line is reported when a move completes
/// more than one.
#[instrument(skip(board), fields(size = board.size().get()))]
pub fn detect_line(board: &Board, coord: Coord, player: Player) -> Option<LineKind> {
    let size = board.size().get();
    let found = LineKind::iter()
        .filter(|kind| kind.passes_through(coord, size))
        .find(|kind| {
            kind.cells(coord, size)
                .all(|cell| board.is_owned_by(cell, player))
        });
    trace!(?found, "Line check complete");
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardSize;

    fn board_with(size: usize, marks: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new(BoardSize::new(size).unwrap());
        for &(row, col, player) in marks {
            board.place(Coord::new(row, col), player);
        }
        board
    }

    #[test]
    fn test_no_line_on_sparse_board() {
        let board = board_with(3, &[(0, 0, Player::X), (0, 1, Player::X)]);
        assert_eq!(detect_line(&board, Coord::new(0, 1), Player::X), None);
    }

    #[test]
    fn test_each_line_kind() {
        let row = board_with(3, &[(2, 0, Player::O), (2, 1, Player::O), (2, 2, Player::O)]);
        assert_eq!(
            detect_line(&row, Coord::new(2, 1), Player::O),
            Some(LineKind::Horizontal)
        );

        let col = board_with(3, &[(0, 1, Player::X), (1, 1, Player::X), (2, 1, Player::X)]);
        assert_eq!(
            detect_line(&col, Coord::new(0, 1), Player::X),
            Some(LineKind::Vertical)
        );

        let main = board_with(3, &[(0, 0, Player::X), (1, 1, Player::X), (2, 2, Player::X)]);
        assert_eq!(
            detect_line(&main, Coord::new(2, 2), Player::X),
            Some(LineKind::MainDiagonal)
        );

        let anti = board_with(3, &[(0, 2, Player::O), (1, 1, Player::O), (2, 0, Player::O)]);
        assert_eq!(
            detect_line(&anti, Coord::new(2, 0), Player::O),
            Some(LineKind::SecDiagonal)
        );
    }

    #[test]
    fn test_line_of_other_player_is_ignored() {
        let board = board_with(3, &[(0, 0, Player::X), (0, 1, Player::X), (0, 2, Player::X)]);
        assert_eq!(detect_line(&board, Coord::new(0, 2), Player::O), None);
    }

    #[test]
    fn test_horizontal_beats_vertical() {
        let board = board_with(
            3,
            &[
                (0, 0, Player::X),
                (0, 1, Player::X),
                (0, 2, Player::X),
                (1, 0, Player::X),
                (2, 0, Player::X),
            ],
        );
        assert_eq!(
            detect_line(&board, Coord::new(0, 0), Player::X),
            Some(LineKind::Horizontal)
        );
    }

    #[test]
    fn test_main_diagonal_beats_anti_diagonal() {
        // Centre completes both diagonals at once.
        let board = board_with(
            3,
            &[
                (0, 0, Player::X),
                (2, 2, Player::X),
                (0, 2, Player::X),
                (2, 0, Player::X),
                (1, 1, Player::X),
            ],
        );
        assert_eq!(
            detect_line(&board, Coord::new(1, 1), Player::X),
            Some(LineKind::MainDiagonal)
        );
    }

    #[test]
    fn test_single_cell_board_is_horizontal() {
        let board = board_with(1, &[(0, 0, Player::X)]);
        assert_eq!(
            detect_line(&board, Coord::new(0, 0), Player::X),
            Some(LineKind::Horizontal)
        );
    }

    #[test]
    fn test_four_by_four_anti_diagonal() {
        let board = board_with(
            4,
            &[
                (0, 3, Player::O),
                (1, 2, Player::O),
                (2, 1, Player::O),
                (3, 0, Player::O),
            ],
        );
        assert_eq!(
            detect_line(&board, Coord::new(1, 2), Player::O),
            Some(LineKind::SecDiagonal)
        );
        let cells: Vec<_> = LineKind::SecDiagonal.cells(Coord::new(1, 2), 4).collect();
        assert_eq!(cells[0], Coord::new(0, 3));
        assert_eq!(cells[3], Coord::new(3, 0));
    }

    #[test]
    fn test_line_kind_names() {
        assert_eq!(LineKind::MainDiagonal.to_string(), "mainDiagonal");
        assert_eq!(LineKind::SecDiagonal.to_string(), "secDiagonal");
        assert_eq!(
            serde_json::to_string(&LineKind::Horizontal).unwrap(),
            "\"horizontal\""
        );
    }
}
