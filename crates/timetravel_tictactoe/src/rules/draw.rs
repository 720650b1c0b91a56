//! Draw detection.

use crate::rules::win::Outcome;
use crate::types::Board;
use tracing::instrument;

/// A full board with no completed line.
///
/// A draw is not an outcome: a drawn game simply has no empty cells left.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, outcome: Option<&Outcome>) -> bool {
    outcome.is_none() && board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;
    use crate::rules::win::LineKind;
    use crate::types::Player;

    #[test]
    fn test_empty_board_is_not_draw() {
        assert!(!is_draw(&Board::default(), None));
    }

    #[test]
    fn test_full_board_without_outcome_is_draw() {
        let mut board = Board::default();
        let layout = [
            [Player::X, Player::O, Player::X],
            [Player::X, Player::O, Player::O],
            [Player::O, Player::X, Player::X],
        ];
        for (row, players) in layout.iter().enumerate() {
            for (col, player) in players.iter().enumerate() {
                board.place(Coord::new(row, col), *player);
            }
        }
        assert!(is_draw(&board, None));

        let won = Outcome {
            line: LineKind::Horizontal,
            winner: Player::X,
        };
        assert!(!is_draw(&board, Some(&won)));
    }
}
