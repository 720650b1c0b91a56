//! Outcome consistency: only a final snapshot may be over, and its highlight
//! covers exactly the completed line.

use super::Invariant;
use crate::{GameState, LineKind, Snapshot};

/// Invariant: only the last snapshot may carry an outcome; a finished
/// snapshot highlights exactly one full line of the winner's marks and an
/// unfinished one highlights nothing.
pub struct OutcomeConsistentInvariant;

impl OutcomeConsistentInvariant {
    fn highlight_matches(snapshot: &Snapshot) -> bool {
        let board = snapshot.board();
        let size = board.size().get();
        let highlighted: Vec<_> = board
            .iter()
            .filter(|(_, cell)| cell.is_highlighted())
            .collect();

        match snapshot.game_over() {
            None => highlighted.is_empty(),
            Some(outcome) => {
                highlighted.len() == size
                    && highlighted.iter().all(|(coord, cell)| {
                        let on_line = match outcome.line {
                            LineKind::Horizontal => coord.row == highlighted[0].0.row,
                            LineKind::Vertical => coord.col == highlighted[0].0.col,
                            LineKind::MainDiagonal => coord.on_main_diagonal(),
                            LineKind::SecDiagonal => coord.on_anti_diagonal(size),
                        };
                        on_line && cell.player() == Some(outcome.winner)
                    })
            }
        }
    }
}

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let len = game.history_len();
        game.history().iter().enumerate().all(|(step, snapshot)| {
            (snapshot.game_over().is_none() || step + 1 == len)
                && Self::highlight_matches(snapshot)
        })
    }

    fn description() -> &'static str {
        "Only the final snapshot is over and it highlights exactly the winning line"
    }
}
