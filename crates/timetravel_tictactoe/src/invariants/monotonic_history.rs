//! Monotonic history: each snapshot adds exactly one mark to the previous one.

use super::Invariant;
use crate::{GameState, Player, Snapshot};

/// Invariant: snapshot `i` holds `i` marks, keeps every mark of snapshot
/// `i - 1`, and has X to move exactly when `i` is even.
pub struct MonotonicHistoryInvariant;

impl MonotonicHistoryInvariant {
    fn extends(previous: &Snapshot, next: &Snapshot) -> bool {
        previous
            .board()
            .iter()
            .filter_map(|(coord, cell)| cell.player().map(|player| (coord, player)))
            .all(|(coord, player)| next.board().is_owned_by(coord, player))
    }
}

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        let snapshots: Vec<&Snapshot> = game.history().iter().collect();

        let counts_match = snapshots.iter().enumerate().all(|(step, snapshot)| {
            let expected = if step % 2 == 0 { Player::X } else { Player::O };
            snapshot.board().occupied_count() == step && snapshot.next_player() == expected
        });

        counts_match
            && snapshots
                .windows(2)
                .all(|pair| Self::extends(pair[0], pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark and players alternate"
    }
}
