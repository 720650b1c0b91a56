//! Ordered, structurally shared snapshot history.

use crate::snapshot::Snapshot;
use crate::types::BoardSize;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Ordered list of snapshots; index 0 is always the empty board.
///
/// Cloning a history clones `Arc`s, not boards, so every game state can
/// keep its own history cheaply while sharing the recorded snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Arc<Snapshot>>,
}

impl History {
    /// A history holding only the initial snapshot.
    pub fn new(size: BoardSize) -> Self {
        Self {
            snapshots: vec![Arc::new(Snapshot::initial(size))],
        }
    }

    /// Number of recorded snapshots (always at least one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the initial snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step).map(|snapshot| &**snapshot)
    }

    /// Returns the most recent snapshot.
    pub fn last(&self) -> &Snapshot {
        // Never empty: `new` seeds one entry and `truncate_after` keeps index 0.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Iterates snapshots in order.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter().map(|snapshot| &**snapshot)
    }

    /// Drops every snapshot after `step`.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub(crate) fn truncate_after(&mut self, step: usize) {
        let keep = step + 1;
        if keep < self.snapshots.len() {
            debug!(discarded = self.snapshots.len() - keep, "Discarding future snapshots");
            self.snapshots.truncate(keep);
        }
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(Arc::new(snapshot));
    }

    /// Label shown for a history entry: `start` or `step #i`.
    pub fn label(step: usize) -> String {
        if step == 0 {
            "start".to_string()
        } else {
            format!("step #{}", step)
        }
    }

    /// Returns true if both histories hold the very same snapshot allocation at `step`.
    pub fn shares_snapshot(&self, other: &History, step: usize) -> bool {
        match (self.snapshots.get(step), other.snapshots.get(step)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_has_initial_snapshot() {
        let history = History::new(BoardSize::default());
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0), Some(&Snapshot::initial(BoardSize::default())));
        assert!(history.get(1).is_none());
    }

    #[test]
    fn test_truncate_keeps_prefix() {
        let mut history = History::new(BoardSize::default());
        history.push(Snapshot::initial(BoardSize::default()));
        history.push(Snapshot::initial(BoardSize::default()));
        history.truncate_after(0);
        assert_eq!(history.len(), 1);
        history.truncate_after(5);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_labels() {
        assert_eq!(History::label(0), "start");
        assert_eq!(History::label(3), "step #3");
    }

    #[test]
    fn test_clone_shares_snapshots() {
        let history = History::new(BoardSize::default());
        let copy = history.clone();
        assert!(history.shares_snapshot(&copy, 0));
    }
}
