//! First-class invariants for game histories.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`](crate::GameState). Transitions check them in debug builds
//! and they can be tested independently.

mod initial_snapshot;
mod monotonic_history;
mod outcome_consistent;
mod step_in_range;

pub use initial_snapshot::InitialSnapshotInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;
pub use step_in_range::StepInRangeInvariant;

/// A property every recorded history must satisfy, such as the first
/// snapshot being an empty board with X to move.
pub trait Invariant<S> {
    /// Returns false if `state` breaks the property.
    fn holds(state: &S) -> bool;

    /// Short sentence naming the property, used in violation reports.
    fn description() -> &'static str;
}

/// A property that did not hold for some game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// What the broken property requires.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a property description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several properties checked against the same game state.
///
/// Tuples of [`Invariant`]s implement this, in tuple order.
pub trait InvariantSet<S> {
    /// Runs every member against `state`, collecting each failure instead
    /// of stopping at the first one.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);
        collect(violations)
    }
}

/// Every invariant a game state must satisfy.
pub type GameInvariants = (
    InitialSnapshotInvariant,
    StepInRangeInvariant,
    MonotonicHistoryInvariant,
    OutcomeConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, Coord, GameState, History, Snapshot};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::default()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let game = GameState::default()
            .apply_move(Coord::new(0, 0))
            .apply_move(Coord::new(1, 1))
            .apply_move(Coord::new(2, 2))
            .jump_to(1)
            .unwrap()
            .apply_move(Coord::new(0, 1));
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut history = History::new(BoardSize::default());
        // A second empty snapshot breaks monotonicity and turn order.
        history.push(Snapshot::initial(BoardSize::default()));
        let game = GameState::from_parts(BoardSize::default(), history, 5);

        let violations = GameInvariants::check_all(&game).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                StepInRangeInvariant::description(),
                MonotonicHistoryInvariant::description(),
            ]
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (InitialSnapshotInvariant, StepInRangeInvariant);
        assert!(TwoInvariants::check_all(&GameState::default()).is_ok());
    }
}
