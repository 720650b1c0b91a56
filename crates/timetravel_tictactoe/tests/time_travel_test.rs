//! Tests for history navigation and branching.

use timetravel_tictactoe::invariants::{GameInvariants, InvariantSet};
use timetravel_tictactoe::{BoardSize, Cell, Coord, GameState, HistoryError, Player};

fn play(game: GameState, moves: &[(usize, usize)]) -> GameState {
    moves
        .iter()
        .fold(game, |game, &(row, col)| game.apply_move(Coord::new(row, col)))
}

#[test]
fn test_jump_round_trip_for_every_step() {
    let game = play(GameState::default(), &[(0, 0), (1, 1), (2, 2), (0, 2), (2, 0)]);

    for step in 0..game.history_len() {
        let jumped = game.jump_to(step).expect("recorded step");
        let snapshot = game.history().get(step).expect("recorded step");
        assert_eq!(jumped.current_step(), step);
        assert_eq!(jumped.board(), snapshot.board());
        assert_eq!(jumped.next_player(), snapshot.next_player());
        assert_eq!(jumped.game_over(), snapshot.game_over());
        assert_eq!(jumped.history(), game.history());
    }
}

#[test]
fn test_move_after_jump_truncates_history() {
    let game = play(GameState::default(), &[(0, 0), (1, 1), (2, 2), (0, 2)]);
    assert_eq!(game.history_len(), 5);

    for k in 0..4 {
        let branched = game
            .jump_to(k)
            .expect("recorded step")
            .apply_move(Coord::new(2, 1));
        assert_eq!(branched.history_len(), k + 2, "branch from step {}", k);
        assert_eq!(branched.current_step(), k + 1);
        for step in 0..=k {
            assert_eq!(branched.history().get(step), game.history().get(step));
        }
        assert!(GameInvariants::check_all(&branched).is_ok());
    }
}

#[test]
fn test_jump_does_not_truncate() {
    let game = play(GameState::default(), &[(0, 0), (1, 1), (2, 2)]);
    let rewound = game.jump_to(0).expect("start exists");
    assert_eq!(rewound.history_len(), 4);
    assert_eq!(rewound.next_player(), Player::X);
    assert!(rewound.board().cells().iter().all(Cell::is_empty));
}

#[test]
fn test_jump_beyond_recorded_history_is_reported() {
    let game = play(GameState::default(), &[(0, 0), (1, 1)]);
    let rewound = game.jump_to(1).expect("recorded step");
    assert!(rewound.jump_to(2).is_ok());
    assert_eq!(
        rewound.jump_to(3),
        Err(HistoryError::StepOutOfRange { step: 3, len: 3 })
    );
}

#[test]
fn test_rewinding_a_finished_game_allows_play() {
    let game = play(
        GameState::default(),
        &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)],
    );
    assert!(game.is_over());

    let rewound = game.jump_to(4).expect("recorded step");
    assert!(!rewound.is_over());
    let diverged = rewound.apply_move(Coord::new(2, 2));
    assert!(!diverged.is_over());
    assert_eq!(diverged.history_len(), 6);
    assert!(diverged.board().cells().iter().all(|c| !c.is_highlighted()));
}

#[test]
fn test_reset_equals_fresh_game_for_every_size() {
    for n in [1, 3, 5] {
        let size = BoardSize::new(n).expect("valid size");
        let game = play(GameState::new(size), &[(0, 0)]);
        assert_eq!(game.reset(), GameState::new(size));
    }
}

#[test]
fn test_older_states_are_never_mutated() {
    let start = GameState::default();
    let first = start.apply_move(Coord::new(1, 1));
    let _second = first.apply_move(Coord::new(0, 0));
    let _branch = first.jump_to(0).expect("start").apply_move(Coord::new(2, 2));

    assert_eq!(start, GameState::default());
    assert_eq!(first.history_len(), 2);
    assert!(first.board().is_owned_by(Coord::new(1, 1), Player::X));
    assert!(first.board().is_empty(Coord::new(0, 0)));
}
