//! Headless play: apply a list of textual steps and report the result.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use timetravel_tictactoe::{
    BoardSize, Command, GameError, GameState, History, Outcome, Player, Session,
};
use tracing::{info, instrument, warn};

/// A step that was parsed but rejected by the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// The step as given.
    pub step: String,
    /// Why it was rejected.
    pub reason: String,
}

/// Final state of a script run.
#[derive(Debug, Clone)]
pub struct ScriptReport {
    /// Game state after the last step.
    pub state: GameState,
    /// Every rejected step, in order.
    pub rejected: Vec<Rejection>,
    /// Outcomes announced during the run, one per game that ended.
    pub announced: Vec<Outcome>,
}

/// Runs `steps` against a fresh game of `size`.
///
/// Illegal moves are recorded and skipped. Unknown history steps are
/// skipped too, unless `strict` is set.
///
/// # Errors
///
/// Fails on a step that cannot be parsed, or on an unknown history step in
/// strict mode.
#[instrument(skip(steps), fields(steps = steps.len()))]
pub fn run_script<S: AsRef<str>>(size: BoardSize, steps: &[S], strict: bool) -> Result<ScriptReport> {
    let mut session = Session::new(size);
    let mut rejected = Vec::new();
    let mut announced = Vec::new();

    for raw in steps {
        let raw = raw.as_ref();
        let command: Command = raw
            .parse()
            .with_context(|| format!("Invalid step {:?}", raw))?;

        match session.dispatch(command) {
            Ok(_) => {
                if let Some(outcome) = session.take_game_over_notice() {
                    info!(%outcome, "GAME OVER!");
                    announced.push(outcome);
                }
            }
            Err(GameError::History(e)) if strict => {
                bail!("Step {:?} rejected: {}", raw, e);
            }
            Err(e) => {
                warn!(step = raw, error = %e, "Step rejected");
                rejected.push(Rejection {
                    step: raw.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(ScriptReport {
        state: session.state().clone(),
        rejected,
        announced,
    })
}

/// One-line game status shared by the text report and the terminal UI.
pub fn status_line(state: &GameState) -> String {
    match state.game_over() {
        Some(outcome) => format!("Game over: {}", outcome),
        None if state.is_draw() => "Draw: no moves left".to_string(),
        None => format!("Current move: {}", state.next_player()),
    }
}

/// Renders the report as plain text.
pub fn render_text(report: &ScriptReport) -> String {
    let state = &report.state;
    let mut out = String::new();
    out.push_str(&format!("Current step: #{}\n", state.current_step()));
    out.push_str(&status_line(state));
    out.push_str("\n\n");
    out.push_str(&state.board().display());
    out.push_str("\n\nHistory:\n");
    for step in 0..state.history_len() {
        let marker = if step == state.current_step() { '>' } else { ' ' };
        out.push_str(&format!("{} Go to {}\n", marker, History::label(step)));
    }
    for rejection in &report.rejected {
        out.push_str(&format!("Rejected {}: {}\n", rejection.step, rejection.reason));
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    size: usize,
    current_step: usize,
    next_player: Player,
    game_over: Option<&'a Outcome>,
    draw: bool,
    history_len: usize,
    board: Vec<Vec<Option<JsonCell>>>,
    rejected: &'a [Rejection],
}

#[derive(Serialize)]
struct JsonCell {
    mark: Player,
    highlighted: bool,
}

/// Renders the report as pretty-printed JSON.
pub fn render_json(report: &ScriptReport) -> Result<String> {
    let state = &report.state;
    let board = state
        .board()
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    cell.player().map(|mark| JsonCell {
                        mark,
                        highlighted: cell.is_highlighted(),
                    })
                })
                .collect()
        })
        .collect();

    let json = JsonReport {
        size: state.size().get(),
        current_step: state.current_step(),
        next_player: state.next_player(),
        game_over: state.game_over(),
        draw: state.is_draw(),
        history_len: state.history_len(),
        board,
        rejected: &report.rejected,
    };
    serde_json::to_string_pretty(&json).context("Failed to serialize report")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        let state = GameState::default();
        assert_eq!(status_line(&state), "Current move: X");
    }

    #[test]
    fn test_unparseable_step_fails() {
        let err = run_script(BoardSize::default(), &["0,0", "oops"], false).unwrap_err();
        assert!(err.to_string().contains("oops"));
    }

    #[test]
    fn test_text_marks_current_step() {
        let report = run_script(BoardSize::default(), &["1,1", "0,0", "jump=1"], false).unwrap();
        let text = render_text(&report);
        assert!(text.starts_with("Current step: #1\nCurrent move: O\n"));
        assert!(text.contains("> Go to step #1\n"));
        assert!(text.contains("  Go to step #2\n"));
    }
}
