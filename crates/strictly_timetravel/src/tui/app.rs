//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use timetravel_tictactoe::{BoardSize, Command, Coord, GameState, History, Outcome, Session};
use tracing::{debug, instrument};

use super::input::{move_cursor, move_selection};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrows move the board cursor; Enter plays.
    Board,
    /// Arrows move the history selection; Enter jumps.
    History,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
///
/// Everything shown about the game is read from the session; the app only
/// adds the cursor, the focused panel and the messages around the board.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Coord,
    focus: Focus,
    selected_step: usize,
    status_message: String,
    banner: Option<Outcome>,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(size: BoardSize) -> Self {
        Self {
            session: Session::new(size),
            cursor: Coord::new(0, 0),
            focus: Focus::Board,
            selected_step: 0,
            status_message: "Player X's turn.".to_string(),
            banner: None,
        }
    }

    /// Gets the current game state.
    pub fn game(&self) -> &GameState {
        self.session.state()
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Gets the focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the selected history entry.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Gets the game-over banner, while it is shown.
    pub fn banner(&self) -> Option<&Outcome> {
        self.banner.as_ref()
    }

    /// Drains the session's game-over notice into the banner.
    ///
    /// Called after a frame is drawn, so the banner appears on top of the
    /// already rendered winning board. Returns true if a banner was raised.
    pub fn raise_pending_banner(&mut self) -> bool {
        match self.session.take_game_over_notice() {
            Some(outcome) => {
                debug!(%outcome, "Showing game over banner");
                self.status_message =
                    format!("GAME OVER! {}. Press 'r' to restart or 'q' to quit.", outcome);
                self.banner = Some(outcome);
                true
            }
            None => false,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if self.banner.take().is_some() {
            debug!("Banner dismissed");
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return AppAction::Quit;
            }
            KeyCode::Char('r') => self.send(Command::Reset),
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Char('[') => {
                let step = self.game().current_step().saturating_sub(1);
                self.send(Command::JumpTo(step));
            }
            KeyCode::Char(']') => {
                let step = self.game().current_step() + 1;
                self.send(Command::JumpTo(step));
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.send(Command::Play(self.cursor)),
                Focus::History => self.send(Command::JumpTo(self.selected_step)),
            },
            code => match self.focus {
                Focus::Board => {
                    self.cursor = move_cursor(self.cursor, code, self.game().size().get());
                }
                Focus::History => {
                    self.selected_step =
                        move_selection(self.selected_step, code, self.game().history_len());
                }
            },
        }
        AppAction::Continue
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected_step = self.game().current_step();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
        debug!(focus = ?self.focus, "Focus changed");
    }

    /// Forwards a command to the session and updates the status message.
    fn send(&mut self, command: Command) {
        let player = self.game().next_player();
        match self.session.dispatch(command) {
            Ok(_) => {
                let game = self.session.state();
                self.selected_step = game.current_step();
                self.status_message = match command {
                    Command::Play(coord) => format!("{} played {}", player, coord),
                    Command::JumpTo(step) => format!("Jumped to {}", History::label(step)),
                    Command::Reset => "Game restarted. Player X's turn.".to_string(),
                };
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }
}
