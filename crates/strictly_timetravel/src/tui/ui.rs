//! Stateless UI rendering.
//!
//! Everything here is a pure function of [`App`]: the board, the step and
//! turn info, the history list and, when raised, the game-over banner.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use timetravel_tictactoe::{Board, Cell, Coord, GameState, Player};

use super::app::{App, Focus};
use crate::script::status_line;

/// Columns taken by one cell, separators excluded.
const CELL_WIDTH: u16 = 5;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Board and side panel
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Strictly Games - Time Travel Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_side_panel(frame, body[1], app);

    let help = "arrows: move  enter: play/jump  tab: history  [ ]: step  r: reset  q: quit";
    let status = Paragraph::new(vec![
        Line::from(Span::styled(
            app.status_message().to_string(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(help, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(status, chunks[2]);

    if let Some(outcome) = app.banner() {
        draw_banner(frame, area, &outcome.to_string());
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.game().board();
    let size = board.size().get() as u16;
    let width = size * CELL_WIDTH + size.saturating_sub(1) + 2;
    let height = size * 2 + 1;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Board ")
        .border_style(focus_style(app.focus() == Focus::Board));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cursor = (app.focus() == Focus::Board).then(|| app.cursor());
    let grid = Paragraph::new(board_lines(board, cursor));
    frame.render_widget(grid, center_rect(inner, width, height));
}

/// Builds the grid: one line per row, separator lines between rows.
fn board_lines(board: &Board, cursor: Option<Coord>) -> Vec<Line<'static>> {
    let size = board.size().get();
    let separator = vec!["─".repeat(CELL_WIDTH as usize); size].join("┼");
    let mut lines = Vec::with_capacity(size * 2);

    for (row, cells) in board.rows().enumerate() {
        if row > 0 {
            lines.push(Line::from(Span::styled(
                separator.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        let mut spans = Vec::with_capacity(size * 2);
        for (col, cell) in cells.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let selected = cursor == Some(Coord::new(row, col));
            spans.push(cell_span(cell, selected));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn cell_span(cell: &Cell, selected: bool) -> Span<'static> {
    let (symbol, base) = match cell.player() {
        None => ("     ", Style::default().fg(Color::DarkGray)),
        Some(Player::X) => (
            "  X  ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            "  O  ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if selected {
        base.bg(Color::White).fg(Color::Black)
    } else if cell.is_highlighted() {
        base.bg(Color::Green).fg(Color::Black)
    } else {
        base
    };
    Span::styled(symbol, style)
}

fn draw_side_panel(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let info = Paragraph::new(vec![
        Line::from(format!("Current step: #{}", game.current_step())),
        Line::from(status_line(game)),
        Line::from(format!("Board: {}x{}", game.size(), game.size())),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Game "));
    frame.render_widget(info, chunks[0]);

    let history_focused = app.focus() == Focus::History;
    let list = List::new(history_items(game))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" History ")
                .border_style(focus_style(history_focused)),
        )
        .highlight_style(if history_focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });

    let mut state = ListState::default();
    state.select(Some(if history_focused {
        app.selected_step()
    } else {
        game.current_step()
    }));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn history_items(game: &GameState) -> Vec<ListItem<'static>> {
    (0..game.history_len())
        .map(|step| {
            let text = format!("Go to {}", GameState::step_label(step));
            if step == game.current_step() {
                ListItem::new(Line::from(vec![
                    Span::raw("▶ "),
                    Span::styled(
                        text,
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                ]))
            } else {
                ListItem::new(Line::from(format!("  {}", text)))
            }
        })
        .collect()
}

fn draw_banner(frame: &mut Frame, area: Rect, message: &str) {
    let popup = center_rect(area, 40, 5);
    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            "GAME OVER!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(message.to_string()),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(Clear, popup);
    frame.render_widget(banner, popup);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
