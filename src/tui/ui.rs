//! Rendering for the terminal UI.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use super::app::App;
use crate::game::{Board, Mark, Position, Square};
use crate::settings::GameMode;

/// Renders the whole screen: header, board, status, and key help.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(2),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_board(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let settings = app.settings();
    let line = match settings.mode {
        GameMode::VsComputer => format!(
            "{} (X)  |  {}  |  Difficulty: {}",
            app.profile().display_name(),
            settings.mode.label(),
            settings.difficulty.label(),
        ),
        GameMode::TwoPlayer => format!(
            "{} (X)  |  {}",
            app.profile().display_name(),
            settings.mode.label(),
        ),
    };

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().title("Tic-Tac-Toe").borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let positions: Vec<Position> = Position::iter().collect();
    render_row(frame, rows[0], app, &positions[0..3]);
    render_separator(frame, rows[1]);
    render_row(frame, rows[2], app, &positions[3..6]);
    render_separator(frame, rows[3]);
    render_row(frame, rows[4], app, &positions[6..9]);
}

fn render_row(frame: &mut Frame, area: Rect, app: &App, positions: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(frame, cols[0], app.round().board(), positions[0], app);
    render_vertical_sep(frame, cols[1]);
    render_square(frame, cols[2], app.round().board(), positions[1], app);
    render_vertical_sep(frame, cols[3]);
    render_square(frame, cols[4], app.round().board(), positions[2], app);
}

fn render_square(frame: &mut Frame, area: Rect, board: &Board, pos: Position, app: &App) {
    let (text, mut style) = match board.get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Taken(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Taken(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if pos == app.cursor() && app.round().is_player_turn() && app.round().is_active() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let status = status_line(app);
    let mut help = String::from("1-9/arrows+enter play | r reset | m mode | d difficulty");
    if app.has_share_link() {
        help.push_str(" | s share");
    }
    help.push_str(" | q quit");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let status_widget = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(status_widget, chunks[0]);

    let help_widget = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help_widget, chunks[1]);
}

fn status_line(app: &App) -> String {
    if let Some(announcement) = app.announcement() {
        return format!("{announcement}  (r to play again)");
    }
    if app.round().awaits_computer() {
        return "Computer is thinking...".to_string();
    }
    format!("{} to move", app.round().current_mark())
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
