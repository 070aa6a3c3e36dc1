//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Modal, SubmissionStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form grows on large terminals
const MAX_FORM_WIDTH: u16 = 80;

/// Create the main layout: header, centered form column, status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let side = rows[1].width.saturating_sub(MAX_FORM_WIDTH) / 2;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(side),
            Constraint::Min(0),
            Constraint::Length(side),
        ])
        .split(rows[1]);

    (rows[0], columns[1])
}

/// Draw the title block
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Request a Review",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Get an AI code review of your public repository",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

/// Message describing the last submission, if any
pub fn status_message(app: &App) -> Option<(&'static str, Color)> {
    if app.flow.ui.is_submitting {
        return Some(("Submitting...", Color::Yellow));
    }
    match app.flow.status {
        SubmissionStatus::Idle => None,
        SubmissionStatus::Success => Some(("Review request sent!", Color::Green)),
        SubmissionStatus::Error => Some((
            "Submission failed. Please check your connection and try again.",
            Color::Red,
        )),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    let hints = get_hints(app.flow.top_modal());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some((msg, color)) = status_message(app) {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for whatever currently has focus
fn get_hints(modal: Option<Modal>) -> String {
    match modal {
        None => format!("Tab:next  ←/→:source  {SUBMIT_SHORTCUT}:submit  F1:example"),
        Some(Modal::TrustSurvey) => "1-5:rate  Esc:skip".to_string(),
        Some(Modal::Thanks) | Some(Modal::Example) => "Enter/Esc:close".to_string(),
    }
}
