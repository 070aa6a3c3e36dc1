//! Review request form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FieldKey, Form, SUBMIT_ROW};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Label on the submit button for the current flow state
pub fn submit_label(app: &App) -> &'static str {
    if app.flow.ui.is_submitting {
        "Submitting..."
    } else {
        "Request free review"
    }
}

/// Draw the review request form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Repository
            Constraint::Min(5),                // Feedback request
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Referral source
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(2),             // Privacy note
        ])
        .margin(1)
        .split(inner);

    let form = &app.flow.form;
    for key in FieldKey::ALL {
        let index = key.index();
        draw_field(
            frame,
            chunks[index],
            form.field(key),
            form.active_field() == index,
        );
    }

    render_button(
        frame,
        chunks[SUBMIT_ROW],
        submit_label(app),
        form.is_submit_row_active(),
        app.flow.can_submit(),
    );

    let note = Paragraph::new(
        "Your email is only used to send the review and service updates.",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(note, chunks[SUBMIT_ROW + 1]);
}
