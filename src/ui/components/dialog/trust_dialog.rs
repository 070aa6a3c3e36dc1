//! Trust survey dialog

use super::base::{key_hint, render_dialog, DialogConfig};
use crate::state::TrustScore;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Score row: "1 2 3 4 5" with the end points labelled
fn score_line() -> Line<'static> {
    let mut spans = vec![Span::styled("Not at all  ", Style::default().fg(Color::DarkGray))];
    for value in TrustScore::MIN..=TrustScore::MAX {
        spans.push(Span::styled(
            format!("[{value}]"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(" Completely", Style::default().fg(Color::DarkGray)));
    Line::from(spans)
}

/// Render the trust survey overlay
pub fn render_trust_dialog(frame: &mut Frame) {
    let mut hint = key_hint(&["1-5"], "answer");
    hint.push(Span::raw(", "));
    hint.push(Span::styled(
        "Esc",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    hint.push(Span::raw(" to skip"));

    render_dialog(
        frame,
        DialogConfig {
            title: "One quick question",
            title_color: Color::Yellow,
            border_color: Color::Yellow,
            message: "How much do you trust an AI code review?\n",
            body: vec![score_line()],
            hint: Some(hint),
            ..Default::default()
        },
    );
}
