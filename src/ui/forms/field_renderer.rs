//! Field rendering utilities for forms

use crate::state::{FormField, ReferralSource};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

fn accent(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Free text, one `Line` per newline, with a block cursor when focused
fn text_lines(field: &FormField, is_active: bool) -> Vec<Line<'static>> {
    let value = field.as_text();
    if value.is_empty() && !is_active {
        return vec![Line::from(Span::styled("(empty)", accent(false)))];
    }

    let style = if field.is_multiline {
        Style::default()
    } else {
        accent(is_active)
    };
    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), style)))
        .collect();
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(CURSOR, accent(true)));
        }
    }
    lines
}

/// Every referral option with its digit, the chosen one highlighted
fn option_line(selected: Option<ReferralSource>, is_active: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(ReferralSource::ALL.len() * 2);
    for (i, source) in ReferralSource::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if selected == Some(source) {
            Style::default()
                .fg(if is_active { Color::Cyan } else { Color::White })
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{} {}", i + 1, source.label()), style));
    }
    Line::from(spans)
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let lines = if field.is_selector() {
        vec![option_line(field.as_referral(), is_active)]
    } else {
        text_lines(field, is_active)
    };

    let mut title = format!(" {} ", field.label);
    if field.is_selector() && is_active {
        title.push_str("(←/→ or 1-5) ");
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(accent(is_active));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(field: &FormField, is_active: bool) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(90, 3)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_field(frame, area, field, is_active)
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row(buffer: &ratatui::buffer::Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    /// Cell column where `needle` starts
    fn column(line: &str, needle: &str) -> u16 {
        let byte = line.find(needle).unwrap();
        line[..byte].chars().count() as u16
    }

    #[test]
    fn test_selector_lists_every_option() {
        let field = FormField::referral("Source");
        let line = row(&render(&field, false), 1);
        for (i, source) in ReferralSource::ALL.iter().enumerate() {
            assert!(line.contains(&format!("{} {}", i + 1, source.label())));
        }
    }

    #[test]
    fn test_selected_option_is_highlighted() {
        let mut field = FormField::referral("Source");
        field.set_text("blog");
        let buffer = render(&field, true);
        let line = row(&buffer, 1);
        let x = column(&line, "3 Blog");
        assert!(buffer[(x, 1)].modifier.contains(Modifier::REVERSED));
        let other = column(&line, "1 Social");
        assert!(!buffer[(other, 1)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_active_selector_shows_hint() {
        let field = FormField::referral("Source");
        assert!(row(&render(&field, true), 0).contains("1-5"));
        assert!(!row(&render(&field, false), 0).contains("1-5"));
    }

    #[test]
    fn test_empty_text_placeholder_and_cursor() {
        let mut field = FormField::text("Email", false);
        assert!(row(&render(&field, false), 1).contains("(empty)"));
        field.set_text("x@y.com");
        assert!(row(&render(&field, true), 1).contains("x@y.com▌"));
    }
}
