//! Example review request dialog

use super::base::{key_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Sample text shown to users unsure what to ask for
pub const EXAMPLE_REQUEST: &str = "Repository: https://github.com/username/todo-api\n\n\
I'd like a review of the error handling in the request handlers and \
whether the database layer is structured sensibly. \
I'm also unsure if my tests cover the important edge cases.";

/// Render the example request overlay
pub fn render_example_dialog(frame: &mut Frame) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Example request",
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            message: EXAMPLE_REQUEST,
            hint: Some(key_hint(&["Enter", "Esc"], "close")),
            max_width: 64,
            ..Default::default()
        },
    );
}
