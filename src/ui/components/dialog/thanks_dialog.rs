//! Thank-you dialog shown after the trust survey

use super::base::{key_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render the thank-you overlay
pub fn render_thanks_dialog(frame: &mut Frame) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Thank you!",
            title_color: Color::Green,
            border_color: Color::Green,
            message: "Your review request is in. We'll email you when the review is ready.",
            hint: Some(key_hint(&["Enter", "Esc"], "close")),
            ..Default::default()
        },
    );
}
