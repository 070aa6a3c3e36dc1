//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::Modal;
use components::{render_example_dialog, render_thanks_dialog, render_trust_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, form_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area);
    forms::draw_feedback_form(frame, form_area, app);
    layout::draw_status_bar(frame, app);

    // Only the topmost overlay is drawn
    match app.flow.top_modal() {
        Some(Modal::Thanks) => render_thanks_dialog(frame),
        Some(Modal::TrustSurvey) => render_trust_dialog(frame),
        Some(Modal::Example) => render_example_dialog(frame),
        None => {}
    }
}
