//! Dialog components for TUI

mod base;
mod example_dialog;
mod thanks_dialog;
mod trust_dialog;

pub use example_dialog::render_example_dialog;
pub use thanks_dialog::render_thanks_dialog;
pub use trust_dialog::render_trust_dialog;
