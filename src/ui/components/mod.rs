//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::{render_example_dialog, render_thanks_dialog, render_trust_dialog};
