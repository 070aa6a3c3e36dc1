//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `feedback_form`: The review request form

mod feedback_form;
mod field_renderer;

pub use feedback_form::draw as draw_feedback_form;
