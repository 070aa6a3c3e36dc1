//! Form domain layer
//!
//! Field values, the review request form and its keyboard navigation.

mod field;
mod form_state;

pub use field::{FormField, ReferralSource};
pub use form_state::{FeedbackForm, FieldKey, Form, SUBMIT_ROW};
