//! Client module for the hosted form endpoint

mod client;
mod payload;
mod traits;

pub use client::HttpFormSink;
pub use payload::{FeedbackSubmission, TrustSurveySubmission};
pub use traits::FormSink;

#[cfg(test)]
pub use traits::MockFormSink;
