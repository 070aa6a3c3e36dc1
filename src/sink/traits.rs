//! Trait abstraction for the form endpoint to enable mocking in tests

use super::payload::{FeedbackSubmission, TrustSurveySubmission};
use crate::error::SubmissionError;
use async_trait::async_trait;

/// Destination for review requests and survey answers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormSink: Send + Sync {
    /// Post a review request; Ok only for a success status
    async fn submit_feedback(&self, submission: &FeedbackSubmission)
        -> Result<(), SubmissionError>;

    /// Post a trust survey answer
    async fn submit_trust_survey(
        &self,
        survey: &TrustSurveySubmission,
    ) -> Result<(), SubmissionError>;
}
