//! Submission flow state machine
//!
//! `SubmissionFlow` owns the form and every flag the screen renders from.
//! It never performs I/O: starting a submission hands back the payload to
//! send, and the caller reports the outcome through `finish_submit`.

use super::forms::FeedbackForm;
use crate::error::SubmissionError;
use crate::sink::{FeedbackSubmission, TrustSurveySubmission};

/// Result of the most recent primary submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Overlays that can sit on top of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Example,
    TrustSurvey,
    Thanks,
}

/// A trust survey answer, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TrustScore(u8);

impl TrustScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Map a pressed digit key to a score
    pub fn from_digit(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Visibility flags and in-flight bookkeeping
#[derive(Debug, Clone, Default)]
pub struct FlowUiState {
    pub example_modal_visible: bool,
    pub trust_modal_visible: bool,
    pub thanks_modal_visible: bool,
    pub is_submitting: bool,
    /// Email of the last accepted submission, used to tag the trust survey
    pub last_submitted_email: Option<String>,
}

/// The whole flow: form input, last status and overlays
#[derive(Debug, Clone, Default)]
pub struct SubmissionFlow {
    pub form: FeedbackForm,
    pub status: SubmissionStatus,
    pub ui: FlowUiState,
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.is_valid()
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        self.is_form_valid() && !self.ui.is_submitting
    }

    /// Enter `Submitting` and return the payload to send.
    ///
    /// Returns None, changing nothing, when the form is incomplete or a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<FeedbackSubmission> {
        if self.ui.is_submitting {
            return None;
        }
        let submission = FeedbackSubmission::from_form(&self.form)?;
        self.status = SubmissionStatus::Idle;
        self.ui.is_submitting = true;
        Some(submission)
    }

    /// Apply the outcome of the submission started by `begin_submit`
    pub fn finish_submit(
        &mut self,
        submission: &FeedbackSubmission,
        outcome: Result<(), SubmissionError>,
    ) {
        self.ui.is_submitting = false;
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.form.reset();
                self.ui.last_submitted_email = Some(submission.email.clone());
                self.ui.thanks_modal_visible = false;
                self.ui.trust_modal_visible = true;
            }
            Err(_) => {
                self.status = SubmissionStatus::Error;
            }
        }
    }

    /// Record a trust score: swap the survey prompt for the thanks note and
    /// return the survey payload to deliver.
    ///
    /// Returns None when no survey prompt is open.
    pub fn pick_trust_score(&mut self, score: TrustScore) -> Option<TrustSurveySubmission> {
        if !self.ui.trust_modal_visible {
            return None;
        }
        self.ui.trust_modal_visible = false;
        self.ui.thanks_modal_visible = true;
        Some(TrustSurveySubmission {
            email: self.ui.last_submitted_email.clone().unwrap_or_default(),
            trust_score: score,
            repository_url: self.form.repository_url.as_text().to_string(),
        })
    }

    pub fn show_example(&mut self) {
        self.ui.example_modal_visible = true;
    }

    /// Hide one overlay; form input and status are untouched
    pub fn close_modal(&mut self, modal: Modal) {
        match modal {
            Modal::Example => self.ui.example_modal_visible = false,
            Modal::TrustSurvey => self.ui.trust_modal_visible = false,
            Modal::Thanks => self.ui.thanks_modal_visible = false,
        }
    }

    /// The overlay that currently receives input, if any
    pub fn top_modal(&self) -> Option<Modal> {
        if self.ui.thanks_modal_visible {
            Some(Modal::Thanks)
        } else if self.ui.trust_modal_visible {
            Some(Modal::TrustSurvey)
        } else if self.ui.example_modal_visible {
            Some(Modal::Example)
        } else {
            None
        }
    }
}
