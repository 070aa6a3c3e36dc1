//! Application state and core logic
//!
//! `App` drives the submission flow: it turns key presses into flow
//! transitions and runs the network calls those transitions ask for.
//! Primary submissions run on a spawned task and report back over a
//! channel drained by `poll_submissions`; survey answers are fire-and-forget.

use crate::error::SubmissionError;
use crate::sink::{FeedbackSubmission, FormSink};
use crate::state::{FieldKey, Form, FormField, Modal, SubmissionFlow, TrustScore};
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Result of a primary submission, sent back by its task
#[derive(Debug)]
struct SubmissionOutcome {
    attempt: Uuid,
    submission: FeedbackSubmission,
    result: Result<(), SubmissionError>,
}

/// Main application struct
pub struct App {
    /// Form input, status and overlays
    pub flow: SubmissionFlow,
    /// Where submissions are posted
    sink: Arc<dyn FormSink>,
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(sink: Arc<dyn FormSink>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            flow: SubmissionFlow::new(),
            sink,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Start a primary submission in the background.
    ///
    /// Returns false without touching the network when the form is
    /// incomplete or another submission is still in flight.
    pub fn submit(&mut self) -> bool {
        let Some(submission) = self.flow.begin_submit() else {
            tracing::debug!(
                valid = self.flow.is_form_valid(),
                in_flight = self.flow.ui.is_submitting,
                "submit ignored"
            );
            return false;
        };

        let attempt = Uuid::new_v4();
        tracing::info!(
            %attempt,
            source = submission.referral_source.as_str(),
            "submitting review request"
        );

        let sink = Arc::clone(&self.sink);
        let tx = self.outcome_tx.clone();
        let request = submission.clone();
        tokio::spawn(async move {
            // The call runs in its own task so a panic still reports back
            let call = tokio::spawn(async move { sink.submit_feedback(&request).await });
            let result = call.await.unwrap_or_else(|err| Err(err.into()));
            // A closed channel means the app already exited
            let _ = tx.send(SubmissionOutcome {
                attempt,
                submission,
                result,
            });
        });
        true
    }

    /// Apply every finished submission. Called once per UI tick.
    pub fn poll_submissions(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    /// Wait for the next submission to finish and apply it
    #[cfg(test)]
    async fn wait_for_submission(&mut self) {
        if let Some(outcome) = self.outcome_rx.recv().await {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        let SubmissionOutcome {
            attempt,
            submission,
            result,
        } = outcome;
        match &result {
            Ok(()) => tracing::info!(%attempt, "review request accepted"),
            Err(err) => tracing::warn!(%attempt, error = %err, "review request failed"),
        }
        self.flow.finish_submit(&submission, result);
    }

    /// Record a trust score and post it without waiting for the answer.
    ///
    /// The thanks note shows right away; delivery failures are dropped.
    pub fn pick_trust_score(&mut self, score: TrustScore) -> bool {
        let Some(survey) = self.flow.pick_trust_score(score) else {
            return false;
        };

        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            if let Err(err) = sink.submit_trust_survey(&survey).await {
                tracing::debug!(error = %err, "trust survey not delivered");
            }
        });
        true
    }

    /// Handle a key press. The topmost overlay gets it first.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.flow.top_modal() {
            Some(Modal::TrustSurvey) => self.handle_trust_survey_key(key),
            Some(modal @ (Modal::Thanks | Modal::Example)) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.flow.close_modal(modal);
                }
            }
            None => self.handle_form_key(key),
        }
    }

    fn handle_trust_survey_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                if let Some(score) = TrustScore::from_digit(c) {
                    self.pick_trust_score(score);
                }
            }
            KeyCode::Esc => self.flow.close_modal(Modal::TrustSurvey),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let form = &self.flow.form;
        let on_submit_row = form.is_submit_row_active();
        let on_feedback = form.active_field() == FieldKey::FeedbackRequest.index();
        let on_selector = form
            .get_field(form.active_field())
            .is_some_and(|f| f.is_selector());
        let shortcut = crate::platform::is_shortcut(key.modifiers);

        match key.code {
            KeyCode::Char('s') if shortcut => {
                self.submit();
            }
            KeyCode::F(1) => self.flow.show_example(),
            KeyCode::Tab => self.flow.form.next_field(),
            KeyCode::BackTab => self.flow.form.prev_field(),
            KeyCode::Enter if on_submit_row => {
                self.submit();
            }
            KeyCode::Enter if on_feedback => self.edit_active_field(|f| f.push_char('\n')),
            KeyCode::Enter => self.flow.form.next_field(),
            KeyCode::Right if on_selector => self.edit_active_field(|f| f.select_next()),
            KeyCode::Left if on_selector => self.edit_active_field(|f| f.select_prev()),
            KeyCode::Char(c) if !shortcut => self.edit_active_field(|f| f.push_char(c)),
            KeyCode::Backspace => self.edit_active_field(|f| f.pop_char()),
            _ => {}
        }
    }

    /// Apply an edit to the focused input; no-op on the submit row
    fn edit_active_field(&mut self, edit: impl FnOnce(&mut FormField)) {
        if let Some(key) = self.flow.form.active_key() {
            edit(self.flow.form.field_mut(key));
        }
    }
}
