//! HTTP client for the hosted form endpoint
//!
//! Both payloads are posted as multipart form data to the same URL, asking
//! for a JSON answer so the endpoint does not redirect to a thank-you page.

use super::payload::{FeedbackSubmission, TrustSurveySubmission};
use super::traits::FormSink;
use crate::config::{FormConfig, REQUEST_TIMEOUT};
use crate::error::SubmissionError;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::multipart::Form;
use serde::Deserialize;
use url::Url;

/// Error body returned by hosted form services on rejection
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
}

/// Pull a readable reason out of a rejection body, if it has one
fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let mut messages: Vec<String> = parsed.errors.into_iter().map(|e| e.message).collect();
    if messages.is_empty() {
        messages.extend(parsed.error);
    }
    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}

fn build_form(fields: Vec<(&'static str, String)>) -> Form {
    fields
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value))
}

/// Client for posting to the form endpoint
pub struct HttpFormSink {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpFormSink {
    /// Create a new sink for the configured endpoint
    pub fn new(config: &FormConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    async fn post(
        &self,
        fields: Vec<(&'static str, String)>,
    ) -> Result<reqwest::Response, SubmissionError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .multipart(build_form(fields))
            .send()
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl FormSink for HttpFormSink {
    async fn submit_feedback(
        &self,
        submission: &FeedbackSubmission,
    ) -> Result<(), SubmissionError> {
        let response = self.post(submission.form_fields()).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let detail = error_detail(&body);
        tracing::debug!(status = status.as_u16(), ?detail, "form endpoint rejected submission");
        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }

    async fn submit_trust_survey(
        &self,
        survey: &TrustSurveySubmission,
    ) -> Result<(), SubmissionError> {
        // Any answer counts as delivered
        let response = self.post(survey.form_fields()).await?;
        tracing::debug!(status = response.status().as_u16(), "trust survey posted");
        Ok(())
    }
}
