//! Error types for configuration and form submission

use thiserror::Error;

/// Problems with the startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingEndpoint(&'static str),

    #[error("invalid endpoint URL {value:?}: {source}")]
    InvalidEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("endpoint URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}

/// A submission the sink did not accept
///
/// Both variants are shown to the user as the same generic failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The sink answered with a non-success status
    #[error("form endpoint rejected the submission with status {status}{}", detail_suffix(.detail))]
    Rejected { status: u16, detail: Option<String> },

    /// The request never produced a response
    #[error("could not reach the form endpoint: {0}")]
    Transport(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        SubmissionError::Transport(err.to_string())
    }
}

impl From<tokio::task::JoinError> for SubmissionError {
    fn from(err: tokio::task::JoinError) -> Self {
        SubmissionError::Transport(format!("submission task failed: {err}"))
    }
}
