use log::error;
use thiserror::Error;

use crate::endpoints::chat::ValidationError;

/// The single error kind for anything that goes wrong once a request leaves the process.
///
/// Connection failures, timeouts, non-2xx statuses and undecodable bodies all end up
/// here. The underlying cause is logged when the error is created and only its message
/// is kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("perplexity client error: {message}")]
pub struct ClientError {
    message: String,
}

impl ClientError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        error!("Request to Perplexity API failed: {message}");
        Self { message }
    }

    /// Human readable description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        ClientError::new(value.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(value: serde_json::Error) -> Self {
        ClientError::new(format!("invalid response body: {value}"))
    }
}

/// Error returned by the one-shot [`PerplexityClient::chat_completion`] call.
///
/// Validation failures happen before any network I/O and are never folded into
/// [`ClientError`].
///
/// [`PerplexityClient::chat_completion`]: crate::PerplexityClient::chat_completion
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PerplexityError {
    /// The request was rejected locally.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The request was sent and the transport failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}
