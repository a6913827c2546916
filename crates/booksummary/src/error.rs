//! Error types for BookSummary

use crate::MISSING_FIELDS_MESSAGE;
use thiserror::Error;

/// Errors that can occur while building a controller or submitting a request
#[derive(Debug, Error)]
pub enum SubmitError {
    /// One or more form fields are empty
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,

    /// Endpoint is not an http:// or https:// URL
    #[error("Invalid endpoint: must be an http:// or https:// URL")]
    InvalidEndpoint,

    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// Server replied with a non-2xx status
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Failed to connect to server
    #[error("Failed to connect to server")]
    Connect(#[source] reqwest::Error),

    /// Other request error
    #[error("{0}")]
    Request(String),

    /// Server replied 2xx with a body that reports a failure
    #[error("{0}")]
    Application(String),
}

impl SubmitError {
    /// Create an error from a reqwest error
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SubmitError::Timeout
        } else if err.is_connect() {
            SubmitError::Connect(err)
        } else {
            SubmitError::Request(err.to_string())
        }
    }

    /// True for failures raised before or during the HTTP exchange
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SubmitError::HttpStatus(_)
                | SubmitError::Timeout
                | SubmitError::Connect(_)
                | SubmitError::Request(_)
        )
    }
}
