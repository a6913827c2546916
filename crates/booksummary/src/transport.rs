//! Transport layer for submitting book requests
//!
//! Design: the controller never talks to reqwest directly. It hands a
//! [`BookRequest`] to a [`Transport`], which performs exactly one POST and
//! returns the reply body of a 2xx response. Anything else comes back as a
//! [`SubmitError`].

use crate::error::SubmitError;
use crate::types::BookRequest;
use crate::DEFAULT_USER_AGENT;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use url::Url;

/// Trait for sending a book request to the summary API
///
/// Implementations must issue at most one request per call and must not
/// retry. The returned string is the complete response body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Identifier for logging
    fn name(&self) -> &'static str;

    /// POST the request as JSON to the endpoint
    ///
    /// Returns the body of a 2xx reply as text, whatever its declared
    /// content type. A non-2xx reply is reported as
    /// [`SubmitError::HttpStatus`] without reading the body.
    async fn send(&self, endpoint: &Url, request: &BookRequest) -> Result<String, SubmitError>;
}

/// HTTP transport backed by reqwest
///
/// The client has no request timeout: research runs can take many minutes
/// and the call stays pending until the server answers or the connection
/// drops.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the default User-Agent
    pub fn new() -> Result<Self, SubmitError> {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    /// Create a transport with a custom User-Agent
    pub fn with_user_agent(user_agent: &str) -> Result<Self, SubmitError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(SubmitError::ClientBuild)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn send(&self, endpoint: &Url, request: &BookRequest) -> Result<String, SubmitError> {
        // json() sets Content-Type: application/json
        let response = self
            .client
            .post(endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(SubmitError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::HttpStatus(status.as_u16()));
        }

        response.text().await.map_err(SubmitError::from_reqwest)
    }
}
