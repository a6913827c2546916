//! Submission controller for BookSummary
//!
//! The controller validates form input, performs one request through its
//! [`Transport`] and folds the outcome into a [`SubmissionState`].

use crate::error::SubmitError;
use crate::transport::{HttpTransport, Transport};
use crate::types::{BookRequest, FormInput, RequestStatus, SubmissionState};
use crate::{
    APPLICATION_ERROR_PREFIX, CONNECTING_MESSAGE, DEFAULT_ENDPOINT, SUCCESS_MESSAGE,
    TROUBLESHOOTING_HINTS,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use url::Url;

/// Check whether a 2xx reply body reports a failure
///
/// The summary API signals some failures with a successful status and a
/// body starting with `Error:`. The match is case-sensitive and anchored at
/// the first byte.
pub fn is_application_error(body: &str) -> bool {
    body.starts_with(APPLICATION_ERROR_PREFIX)
}

/// Builder for configuring the controller
#[derive(Clone, Default)]
pub struct ControllerBuilder {
    /// Endpoint override
    endpoint: Option<String>,
    /// Custom User-Agent
    user_agent: Option<String>,
    /// Custom transport
    transport: Option<Arc<dyn Transport>>,
}

impl ControllerBuilder {
    /// Create a new builder targeting the default endpoint
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint the request is posted to
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set custom User-Agent for the default HTTP transport
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Replace the HTTP transport
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the controller
    pub fn build(self) -> Result<Controller, SubmitError> {
        let endpoint = self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(SubmitError::InvalidEndpoint);
        }
        let endpoint = Url::parse(endpoint).map_err(|_| SubmitError::InvalidEndpoint)?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => match self.user_agent {
                Some(ref ua) => Arc::new(HttpTransport::with_user_agent(ua)?),
                None => Arc::new(HttpTransport::new()?),
            },
        };

        Ok(Controller {
            endpoint,
            transport,
        })
    }
}

/// Configured submission controller
#[derive(Clone)]
pub struct Controller {
    endpoint: Url,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("endpoint", &self.endpoint.as_str())
            .field("transport", &self.transport.name())
            .finish()
    }
}

impl Controller {
    /// Create a controller for the default endpoint
    pub fn new() -> Result<Self, SubmitError> {
        ControllerBuilder::new().build()
    }

    /// Create a new controller builder
    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::new()
    }

    /// Endpoint the controller posts to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Run one submission cycle
    pub async fn submit(&self, state: SubmissionState) -> SubmissionState {
        self.submit_with_status(state, |_| {}).await
    }

    /// Run one submission cycle, reporting every state change
    ///
    /// The callback sees the loading state before the request goes out and
    /// the terminal state once the cycle is over. Invalid input produces a
    /// single callback with the validation error.
    pub async fn submit_with_status<F>(
        &self,
        mut state: SubmissionState,
        mut on_change: F,
    ) -> SubmissionState
    where
        F: FnMut(&SubmissionState),
    {
        if !state.input.is_complete() {
            debug!("Form input incomplete, not submitting");
            state.status = RequestStatus::Error(SubmitError::MissingFields.to_string());
            on_change(&state);
            return state;
        }

        state.loading = true;
        state.result.clear();
        state.status = RequestStatus::Info(CONNECTING_MESSAGE.to_string());
        on_change(&state);

        match self.exchange(&state.input.to_request()).await {
            Ok(body) => {
                state.status = RequestStatus::Success(SUCCESS_MESSAGE.to_string());
                state.result = body;
            }
            Err(SubmitError::Application(body)) => {
                state.status = RequestStatus::Error(format!("❌ {}", body));
                state.result = body;
            }
            Err(err) => {
                error!(error = %err, "Submission failed");
                state.status = RequestStatus::Error(format!("❌ Error: {}", err));
                state.result = format!("Error occurred: {}\n\n{}", err, TROUBLESHOOTING_HINTS);
            }
        }

        state.loading = false;
        on_change(&state);
        state
    }

    /// Validate input and request a summary
    ///
    /// Returns the summary text, or the error that a submission cycle would
    /// have displayed.
    pub async fn request_summary(&self, input: &FormInput) -> Result<String, SubmitError> {
        if !input.is_complete() {
            return Err(SubmitError::MissingFields);
        }
        self.exchange(&input.to_request()).await
    }

    /// Send one request and classify the reply body
    async fn exchange(&self, request: &BookRequest) -> Result<String, SubmitError> {
        debug!(
            transport = self.transport.name(),
            endpoint = %self.endpoint,
            book = %request.book_name,
            author = %request.author,
            "Sending summary request"
        );

        let body = self.transport.send(&self.endpoint, request).await?;

        if is_application_error(&body) {
            warn!(body = %body, "Summary API reported an error");
            return Err(SubmitError::Application(body));
        }

        info!(size = body.len(), "Summary received");
        Ok(body)
    }
}
