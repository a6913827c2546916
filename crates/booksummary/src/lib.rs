//! BookSummary - client for a local book research service
//!
//! This crate submits book details (name, author, publication date) to a
//! research endpoint and turns the reply into a displayable state.
//!
//! ## Submission cycle
//!
//! The [`Controller`] owns no UI state. Callers pass a [`SubmissionState`]
//! into [`Controller::submit`] and get the updated state back:
//!
//! - empty fields fail validation without touching the network
//! - a valid submission enters the loading state and issues one POST
//! - the reply ends the cycle in either a success or an error status
//!
//! The network call goes through the [`Transport`] trait. [`HttpTransport`]
//! is the reqwest implementation used by default.

mod controller;
mod error;
pub mod render;
pub mod transport;
mod types;

pub use controller::{is_application_error, Controller, ControllerBuilder};
pub use error::SubmitError;
pub use transport::{HttpTransport, Transport};
pub use types::{BookRequest, FormInput, RequestStatus, SubmissionState};

/// Default endpoint of the summary API
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/generate-summary";

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = "Everruns BookSummary/1.0";

/// Body prefix the summary API uses to report failures inside a 2xx reply
pub const APPLICATION_ERROR_PREFIX: &str = "Error:";

/// Status message shown while the request is outstanding
pub const CONNECTING_MESSAGE: &str = "🔗 Connecting to GPT Researcher...";

/// Status message shown after a successful reply
pub const SUCCESS_MESSAGE: &str = "✅ Research completed successfully!";

/// Status message for incomplete form input
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";

/// Checklist appended to the result text after a transport failure
pub const TROUBLESHOOTING_HINTS: &str = "Make sure:
1. The API server is running on localhost:8000
2. GPT Researcher is running on localhost:8001
3. Your internet connection is stable";
