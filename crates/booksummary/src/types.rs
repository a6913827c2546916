//! Core types for BookSummary

use serde::{Deserialize, Serialize};

/// Book details as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    /// Name of the book
    pub book_name: String,
    /// Author of the book
    pub author: String,
    /// Publication date, free-form
    pub publication_date: String,
}

impl FormInput {
    /// Create form input from the three fields
    pub fn new(
        book_name: impl Into<String>,
        author: impl Into<String>,
        publication_date: impl Into<String>,
    ) -> Self {
        Self {
            book_name: book_name.into(),
            author: author.into(),
            publication_date: publication_date.into(),
        }
    }

    /// Check that every field is set
    ///
    /// Whitespace counts as content: a field holding only spaces is
    /// considered filled in and is sent as-is.
    pub fn is_complete(&self) -> bool {
        !self.book_name.is_empty() && !self.author.is_empty() && !self.publication_date.is_empty()
    }

    /// Build the wire body for this input
    pub fn to_request(&self) -> BookRequest {
        BookRequest {
            book_name: self.book_name.clone(),
            author: self.author.clone(),
            publication_date: self.publication_date.clone(),
        }
    }
}

/// JSON body posted to the summary API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRequest {
    pub book_name: String,
    pub author: String,
    pub publication_date: String,
}

/// Banner state of the current submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message", rename_all = "lowercase")]
pub enum RequestStatus {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Request in progress
    Info(String),
    /// Research finished
    Success(String),
    /// Validation, transport or application failure
    Error(String),
}

impl RequestStatus {
    /// Banner message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            RequestStatus::Idle => None,
            RequestStatus::Info(msg) | RequestStatus::Success(msg) | RequestStatus::Error(msg) => {
                Some(msg)
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RequestStatus::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RequestStatus::Error(_))
    }
}

/// Everything the rendering surface needs to draw one frame
///
/// The controller takes this by value and hands back the updated copy.
/// Only `input` carries over unchanged from one submission to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionState {
    /// Current form contents
    pub input: FormInput,
    /// True while a request is outstanding
    pub loading: bool,
    /// Banner status
    pub status: RequestStatus,
    /// Last response body or synthesized error explanation
    pub result: String,
}

impl SubmissionState {
    /// Create an idle state for the given input
    pub fn new(input: FormInput) -> Self {
        Self {
            input,
            ..Default::default()
        }
    }
}
