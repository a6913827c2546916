//! Text rendering of a submission state
//!
//! Produces the status banner and the result pane as plain text, so any
//! front-end (terminal, log, test) can draw a state without knowing the
//! rules for which pane content wins.

use crate::types::{RequestStatus, SubmissionState};

/// Result pane text while a request is outstanding
pub const LOADING_TEXT: &str = "Researching book... This may take 5-20 minutes for deep analysis.";

/// Result pane text before anything has been submitted
pub const PLACEHOLDER_TEXT: &str =
    "Enter book details above and click \"Generate Book Summary\" to start the research.";

/// Status banner, or `None` when idle
pub fn status_banner(status: &RequestStatus) -> Option<String> {
    let label = match status {
        RequestStatus::Idle => return None,
        RequestStatus::Info(_) => "info",
        RequestStatus::Success(_) => "success",
        RequestStatus::Error(_) => "error",
    };
    status.message().map(|msg| format!("[{}] {}", label, msg))
}

/// Result pane contents
///
/// Loading takes precedence over any stored result; an empty result shows
/// the placeholder.
pub fn result_pane(state: &SubmissionState) -> &str {
    if state.loading {
        LOADING_TEXT
    } else if !state.result.is_empty() {
        &state.result
    } else {
        PLACEHOLDER_TEXT
    }
}

/// Format a state as a markdown document with the request as frontmatter
pub fn format_md(state: &SubmissionState) -> String {
    let mut output = String::new();

    output.push_str("---\n");
    output.push_str(&format!("book_name: {}\n", state.input.book_name));
    output.push_str(&format!("author: {}\n", state.input.author));
    output.push_str(&format!(
        "publication_date: {}\n",
        state.input.publication_date
    ));
    output.push_str("---\n");

    if let Some(banner) = status_banner(&state.status) {
        output.push_str(&banner);
        output.push_str("\n\n");
    }

    output.push_str(result_pane(state));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FormInput;

    #[test]
    fn test_status_banner() {
        assert_eq!(status_banner(&RequestStatus::Idle), None);
        assert_eq!(
            status_banner(&RequestStatus::Error("Please fill in all fields".to_string())),
            Some("[error] Please fill in all fields".to_string())
        );
        assert_eq!(
            status_banner(&RequestStatus::Info("wait".to_string())),
            Some("[info] wait".to_string())
        );
    }

    #[test]
    fn test_result_pane_precedence() {
        let mut state = SubmissionState::default();
        assert_eq!(result_pane(&state), PLACEHOLDER_TEXT);

        state.result = "Summary".to_string();
        assert_eq!(result_pane(&state), "Summary");

        state.loading = true;
        assert_eq!(result_pane(&state), LOADING_TEXT);
    }

    #[test]
    fn test_error_status_does_not_hide_result() {
        let state = SubmissionState {
            status: RequestStatus::Error("❌ Error: invalid book".to_string()),
            result: "Error: invalid book".to_string(),
            ..Default::default()
        };
        assert_eq!(result_pane(&state), "Error: invalid book");
    }

    #[test]
    fn test_format_md() {
        let state = SubmissionState {
            input: FormInput::new("1984", "George Orwell", "1949"),
            loading: false,
            status: RequestStatus::Success("✅ Research completed successfully!".to_string()),
            result: "# 1984\nA dystopia.".to_string(),
        };

        let output = format_md(&state);

        assert!(output.starts_with("---\n"));
        assert!(output.contains("book_name: 1984\n"));
        assert!(output.contains("author: George Orwell\n"));
        assert!(output.contains("publication_date: 1949\n"));
        assert!(output.contains("[success] ✅ Research completed successfully!\n\n"));
        assert!(output.ends_with("# 1984\nA dystopia."));
    }

    #[test]
    fn test_format_md_idle_has_no_banner() {
        let output = format_md(&SubmissionState::default());
        assert!(!output.contains('['));
        assert!(output.ends_with(PLACEHOLDER_TEXT));
    }
}
