//! Submission-specific error types

use thiserror::Error;

/// Failure of the remote submission call.
///
/// Opaque to the form layer: whatever the cause, it surfaces as a single
/// error toast and the form keeps its values.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The endpoint could not be reached
    #[error("submission endpoint unreachable: {0}")]
    Unreachable(String),

    /// The endpoint refused the message
    #[error("submission rejected: {0}")]
    #[allow(dead_code)]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_error_display() {
        let error = SubmissionError::Unreachable("connection refused".to_string());
        assert!(error.to_string().contains("unreachable"));
        assert!(error.to_string().contains("connection refused"));

        let error = SubmissionError::Rejected("payload too large".to_string());
        assert!(error.to_string().contains("rejected"));
    }
}
