//! Trait abstraction for the submission gateway to enable mocking in tests

use super::error::SubmissionError;
use async_trait::async_trait;
use std::collections::HashMap;

/// Trait for the message submission collaborator.
///
/// Given the form's field name -> value mapping, resolves once the
/// message is delivered or fails with a [`SubmissionError`]. No timeout
/// is imposed here; a call runs to completion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageGateway: Send + Sync {
    /// Deliver the collected field values to the remote endpoint
    async fn send_message(
        &mut self,
        fields: HashMap<String, String>,
    ) -> Result<(), SubmissionError>;
}
