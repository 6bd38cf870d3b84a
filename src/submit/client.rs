//! Simulated message transport
//!
//! Stands in for the real backend call: resolves successfully after a
//! fixed delay. A real transport can replace this behind
//! [`MessageGateway`] without touching the form controller.

use super::error::SubmissionError;
use super::traits::MessageGateway;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Reference delay of the simulated call
const SEND_DELAY: Duration = Duration::from_millis(2000);

/// Simulated submission client
pub struct MessageClient {
    delay: Duration,
}

impl MessageClient {
    pub fn new() -> Self {
        Self { delay: SEND_DELAY }
    }

    #[allow(dead_code)]
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MessageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageGateway for MessageClient {
    async fn send_message(
        &mut self,
        fields: HashMap<String, String>,
    ) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.delay).await;
        tracing::debug!(field_count = fields.len(), "message delivered (simulated)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_send_resolves_ok() {
        let mut client = MessageClient::new();
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "Ada".to_string());

        // Paused time auto-advances through the simulated delay
        let result = client.send_message(fields).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_zero_delay_client_for_tests() {
        let mut client = MessageClient::with_delay(Duration::ZERO);
        let result = client.send_message(HashMap::new()).await;
        assert!(result.is_ok());
    }
}
