use std::time::Duration;

use async_trait::async_trait;

use super::{ApplicationSubmission, SubmissionAck};

#[derive(Debug)]
pub struct TransportError {
    pub message: String,
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for TransportError {
    fn from(s: String) -> Self {
        TransportError { message: s }
    }
}

impl From<&str> for TransportError {
    fn from(s: &str) -> Self {
        TransportError {
            message: s.to_string(),
        }
    }
}

/// One request/response exchange carrying a submission to the dispatcher.
///
/// `Ok(true)` means the receiver acknowledged success; `Ok(false)` is a
/// response without a success indicator.
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    async fn submit(&self, submission: &ApplicationSubmission) -> Result<bool, TransportError>;
}

/// Posts submissions as JSON to `{base_url}/api/get-scouted`.
pub struct HttpSubmitTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitTransport {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TransportError::from(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/get-scouted", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitTransport for HttpSubmitTransport {
    async fn submit(&self, submission: &ApplicationSubmission) -> Result<bool, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| TransportError::from(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            tracing::debug!("Submission rejected with status {}", response.status());
            return Ok(false);
        }

        // A 2xx without a readable acknowledgment is not a success.
        let ack = response.json::<SubmissionAck>().await.ok();
        Ok(ack.is_some_and(|a| a.success))
    }
}
