//! HTTP form transport — URL-encoded POST to the intake endpoint.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{Submission, SubmissionTransport};
use crate::config::WizardConfig;
use crate::error::{Result, TransportError};

const TRANSPORT_NAME: &str = "http_form";

/// Posts submissions as `application/x-www-form-urlencoded`.
///
/// The response body belongs to the intake service; it is drained and
/// dropped unread. Any HTTP status counts as delivered.
pub struct HttpFormTransport {
    endpoint: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpFormTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    /// Build from a validated configuration.
    pub fn from_config(config: &WizardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.endpoint.clone(), config.request_timeout))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionTransport for HttpFormTransport {
    fn name(&self) -> &str {
        TRANSPORT_NAME
    }

    async fn deliver(
        &self,
        submission: &Submission,
    ) -> std::result::Result<(), TransportError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .form(&submission.fields)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout {
                        name: TRANSPORT_NAME.into(),
                        timeout: self.timeout,
                    }
                } else {
                    TransportError::Request {
                        name: TRANSPORT_NAME.into(),
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = resp.status();
        // Opaque body: finish reading it so the connection can be reused
        let _ = resp.bytes().await;

        debug!(
            submission_id = %submission.id,
            status = %status,
            "Intake endpoint responded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_validates() {
        let config = WizardConfig {
            endpoint: "mailto:someone@example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            HttpFormTransport::from_config(&config),
            Err(crate::error::Error::Config(_))
        ));

        let transport = HttpFormTransport::from_config(&WizardConfig::default()).unwrap();
        assert_eq!(transport.endpoint(), crate::config::DEFAULT_ENDPOINT);
        assert_eq!(transport.name(), "http_form");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_request_error() {
        // Port 9 on loopback is closed in test environments
        let transport = HttpFormTransport::new("http://127.0.0.1:9/hook", Duration::from_secs(2));
        let submission = Submission::new(vec![("amount", "1".to_string())]);
        let err = transport.deliver(&submission).await.unwrap_err();
        assert!(matches!(
            err,
            TransportError::Request { .. } | TransportError::Timeout { .. }
        ));
    }
}
