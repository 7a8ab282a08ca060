// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound webhook notifications for newly created complaints.
//!
//! [`WebhookNotifier`] posts a JSON event to the configured URL. Delivery
//! is fire-and-forget: failures are logged and dropped, and the notifier
//! never reports an error back to the caller.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use triago_config::model::WebhookConfig;
use triago_core::{ComplaintCreated, Notifier, TriagoError};

/// Webhook notifier that POSTs complaint-created events.
///
/// When no URL is configured the notifier is a no-op.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: Option<String>,
}

impl WebhookNotifier {
    /// Creates a notifier from configuration.
    pub fn new(config: &WebhookConfig) -> Result<Self, TriagoError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TriagoError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, event: &ComplaintCreated) {
        let Some(url) = self.url.as_deref() else {
            return;
        };

        match self.client.post(url).json(event).send().await {
            Ok(response) if response.status().is_success() => {
                debug!(id = event.id, "webhook delivered");
            }
            Ok(response) => {
                warn!(
                    id = event.id,
                    status = %response.status(),
                    "webhook endpoint rejected notification"
                );
            }
            Err(e) => {
                warn!(id = event.id, error = %e, "webhook delivery failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triago_core::SentimentLabel;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_event() -> ComplaintCreated {
        ComplaintCreated::new(7, "the app crashes on login", SentimentLabel::Negative)
    }

    fn make_config(url: Option<String>) -> WebhookConfig {
        WebhookConfig {
            url,
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn delivers_event_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(body_json(serde_json::json!({
                "id": 7,
                "text": "the app crashes on login",
                "sentiment": "negative",
                "status": "open",
                "category": "other"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = WebhookNotifier::new(&make_config(Some(format!("{}/hook", server.uri()))))
            .unwrap();
        notifier.notify(&make_event()).await;
    }

    #[tokio::test]
    async fn failing_endpoint_is_absorbed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = WebhookNotifier::new(&make_config(Some(format!("{}/hook", server.uri()))))
            .unwrap();
        // Must not panic or propagate anything.
        notifier.notify(&make_event()).await;
    }

    #[tokio::test]
    async fn no_url_means_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let notifier = WebhookNotifier::new(&make_config(None)).unwrap();
        notifier.notify(&make_event()).await;
    }
}
