// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the external sentiment prediction API.
//!
//! Provides [`HttpSentimentClassifier`], which calls the configured
//! prediction endpoint and maps its answer to a [`SentimentLabel`].
//! Classification is best-effort: every failure mode (no API key, network
//! error, timeout, non-success status, malformed body) degrades to
//! [`SentimentLabel::Unknown`] rather than failing complaint intake.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use triago_config::model::SentimentConfig;
use triago_core::{SentimentClassifier, SentimentLabel, TriagoError};

/// Response body from the prediction endpoint.
///
/// Only the `sentiment` field is inspected; anything else the provider
/// returns is ignored. A successful response without the field is treated
/// as an empty answer and maps to neutral.
#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    sentiment: String,
}

/// Sentiment classifier backed by an external HTTP prediction API.
#[derive(Debug, Clone)]
pub struct HttpSentimentClassifier {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl HttpSentimentClassifier {
    /// Creates a classifier from configuration.
    ///
    /// The request timeout is enforced by the underlying client, so a slow
    /// provider can never hold up intake longer than `timeout_secs`.
    pub fn new(config: &SentimentConfig) -> Result<Self, TriagoError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TriagoError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Overrides the API URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_api_url(mut self, url: String) -> Self {
        self.api_url = url;
        self
    }

    async fn predict(&self, text: &str, api_key: &str) -> Result<PredictResponse, reqwest::Error> {
        let response = self
            .client
            .post(&self.api_url)
            .header("apikey", api_key)
            .body(text.to_string())
            .send()
            .await?
            .error_for_status()?;

        response.json::<PredictResponse>().await
    }
}

#[async_trait]
impl SentimentClassifier for HttpSentimentClassifier {
    async fn classify(&self, text: &str) -> SentimentLabel {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("no sentiment API key configured, labelling as unknown");
            return SentimentLabel::Unknown;
        };

        match self.predict(text, api_key).await {
            Ok(body) => {
                let label = map_sentiment(&body.sentiment);
                debug!(raw = %body.sentiment, %label, "sentiment prediction received");
                label
            }
            Err(e) => {
                warn!(error = %e, "sentiment prediction failed, labelling as unknown");
                SentimentLabel::Unknown
            }
        }
    }
}

/// Maps a raw provider answer to a label by case-insensitive substring
/// match. Any answer that names neither polarity (including the empty
/// string) is neutral.
fn map_sentiment(raw: &str) -> SentimentLabel {
    let lower = raw.to_lowercase();
    if lower.contains("positive") {
        SentimentLabel::Positive
    } else if lower.contains("negative") {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}
