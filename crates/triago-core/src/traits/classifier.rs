// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sentiment classifier trait.

use async_trait::async_trait;

use crate::types::SentimentLabel;

/// Best-effort sentiment classification for a piece of text.
///
/// `classify` is a total function: it has no failure case visible to
/// callers. Implementations absorb every failure mode (unconfigured
/// capability, network error, non-success response, unparsable response,
/// timeout) into [`SentimentLabel::Unknown`]. Classification is advisory
/// triage data; degrading keeps complaint creation available when the
/// external dependency is down.
#[async_trait]
pub trait SentimentClassifier {
    /// Classify the given text, degrading to `Unknown` on any failure.
    async fn classify(&self, text: &str) -> SentimentLabel;
}
