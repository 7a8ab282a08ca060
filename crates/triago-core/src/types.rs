// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for the complaint triage pipeline.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Status assigned to every complaint at creation.
pub const DEFAULT_STATUS: &str = "open";

/// Category assigned when the caller supplies none.
pub const DEFAULT_CATEGORY: &str = "other";

/// Advisory sentiment label attached to a complaint at creation.
///
/// `Unknown` denotes "classification unavailable or inconclusive" -- it is
/// the degraded value for every classifier failure mode, not a classifier
/// output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize, Default,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    #[default]
    Unknown,
}

/// A persisted complaint record with triage metadata.
///
/// `id` and `timestamp` are assigned by the store and never change.
/// `status` and `category` are mutable through the two update operations;
/// `text` and `sentiment` are fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    /// Store-assigned identifier, strictly increasing per store instance.
    pub id: i64,
    /// The complaint text as submitted. Non-empty.
    pub text: String,
    /// Triage status. Open string set, defaults to "open".
    pub status: String,
    /// RFC 3339 UTC creation instant, assigned by the store clock.
    pub timestamp: String,
    /// Sentiment label fixed at creation.
    pub sentiment: SentimentLabel,
    /// Triage category. Open string set, defaults to "other".
    pub category: String,
}

/// Conjunctive filters for listing complaints.
#[derive(Debug, Clone, Default)]
pub struct ComplaintFilter {
    /// Exact status match.
    pub status: Option<String>,
    /// Strict lower bound: only rows with `timestamp > since` match.
    /// RFC 3339 UTC with millisecond precision, same shape the store writes.
    pub since: Option<String>,
}

/// What the caller gets back from a successful creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintReceipt {
    pub id: i64,
    pub status: String,
    pub sentiment: SentimentLabel,
    pub category: String,
}

/// Creation event delivered to the notification sink.
///
/// Carries the record's fields as they stood at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintCreated {
    pub id: i64,
    pub text: String,
    pub sentiment: SentimentLabel,
    pub status: String,
    pub category: String,
}

impl ComplaintCreated {
    /// Build the creation event for a freshly assigned id.
    pub fn new(id: i64, text: &str, sentiment: SentimentLabel) -> Self {
        Self {
            id,
            text: text.to_string(),
            sentiment,
            status: DEFAULT_STATUS.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn sentiment_label_display_and_parse_roundtrip() {
        for label in [
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
            SentimentLabel::Unknown,
        ] {
            let s = label.to_string();
            assert_eq!(s, s.to_lowercase());
            assert_eq!(SentimentLabel::from_str(&s).unwrap(), label);
        }
    }

    #[test]
    fn sentiment_label_defaults_to_unknown() {
        assert_eq!(SentimentLabel::default(), SentimentLabel::Unknown);
    }

    #[test]
    fn complaint_serializes_with_lowercase_sentiment() {
        let complaint = Complaint {
            id: 7,
            text: "No SMS code arrives".into(),
            status: DEFAULT_STATUS.into(),
            timestamp: "2026-01-01T00:00:00.000Z".into(),
            sentiment: SentimentLabel::Negative,
            category: DEFAULT_CATEGORY.into(),
        };
        let json = serde_json::to_value(&complaint).unwrap();
        assert_eq!(json["sentiment"], "negative");
        assert_eq!(json["status"], "open");
        assert_eq!(json["category"], "other");
    }

    #[test]
    fn creation_event_carries_defaults() {
        let event = ComplaintCreated::new(3, "bad service", SentimentLabel::Unknown);
        assert_eq!(event.id, 3);
        assert_eq!(event.status, "open");
        assert_eq!(event.category, "other");
        assert_eq!(event.sentiment, SentimentLabel::Unknown);
    }

    #[test]
    fn empty_filter_matches_nothing_specific() {
        let filter = ComplaintFilter::default();
        assert!(filter.status.is_none());
        assert!(filter.since.is_none());
    }
}
