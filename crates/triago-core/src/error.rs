// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Triago service.

use thiserror::Error;

/// The primary error type used across Triago adapter traits and the intake
/// pipeline.
///
/// Classification and notification failures are deliberately absent: both
/// are absorbed at their call sites (degrading to `SentimentLabel::Unknown`
/// or a dropped webhook) and never propagate.
#[derive(Debug, Error)]
pub enum TriagoError {
    /// Configuration errors (invalid TOML, bad values). Startup only.
    #[error("configuration error: {0}")]
    Config(String),

    /// Caller-supplied input failed a precondition (empty text, no update
    /// fields, malformed filter value). Maps to HTTP 400 at the gateway.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The targeted complaint id does not exist. Maps to HTTP 404.
    #[error("complaint {id} not found")]
    NotFound { id: i64 },

    /// The persistence layer could not complete a durable operation.
    /// Fatal to the operation in progress; maps to HTTP 500.
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Gateway bind/serve failure.
    #[error("server error: {message}")]
    Server {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}
