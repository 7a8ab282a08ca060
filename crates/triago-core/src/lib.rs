// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Triago complaint triage service.
//!
//! This crate provides the error taxonomy, the `Complaint` domain model,
//! and the adapter traits implemented by the storage, classifier, and
//! notifier crates. It carries no I/O of its own.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::TriagoError;
pub use types::{
    Complaint, ComplaintCreated, ComplaintFilter, ComplaintReceipt, SentimentLabel,
    DEFAULT_CATEGORY, DEFAULT_STATUS,
};

pub use traits::{ComplaintStore, Notifier, SentimentClassifier};
