// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the intake pipeline's collaborators.
//!
//! All traits use `#[async_trait]` for dynamic dispatch compatibility --
//! the pipeline holds its collaborators as `Arc<dyn Trait + Send + Sync>`.

pub mod classifier;
pub mod notifier;
pub mod store;

// Re-export all traits at the traits module level for convenience.
pub use classifier::SentimentClassifier;
pub use notifier::Notifier;
pub use store::ComplaintStore;
