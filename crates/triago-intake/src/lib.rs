// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Complaint intake and triage pipeline.
//!
//! [`IntakePipeline`] orchestrates the components behind complaint
//! creation and updates: classify the text, persist the record, then
//! kick off the webhook notification on a detached task. The caller gets
//! a receipt as soon as the row is committed; notification delivery never
//! delays or fails the response.

use std::sync::Arc;

use tracing::{debug, info};

use triago_core::{
    ComplaintCreated, ComplaintReceipt, ComplaintStore, Notifier, SentimentClassifier,
    TriagoError, DEFAULT_CATEGORY, DEFAULT_STATUS,
};

/// Orchestrates complaint creation and updates across the store,
/// classifier, and notifier.
pub struct IntakePipeline {
    store: Arc<dyn ComplaintStore + Send + Sync>,
    classifier: Arc<dyn SentimentClassifier + Send + Sync>,
    notifier: Arc<dyn Notifier + Send + Sync>,
}

impl IntakePipeline {
    pub fn new(
        store: Arc<dyn ComplaintStore + Send + Sync>,
        classifier: Arc<dyn SentimentClassifier + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
    ) -> Self {
        Self {
            store,
            classifier,
            notifier,
        }
    }

    /// Ingest a new complaint.
    ///
    /// Classifies the text, persists the record with default status and
    /// category, and spawns the notification task. The returned receipt
    /// reflects the stored row; notification outcome is deliberately not
    /// part of it.
    pub async fn create_complaint(&self, text: &str) -> Result<ComplaintReceipt, TriagoError> {
        if text.trim().is_empty() {
            return Err(TriagoError::InvalidRequest(
                "complaint text must not be empty".to_string(),
            ));
        }

        let sentiment = self.classifier.classify(text).await;
        let id = self.store.create(text, sentiment, None).await?;
        info!(id, %sentiment, "complaint created");

        let event = ComplaintCreated::new(id, text, sentiment);
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            notifier.notify(&event).await;
        });

        Ok(ComplaintReceipt {
            id,
            status: DEFAULT_STATUS.to_string(),
            sentiment,
            category: DEFAULT_CATEGORY.to_string(),
        })
    }

    /// Set a complaint's status.
    ///
    /// Returns `NotFound` when no row matches the id.
    pub async fn set_status(&self, id: i64, status: &str) -> Result<(), TriagoError> {
        if status.trim().is_empty() {
            return Err(TriagoError::InvalidRequest(
                "status must not be empty".to_string(),
            ));
        }
        if self.store.update_status(id, status).await? {
            debug!(id, status, "complaint status updated");
            Ok(())
        } else {
            Err(TriagoError::NotFound { id })
        }
    }

    /// Set a complaint's category.
    ///
    /// Returns `NotFound` when no row matches the id.
    pub async fn set_category(&self, id: i64, category: &str) -> Result<(), TriagoError> {
        if category.trim().is_empty() {
            return Err(TriagoError::InvalidRequest(
                "category must not be empty".to_string(),
            ));
        }
        if self.store.update_category(id, category).await? {
            debug!(id, category, "complaint category updated");
            Ok(())
        } else {
            Err(TriagoError::NotFound { id })
        }
    }
}
