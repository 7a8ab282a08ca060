// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the ComplaintStore trait.

use async_trait::async_trait;
use tracing::debug;

use triago_config::model::StorageConfig;
use triago_core::{Complaint, ComplaintFilter, ComplaintStore, SentimentLabel, TriagoError};

use crate::database::Database;
use crate::queries;

/// SQLite-backed complaint store.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query module. The connection is opened (and migrated) eagerly in
/// [`SqliteComplaintStore::open`] and closed explicitly at shutdown --
/// lifecycle is a scoped resource, not ambient global state.
pub struct SqliteComplaintStore {
    db: Database,
}

impl SqliteComplaintStore {
    /// Open the store at the configured path, running migrations.
    pub async fn open(config: &StorageConfig) -> Result<Self, TriagoError> {
        let db = Database::open(&config.database_path, config.wal_mode).await?;
        debug!(path = %config.database_path, "SQLite complaint store opened");
        Ok(Self { db })
    }

    /// Returns the underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl ComplaintStore for SqliteComplaintStore {
    async fn create(
        &self,
        text: &str,
        sentiment: SentimentLabel,
        category: Option<&str>,
    ) -> Result<i64, TriagoError> {
        queries::complaints::create(&self.db, text, sentiment, category).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Complaint>, TriagoError> {
        queries::complaints::get_by_id(&self.db, id).await
    }

    async fn list(&self, filter: &ComplaintFilter) -> Result<Vec<Complaint>, TriagoError> {
        queries::complaints::list(&self.db, filter).await
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<bool, TriagoError> {
        queries::complaints::update_status(&self.db, id, status).await
    }

    async fn update_category(&self, id: i64, category: &str) -> Result<bool, TriagoError> {
        queries::complaints::update_category(&self.db, id, category).await
    }

    async fn close(&self) -> Result<(), TriagoError> {
        self.db.close().await?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}
