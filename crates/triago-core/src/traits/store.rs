// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Complaint store trait for persistence backends.

use async_trait::async_trait;

use crate::error::TriagoError;
use crate::types::{Complaint, ComplaintFilter, SentimentLabel};

/// Durable, queryable home for complaint records.
///
/// Implementations must serialize concurrent writers so that `create`
/// never reuses an id and concurrent updates to the same record do not
/// interleave partially (last-writer-wins per field is acceptable).
#[async_trait]
pub trait ComplaintStore {
    /// Persist a new complaint and return its store-assigned id.
    ///
    /// The store assigns `id`, `timestamp`, and `status = "open"`.
    /// `category` defaults to `"other"` when absent. The row is durable
    /// before this returns, and ids are strictly increasing across calls
    /// on a single store instance.
    async fn create(
        &self,
        text: &str,
        sentiment: SentimentLabel,
        category: Option<&str>,
    ) -> Result<i64, TriagoError>;

    /// Fetch a single complaint. `None` means not found, never an error.
    async fn get_by_id(&self, id: i64) -> Result<Option<Complaint>, TriagoError>;

    /// List complaints matching all given filters, ascending by id.
    ///
    /// The result is eagerly materialized and bounded by row count.
    async fn list(&self, filter: &ComplaintFilter) -> Result<Vec<Complaint>, TriagoError>;

    /// Set the status field. Returns true iff a row with that id existed.
    async fn update_status(&self, id: i64, status: &str) -> Result<bool, TriagoError>;

    /// Set the category field. Same contract as [`update_status`].
    ///
    /// [`update_status`]: ComplaintStore::update_status
    async fn update_category(&self, id: i64, category: &str) -> Result<bool, TriagoError>;

    /// Close the backend, flushing pending writes.
    async fn close(&self) -> Result<(), TriagoError>;
}
