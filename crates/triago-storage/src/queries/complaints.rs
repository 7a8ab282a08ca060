// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CRUD operations for complaint records.

use std::str::FromStr;

use rusqlite::params;
use triago_core::{Complaint, ComplaintFilter, DEFAULT_CATEGORY, SentimentLabel, TriagoError};

use crate::database::Database;

const COLUMNS: &str = "id, text, status, timestamp, sentiment, category";

fn row_to_complaint(row: &rusqlite::Row<'_>) -> Result<Complaint, rusqlite::Error> {
    let sentiment: String = row.get(4)?;
    Ok(Complaint {
        id: row.get(0)?,
        text: row.get(1)?,
        status: row.get(2)?,
        timestamp: row.get(3)?,
        // Only we write this column; anything unrecognized degrades to Unknown.
        sentiment: SentimentLabel::from_str(&sentiment).unwrap_or(SentimentLabel::Unknown),
        category: row.get(5)?,
    })
}

/// Insert a new complaint. Returns the auto-assigned id.
///
/// `id`, `timestamp`, and `status` come from the schema defaults -- the
/// store clock, not the caller, stamps the row.
pub async fn create(
    db: &Database,
    text: &str,
    sentiment: SentimentLabel,
    category: Option<&str>,
) -> Result<i64, TriagoError> {
    let text = text.to_string();
    let sentiment = sentiment.to_string();
    let category = category.unwrap_or(DEFAULT_CATEGORY).to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO complaints (text, sentiment, category) VALUES (?1, ?2, ?3)",
                params![text, sentiment, category],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get a complaint by id. `None` means no such row.
pub async fn get_by_id(db: &Database, id: i64) -> Result<Option<Complaint>, TriagoError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM complaints WHERE id = ?1"
            ))?;
            let result = stmt.query_row(params![id], row_to_complaint);
            match result {
                Ok(complaint) => Ok(Some(complaint)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List complaints matching the filter, ascending by id.
///
/// Filters are conjunctive; `since` is a strict lower bound on the
/// timestamp column (boundary equality excluded). Timestamps are stored as
/// RFC 3339 UTC text, so lexicographic comparison equals chronological.
pub async fn list(db: &Database, filter: &ComplaintFilter) -> Result<Vec<Complaint>, TriagoError> {
    let filter = filter.clone();
    db.connection()
        .call(move |conn| {
            let mut sql = format!("SELECT {COLUMNS} FROM complaints WHERE 1=1");
            let mut params: Vec<String> = Vec::new();

            if let Some(status) = &filter.status {
                sql.push_str(" AND status = ?");
                params.push(status.clone());
            }
            if let Some(since) = &filter.since {
                sql.push_str(" AND timestamp > ?");
                params.push(since.clone());
            }
            sql.push_str(" ORDER BY id ASC");

            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(rusqlite::params_from_iter(params), row_to_complaint)?;

            let mut complaints = Vec::new();
            for row in rows {
                complaints.push(row?);
            }
            Ok(complaints)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Set a complaint's status. Returns true iff the row existed.
pub async fn update_status(db: &Database, id: i64, status: &str) -> Result<bool, TriagoError> {
    let status = status.to_string();
    db.connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE complaints SET status = ?1 WHERE id = ?2",
                params![status, id],
            )?;
            Ok(changed > 0)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Set a complaint's category. Returns true iff the row existed.
pub async fn update_category(db: &Database, id: i64, category: &str) -> Result<bool, TriagoError> {
    let category = category.to_string();
    db.connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE complaints SET category = ?1 WHERE id = ?2",
                params![category, id],
            )?;
            Ok(changed > 0)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
