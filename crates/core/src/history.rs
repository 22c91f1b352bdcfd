// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

//! Append-only ledger of accepted status changes.
//!
//! Exactly one entry is written per accepted status change and none for
//! anything else. There is deliberately no update or delete function in
//! this module; entries are immutable once written.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::{parse_db, parse_timestamp, parse_uuid};
use crate::error::Result;
use crate::issue::Status;

/// An immutable record of one accepted status change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Database-assigned identifier.
    pub id: i64,
    /// The issue whose status changed.
    pub issue_id: Uuid,
    /// Status before the change.
    pub from_status: Status,
    /// Status after the change.
    pub to_status: Status,
    /// When the change was accepted.
    pub created_at: DateTime<Utc>,
    /// User who performed the change.
    pub created_by: Uuid,
}

impl HistoryEntry {
    /// Creates an entry ready for [`append`]; the id is assigned on insert.
    pub fn new(
        issue_id: Uuid,
        from: Status,
        to: Status,
        actor: Uuid,
        created_at: DateTime<Utc>,
    ) -> Self {
        HistoryEntry {
            id: 0,
            issue_id,
            from_status: from,
            to_status: to,
            created_at,
            created_by: actor,
        }
    }
}

/// Append an entry to the ledger, returning its assigned id.
pub fn append(conn: &Connection, entry: &HistoryEntry) -> Result<i64> {
    conn.execute(
        "INSERT INTO history (issue_id, from_status, to_status, created_at, created_by)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            entry.issue_id.to_string(),
            entry.from_status.as_str(),
            entry.to_status.as_str(),
            entry.created_at.to_rfc3339(),
            entry.created_by.to_string(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All entries for an issue, newest first.
///
/// Same-timestamp entries fall back to reverse insert order. Returns an
/// empty list (not an error) for an issue with no history.
pub fn list_for_issue(conn: &Connection, issue_id: Uuid) -> Result<Vec<HistoryEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, issue_id, from_status, to_status, created_at, created_by
         FROM history WHERE issue_id = ?1 ORDER BY created_at DESC, id DESC",
    )?;

    let entries = stmt
        .query_map(params![issue_id.to_string()], |row| {
            let issue_id: String = row.get(1)?;
            let from: String = row.get(2)?;
            let to: String = row.get(3)?;
            let created_str: String = row.get(4)?;
            let created_by: String = row.get(5)?;
            Ok(HistoryEntry {
                id: row.get(0)?,
                issue_id: parse_uuid(&issue_id, "issue_id")?,
                from_status: parse_db(&from, "from_status")?,
                to_status: parse_db(&to, "to_status")?,
                created_at: parse_timestamp(&created_str, "created_at")?,
                created_by: parse_uuid(&created_by, "created_by")?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(entries)
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
