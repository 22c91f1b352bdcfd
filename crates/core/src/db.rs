// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

//! SQLite-backed storage for the issue tracker.
//!
//! The [`Database`] struct owns the connection and provides row-level
//! access for issues, users, and comments. Transition rule storage lives
//! in [`crate::workflow`] and the history ledger in [`crate::history`];
//! both operate on the same connection so the lifecycle layer can wrap
//! read-check-write sequences in one transaction.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::identity::{SYSTEM_USER_ID, SYSTEM_USER_NAME};
use crate::issue::{Comment, Issue, Status};
use crate::workflow::TransitionRule;

/// SQL schema for the issue tracker database.
pub const SCHEMA: &str = r#"
-- Internal bookkeeping (seed markers etc.)
CREATE TABLE IF NOT EXISTS meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

-- Known users, written by callers when they resolve an actor.
-- The core only reads names to decorate views.
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL
);

-- Core issue table
CREATE TABLE IF NOT EXISTS issues (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    type TEXT NOT NULL,
    priority TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'open',
    owner_id TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    created_by TEXT NOT NULL,
    updated_by TEXT NOT NULL,
    FOREIGN KEY (owner_id) REFERENCES users(id)
);

-- Workflow policy graph over the status enum.
-- The ordered pair is unique regardless of activity state.
CREATE TABLE IF NOT EXISTS transition_rules (
    id TEXT PRIMARY KEY,
    from_status TEXT NOT NULL,
    to_status TEXT NOT NULL,
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    created_by TEXT NOT NULL,
    updated_by TEXT NOT NULL,
    UNIQUE (from_status, to_status)
);

-- Append-only audit trail of accepted status changes.
-- No UPDATE or DELETE path exists in the API.
CREATE TABLE IF NOT EXISTS history (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    issue_id TEXT NOT NULL,
    from_status TEXT NOT NULL,
    to_status TEXT NOT NULL,
    created_at TEXT NOT NULL,
    created_by TEXT NOT NULL,
    FOREIGN KEY (issue_id) REFERENCES issues(id) ON DELETE CASCADE
);

-- Comments on issues
CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    issue_id TEXT NOT NULL,
    body TEXT NOT NULL,
    created_at TEXT NOT NULL,
    created_by TEXT NOT NULL,
    FOREIGN KEY (issue_id) REFERENCES issues(id) ON DELETE CASCADE
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_issues_status ON issues(status);
CREATE INDEX IF NOT EXISTS idx_issues_owner ON issues(owner_id);
CREATE INDEX IF NOT EXISTS idx_rules_from ON transition_rules(from_status);
CREATE INDEX IF NOT EXISTS idx_history_issue ON history(issue_id);
CREATE INDEX IF NOT EXISTS idx_comments_issue ON comments(issue_id);
"#;

/// Marker key set once the starter policy graph has been seeded.
const RULES_SEEDED_KEY: &str = "rules_seeded";

/// Parse a string value from the database, returning a rusqlite error on parse failure.
pub(crate) fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid value '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Parse an RFC3339 timestamp from the database.
pub(crate) fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

/// Parse a UUID from the database.
pub(crate) fn parse_uuid(
    value: &str,
    column: &str,
) -> std::result::Result<Uuid, rusqlite::Error> {
    Uuid::parse_str(value).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid uuid '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Run schema creation and migrations on a database connection.
///
/// This is the single migration path for every open. It applies the
/// canonical schema, registers the reserved system user, and seeds the
/// starter policy graph exactly once per database.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    ensure_system_user(conn)?;
    seed_default_rules(conn)?;
    Ok(())
}

fn ensure_system_user(conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO users (id, name, created_at) VALUES (?1, ?2, ?3)",
        params![
            SYSTEM_USER_ID.to_string(),
            SYSTEM_USER_NAME,
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Seed the canonical starter policy graph on first boot.
///
/// Gated by a meta marker rather than rule-table emptiness, so deleting
/// every rule later is a supported way to disable policy enforcement;
/// the "no rules = allow everything" fallback then persists across opens.
fn seed_default_rules(conn: &Connection) -> Result<()> {
    let seeded: Option<String> = conn
        .query_row(
            "SELECT value FROM meta WHERE key = ?1",
            params![RULES_SEEDED_KEY],
            |row| row.get(0),
        )
        .optional()?;

    if seeded.is_some() {
        return Ok(());
    }

    let defaults = [
        (Status::Open, Status::InProgress),
        (Status::InProgress, Status::Closed),
        (Status::Closed, Status::Reopened),
        (Status::Reopened, Status::InProgress),
    ];

    let now = Utc::now();
    for (from, to) in defaults {
        let rule = TransitionRule::new(from, to, SYSTEM_USER_ID, now);
        conn.execute(
            "INSERT OR IGNORE INTO transition_rules
             (id, from_status, to_status, is_active, created_at, updated_at, created_by, updated_by)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                rule.id.to_string(),
                rule.from_status.as_str(),
                rule.to_status.as_str(),
                rule.is_active,
                rule.created_at.to_rfc3339(),
                rule.updated_at.to_rfc3339(),
                rule.created_by.to_string(),
                rule.updated_by.to_string(),
            ],
        )?;
    }

    conn.execute(
        "INSERT INTO meta (key, value) VALUES (?1, ?2)",
        params![RULES_SEEDED_KEY, Utc::now().to_rfc3339()],
    )?;

    tracing::info!(count = defaults.len(), "seeded default workflow rules");
    Ok(())
}

/// SQLite database connection with issue tracker storage operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // Enable foreign keys and WAL mode for concurrency
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Look up or register a user by display name, returning its id.
    pub fn ensure_user(&self, name: &str) -> Result<Uuid> {
        let existing: Option<String> = self
            .conn
            .query_row(
                "SELECT id FROM users WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;

        if let Some(id) = existing {
            return Ok(parse_uuid(&id, "id")?);
        }

        let id = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO users (id, name, created_at) VALUES (?1, ?2, ?3)",
            params![id.to_string(), name, Utc::now().to_rfc3339()],
        )?;
        Ok(id)
    }

    /// Batch lookup of display names for the given user ids.
    ///
    /// Ids with no user row are simply absent from the result; callers
    /// fall back to a placeholder.
    pub fn user_names(
        &self,
        ids: &[Uuid],
    ) -> Result<std::collections::HashMap<Uuid, String>> {
        let mut names = std::collections::HashMap::new();
        if ids.is_empty() {
            return Ok(names);
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("SELECT id, name FROM users WHERE id IN ({placeholders})");
        let id_strings: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        let params_refs: Vec<&dyn rusqlite::ToSql> = id_strings
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_refs.as_slice(), |row| {
            let id: String = row.get(0)?;
            let name: String = row.get(1)?;
            Ok((parse_uuid(&id, "id")?, name))
        })?;

        for row in rows {
            let (id, name) = row?;
            names.insert(id, name);
        }
        Ok(names)
    }

    /// Insert a new issue.
    pub fn insert_issue(&self, issue: &Issue) -> Result<()> {
        insert_issue(&self.conn, issue)
    }

    /// Get an issue by id.
    pub fn get_issue(&self, id: Uuid) -> Result<Issue> {
        get_issue(&self.conn, id)
    }

    /// Get all issues, newest-created first.
    pub fn list_issues(&self) -> Result<Vec<Issue>> {
        self.query_issues(
            "SELECT id, title, description, type, priority, status, owner_id,
                    created_at, updated_at, created_by, updated_by
             FROM issues ORDER BY created_at DESC, rowid DESC",
            [],
        )
    }

    /// Get the issues owned by a user, newest-created first.
    pub fn list_issues_for_owner(&self, owner: Uuid) -> Result<Vec<Issue>> {
        self.query_issues(
            "SELECT id, title, description, type, priority, status, owner_id,
                    created_at, updated_at, created_by, updated_by
             FROM issues WHERE owner_id = ?1 ORDER BY created_at DESC, rowid DESC",
            params![owner.to_string()],
        )
    }

    fn query_issues<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<Issue>> {
        let mut stmt = self.conn.prepare(sql)?;
        let issues = stmt
            .query_map(params, issue_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(issues)
    }

    /// Add a comment to an issue.
    pub fn add_comment(
        &self,
        issue_id: Uuid,
        body: &str,
        author: Uuid,
        created_at: DateTime<Utc>,
    ) -> Result<Comment> {
        self.conn.execute(
            "INSERT INTO comments (issue_id, body, created_at, created_by)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                issue_id.to_string(),
                body,
                created_at.to_rfc3339(),
                author.to_string(),
            ],
        )?;
        Ok(Comment {
            id: self.conn.last_insert_rowid(),
            issue_id,
            body: body.to_string(),
            created_at,
            created_by: author,
        })
    }

    /// Get all comments for an issue, oldest first.
    pub fn get_comments(&self, issue_id: Uuid) -> Result<Vec<Comment>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, issue_id, body, created_at, created_by
             FROM comments WHERE issue_id = ?1 ORDER BY created_at, id",
        )?;

        let comments = stmt
            .query_map(params![issue_id.to_string()], |row| {
                let issue_id: String = row.get(1)?;
                let created_str: String = row.get(3)?;
                let created_by: String = row.get(4)?;
                Ok(Comment {
                    id: row.get(0)?,
                    issue_id: parse_uuid(&issue_id, "issue_id")?,
                    body: row.get(2)?,
                    created_at: parse_timestamp(&created_str, "created_at")?,
                    created_by: parse_uuid(&created_by, "created_by")?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(comments)
    }
}

/// Map one issues row to an [`Issue`].
fn issue_from_row(row: &Row<'_>) -> std::result::Result<Issue, rusqlite::Error> {
    let id: String = row.get(0)?;
    let type_str: String = row.get(3)?;
    let priority_str: String = row.get(4)?;
    let status_str: String = row.get(5)?;
    let owner: String = row.get(6)?;
    let created_str: String = row.get(7)?;
    let updated_str: String = row.get(8)?;
    let created_by: String = row.get(9)?;
    let updated_by: String = row.get(10)?;

    Ok(Issue {
        id: parse_uuid(&id, "id")?,
        title: row.get(1)?,
        description: row.get(2)?,
        issue_type: parse_db(&type_str, "type")?,
        priority: parse_db(&priority_str, "priority")?,
        status: parse_db(&status_str, "status")?,
        owner: parse_uuid(&owner, "owner_id")?,
        created_at: parse_timestamp(&created_str, "created_at")?,
        updated_at: parse_timestamp(&updated_str, "updated_at")?,
        created_by: parse_uuid(&created_by, "created_by")?,
        updated_by: parse_uuid(&updated_by, "updated_by")?,
    })
}

/// Insert an issue through any connection (plain or transaction).
pub(crate) fn insert_issue(conn: &Connection, issue: &Issue) -> Result<()> {
    conn.execute(
        "INSERT INTO issues (id, title, description, type, priority, status,
         owner_id, created_at, updated_at, created_by, updated_by)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            issue.id.to_string(),
            issue.title,
            issue.description,
            issue.issue_type.as_str(),
            issue.priority.as_str(),
            issue.status.as_str(),
            issue.owner.to_string(),
            issue.created_at.to_rfc3339(),
            issue.updated_at.to_rfc3339(),
            issue.created_by.to_string(),
            issue.updated_by.to_string(),
        ],
    )?;
    Ok(())
}

/// Fetch an issue through any connection (plain or transaction).
pub(crate) fn get_issue(conn: &Connection, id: Uuid) -> Result<Issue> {
    let issue = conn
        .query_row(
            "SELECT id, title, description, type, priority, status, owner_id,
                    created_at, updated_at, created_by, updated_by
             FROM issues WHERE id = ?1",
            params![id.to_string()],
            issue_from_row,
        )
        .optional()?;

    issue.ok_or_else(|| Error::IssueNotFound(id.to_string()))
}

/// Write back every mutable field of an issue.
///
/// Used by the lifecycle layer inside its update transaction; the row is
/// known to exist at that point.
pub(crate) fn update_issue(conn: &Connection, issue: &Issue) -> Result<()> {
    let affected = conn.execute(
        "UPDATE issues SET title = ?1, description = ?2, type = ?3, priority = ?4,
         status = ?5, updated_at = ?6, updated_by = ?7 WHERE id = ?8",
        params![
            issue.title,
            issue.description,
            issue.issue_type.as_str(),
            issue.priority.as_str(),
            issue.status.as_str(),
            issue.updated_at.to_rfc3339(),
            issue.updated_by.to_string(),
            issue.id.to_string(),
        ],
    )?;

    if affected == 0 {
        return Err(Error::IssueNotFound(issue.id.to_string()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
