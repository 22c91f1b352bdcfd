// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

//! Issue lifecycle operations.
//!
//! This is the only writer of issue status and the only producer of
//! history entries. A status-changing update consults the workflow
//! engine and, when accepted, applies the change and appends the audit
//! record in the same transaction; a denied transition aborts the whole
//! patch, including non-status fields.

use chrono::{DateTime, Utc};
use rusqlite::TransactionBehavior;
use serde::Serialize;
use uuid::Uuid;

use crate::db::{self, Database};
use crate::directory::{name_or_unknown, UserDirectory};
use crate::error::{Error, Result};
use crate::history::{self, HistoryEntry};
use crate::identity::Actor;
use crate::issue::{Comment, Issue, IssuePatch, IssueType, NewIssue, Priority, Status};
use crate::workflow;

/// An issue decorated with resolved display names for its audit ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub issue_type: IssueType,
    pub priority: Priority,
    pub status: Status,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Display name of the creating user ("Unknown" when unresolvable).
    pub created_by: String,
    /// Display name of the last updating user ("Unknown" when unresolvable).
    pub updated_by: String,
}

/// A history entry decorated with the actor's display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryView {
    pub id: i64,
    pub issue_id: Uuid,
    pub from_status: Status,
    pub to_status: Status,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

/// A comment decorated with the author's display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentView {
    pub id: i64,
    pub issue_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

/// Create a new issue. Always starts at [`Status::Open`]; no transition
/// check applies to creation. Field validation is the caller's concern.
pub fn create_issue(db: &Database, new: NewIssue, actor: &Actor) -> Result<IssueView> {
    let issue = Issue::new(new, actor.id, Utc::now());
    db.insert_issue(&issue)?;
    tracing::info!(issue = %issue.id, title = %issue.title, "issue created");
    issue_view(db, issue)
}

/// Apply a partial update to an issue.
///
/// The read, the workflow check, the field writes, and the history
/// append run in one immediate transaction: either the whole patch
/// persists or none of it does. A patched status equal to the current
/// one is a no-op for status (no history entry) but the rest of the
/// patch still applies. `updated_at`/`updated_by` are always restamped.
pub fn update_issue(
    db: &mut Database,
    id: Uuid,
    patch: &IssuePatch,
    actor: &Actor,
) -> Result<IssueView> {
    let now = Utc::now();
    let tx = db
        .conn
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let mut issue = db::get_issue(&tx, id)?;
    let old_status = issue.status;

    if let Some(title) = &patch.title {
        issue.title = title.clone();
    }
    if let Some(description) = &patch.description {
        issue.description = description.clone();
    }
    if let Some(issue_type) = patch.issue_type {
        issue.issue_type = issue_type;
    }
    if let Some(priority) = patch.priority {
        issue.priority = priority;
    }

    if let Some(new_status) = patch.status {
        if new_status != old_status {
            if !workflow::is_allowed(&tx, old_status, new_status)? {
                // Dropping the transaction rolls back; nothing persists.
                return Err(Error::TransitionNotAllowed {
                    from: old_status.to_string(),
                    to: new_status.to_string(),
                });
            }

            issue.status = new_status;
            let entry = HistoryEntry::new(id, old_status, new_status, actor.id, now);
            history::append(&tx, &entry)?;
            tracing::info!(issue = %id, from = %old_status, to = %new_status, "status changed");
        }
    }

    issue.updated_at = now;
    issue.updated_by = actor.id;
    db::update_issue(&tx, &issue)?;
    tx.commit()?;

    issue_view(db, issue)
}

/// Get one issue as a decorated view.
pub fn get_issue(db: &Database, id: Uuid) -> Result<IssueView> {
    let issue = db.get_issue(id)?;
    issue_view(db, issue)
}

/// All issues, newest-created first.
pub fn list_issues(db: &Database) -> Result<Vec<IssueView>> {
    issue_views(db, db.list_issues()?)
}

/// Issues owned by a user, newest-created first.
pub fn list_issues_for_owner(db: &Database, owner: Uuid) -> Result<Vec<IssueView>> {
    issue_views(db, db.list_issues_for_owner(owner)?)
}

/// Statuses the issue may move to under the current rule set.
pub fn allowed_transitions_for(db: &Database, id: Uuid) -> Result<Vec<Status>> {
    let issue = db.get_issue(id)?;
    workflow::allowed_targets(&db.conn, issue.status)
}

/// Status-change history for an issue, newest first.
pub fn history_for_issue(db: &Database, id: Uuid) -> Result<Vec<HistoryView>> {
    let entries = history::list_for_issue(&db.conn, id)?;
    let actor_ids: Vec<Uuid> = entries.iter().map(|e| e.created_by).collect();
    let names = db.display_names(&dedup(actor_ids))?;

    Ok(entries
        .into_iter()
        .map(|e| HistoryView {
            id: e.id,
            issue_id: e.issue_id,
            from_status: e.from_status,
            to_status: e.to_status,
            created_at: e.created_at,
            created_by: name_or_unknown(&names, e.created_by),
        })
        .collect())
}

/// Add a comment to an existing issue.
pub fn add_comment(db: &Database, issue_id: Uuid, body: &str, actor: &Actor) -> Result<CommentView> {
    // Existence check keeps NotFound ahead of the foreign-key error.
    let _ = db.get_issue(issue_id)?;
    let comment = db.add_comment(issue_id, body, actor.id, Utc::now())?;
    comment_views(db, vec![comment]).map(|mut v| v.remove(0))
}

/// All comments on an issue, oldest first.
pub fn comments_for_issue(db: &Database, issue_id: Uuid) -> Result<Vec<CommentView>> {
    comment_views(db, db.get_comments(issue_id)?)
}

/// One raw bulk-import row; enum fields arrive as text and are validated
/// per row, not up front.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ImportRow {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub issue_type: String,
    #[serde(default)]
    pub priority: String,
}

/// Validation or storage failure for one import row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowError {
    /// 1-based row number in the source.
    pub row: usize,
    /// The row's title, or a placeholder when it had none.
    pub title: String,
    pub errors: Vec<String>,
}

/// Outcome of a bulk create: per-row successes and failures, never a
/// whole-batch rollback.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub created: Vec<IssueView>,
    pub errors: Vec<RowError>,
}

/// Create issues from pre-parsed rows, one row at a time through the
/// same path as [`create_issue`].
///
/// Each row is validated and inserted independently; a failing row is
/// reported and does not affect its neighbours. Rows carry their source
/// row numbers so callers can merge in their own parse failures.
pub fn bulk_create(
    db: &Database,
    rows: &[(usize, ImportRow)],
    actor: &Actor,
) -> Result<ImportReport> {
    let mut report = ImportReport {
        total: rows.len(),
        ..ImportReport::default()
    };

    for (row_number, row) in rows {
        match validate_row(row) {
            Ok(new) => match create_issue(db, new, actor) {
                Ok(view) => {
                    report.created.push(view);
                    report.succeeded += 1;
                }
                Err(e) => {
                    report.errors.push(RowError {
                        row: *row_number,
                        title: row.title.clone(),
                        errors: vec![format!("database error: {e}")],
                    });
                    report.failed += 1;
                }
            },
            Err(errors) => {
                report.errors.push(RowError {
                    row: *row_number,
                    title: if row.title.trim().is_empty() {
                        format!("row {row_number}")
                    } else {
                        row.title.clone()
                    },
                    errors,
                });
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

fn validate_row(row: &ImportRow) -> std::result::Result<NewIssue, Vec<String>> {
    let mut errors = Vec::new();

    let title = row.title.trim();
    if title.is_empty() {
        errors.push("title is required".to_string());
    }

    let description = row.description.trim();
    if description.is_empty() {
        errors.push("description is required".to_string());
    }

    let issue_type = if row.issue_type.trim().is_empty() {
        errors.push("type is required (task, bug, feature, or improvement)".to_string());
        None
    } else {
        match row.issue_type.trim().parse::<IssueType>() {
            Ok(t) => Some(t),
            Err(_) => {
                errors.push(format!(
                    "invalid type '{}': must be task, bug, feature, or improvement",
                    row.issue_type.trim()
                ));
                None
            }
        }
    };

    let priority = if row.priority.trim().is_empty() {
        errors.push("priority is required (low, medium, high, or critical)".to_string());
        None
    } else {
        match row.priority.trim().parse::<Priority>() {
            Ok(p) => Some(p),
            Err(_) => {
                errors.push(format!(
                    "invalid priority '{}': must be low, medium, high, or critical",
                    row.priority.trim()
                ));
                None
            }
        }
    };

    match (issue_type, priority) {
        (Some(issue_type), Some(priority)) if errors.is_empty() => Ok(NewIssue {
            title: title.to_string(),
            description: description.to_string(),
            issue_type,
            priority,
        }),
        _ => Err(errors),
    }
}

fn issue_view(db: &Database, issue: Issue) -> Result<IssueView> {
    issue_views(db, vec![issue]).map(|mut v| v.remove(0))
}

fn issue_views(db: &Database, issues: Vec<Issue>) -> Result<Vec<IssueView>> {
    let mut actor_ids = Vec::new();
    for issue in &issues {
        actor_ids.push(issue.created_by);
        actor_ids.push(issue.updated_by);
    }
    let names = db.display_names(&dedup(actor_ids))?;

    Ok(issues
        .into_iter()
        .map(|i| IssueView {
            id: i.id,
            title: i.title,
            description: i.description,
            issue_type: i.issue_type,
            priority: i.priority,
            status: i.status,
            owner: i.owner,
            created_at: i.created_at,
            updated_at: i.updated_at,
            created_by: name_or_unknown(&names, i.created_by),
            updated_by: name_or_unknown(&names, i.updated_by),
        })
        .collect())
}

fn comment_views(db: &Database, comments: Vec<Comment>) -> Result<Vec<CommentView>> {
    let actor_ids: Vec<Uuid> = comments.iter().map(|c| c.created_by).collect();
    let names = db.display_names(&dedup(actor_ids))?;

    Ok(comments
        .into_iter()
        .map(|c| CommentView {
            id: c.id,
            issue_id: c.issue_id,
            body: c.body,
            created_at: c.created_at,
            created_by: name_or_unknown(&names, c.created_by),
        })
        .collect())
}

fn dedup(mut ids: Vec<Uuid>) -> Vec<Uuid> {
    ids.sort();
    ids.dedup();
    ids
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
