// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

//! Workflow transition rules and the decision engine over them.
//!
//! A [`TransitionRule`] grants permission for one ordered status pair;
//! rules can be deactivated without being deleted. The engine functions
//! ([`is_allowed`], [`allowed_targets`]) are pure reads over whatever
//! connection they are given, so the lifecycle layer can evaluate them
//! inside its own update transaction.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::{parse_db, parse_timestamp, parse_uuid, Database};
use crate::error::{Error, Result};
use crate::identity::Actor;
use crate::issue::Status;

/// A configured, independently-activatable permission for moving from
/// one status to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionRule {
    /// Unique identifier.
    pub id: Uuid,
    /// Status the transition starts from.
    pub from_status: Status,
    /// Status the transition moves to.
    pub to_status: Status,
    /// Inactive rules stay configured but grant nothing.
    pub is_active: bool,
    /// When the rule was created.
    pub created_at: DateTime<Utc>,
    /// When the rule was last modified (creation or toggle).
    pub updated_at: DateTime<Utc>,
    /// User who created the rule.
    pub created_by: Uuid,
    /// User who last modified the rule.
    pub updated_by: Uuid,
}

impl TransitionRule {
    /// Creates a new active rule.
    pub fn new(from: Status, to: Status, created_by: Uuid, created_at: DateTime<Utc>) -> Self {
        TransitionRule {
            id: Uuid::new_v4(),
            from_status: from,
            to_status: to,
            is_active: true,
            created_at,
            updated_at: created_at,
            created_by,
            updated_by: created_by,
        }
    }
}

/// Check whether a status change is allowed by the current rule set.
///
/// Decision order:
/// 1. Zero configured rules allow everything (a system with no policy
///    imposes no restriction).
/// 2. Re-saving without a real status change is always permitted.
/// 3. Otherwise an active rule must match the ordered pair exactly.
pub fn is_allowed(conn: &Connection, from: Status, to: Status) -> Result<bool> {
    if count_rules(conn)? == 0 {
        return Ok(true);
    }

    if from == to {
        return Ok(true);
    }

    let matched: i64 = conn.query_row(
        "SELECT COUNT(*) FROM transition_rules
         WHERE from_status = ?1 AND to_status = ?2 AND is_active = 1",
        params![from.as_str(), to.as_str()],
        |row| row.get(0),
    )?;

    let allowed = matched > 0;
    if !allowed {
        tracing::debug!(%from, %to, "transition denied by workflow");
    }
    Ok(allowed)
}

/// Statuses reachable from `from` under the current rule set.
///
/// With zero configured rules every status is reachable. Otherwise the
/// targets of matching active rules, in canonical status order, with the
/// current status appended when not already present (staying put is
/// always a valid "transition").
pub fn allowed_targets(conn: &Connection, from: Status) -> Result<Vec<Status>> {
    if count_rules(conn)? == 0 {
        return Ok(Status::ALL.to_vec());
    }

    let mut stmt = conn.prepare(
        "SELECT to_status FROM transition_rules
         WHERE from_status = ?1 AND is_active = 1",
    )?;
    let mut targets = stmt
        .query_map(params![from.as_str()], |row| {
            let status: String = row.get(0)?;
            parse_db::<Status>(&status, "to_status")
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    targets.sort();
    targets.dedup();
    if !targets.contains(&from) {
        targets.push(from);
    }
    Ok(targets)
}

fn count_rules(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM transition_rules", [], |row| row.get(0))?;
    Ok(count)
}

/// All configured rules, active or not, ordered by `(from, to)` in
/// canonical status order.
pub fn list_rules(db: &Database) -> Result<Vec<TransitionRule>> {
    let mut stmt = db.conn.prepare(
        "SELECT id, from_status, to_status, is_active, created_at, updated_at,
                created_by, updated_by
         FROM transition_rules",
    )?;
    let mut rules = stmt
        .query_map([], rule_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    // Statuses are stored as text; sort by enum order, not collation.
    rules.sort_by_key(|r| (r.from_status, r.to_status));
    Ok(rules)
}

/// Get a rule by id.
pub fn get_rule(db: &Database, id: Uuid) -> Result<TransitionRule> {
    let rule = db
        .conn
        .query_row(
            "SELECT id, from_status, to_status, is_active, created_at, updated_at,
                    created_by, updated_by
             FROM transition_rules WHERE id = ?1",
            params![id.to_string()],
            rule_from_row,
        )
        .optional()?;

    rule.ok_or_else(|| Error::RuleNotFound(id.to_string()))
}

/// Create a new active rule for the ordered pair `(from, to)`.
///
/// The duplicate check and insert run in one immediate transaction, so
/// two concurrent creates of the same pair cannot both succeed. The pair
/// is rejected even when the existing rule is inactive; directionality
/// matters, so the reverse pair is a separate rule.
pub fn create_rule(
    db: &mut Database,
    from: Status,
    to: Status,
    actor: &Actor,
) -> Result<TransitionRule> {
    let tx = db
        .conn
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let existing: i64 = tx.query_row(
        "SELECT COUNT(*) FROM transition_rules WHERE from_status = ?1 AND to_status = ?2",
        params![from.as_str(), to.as_str()],
        |row| row.get(0),
    )?;
    if existing > 0 {
        return Err(Error::DuplicateRule {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    let rule = TransitionRule::new(from, to, actor.id, Utc::now());
    tx.execute(
        "INSERT INTO transition_rules
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
    tx.commit()?;

    tracing::info!(rule = %rule.id, %from, %to, "workflow rule created");
    Ok(rule)
}

/// Permanently remove a rule. Returns whether one existed.
pub fn delete_rule(db: &Database, id: Uuid) -> Result<bool> {
    let affected = db.conn.execute(
        "DELETE FROM transition_rules WHERE id = ?1",
        params![id.to_string()],
    )?;

    if affected > 0 {
        tracing::info!(rule = %id, "workflow rule deleted");
    }
    Ok(affected > 0)
}

/// Flip a rule's active flag in place, refreshing its timestamp.
/// Returns whether the rule existed.
pub fn toggle_rule(db: &Database, id: Uuid) -> Result<bool> {
    let affected = db.conn.execute(
        "UPDATE transition_rules SET is_active = 1 - is_active, updated_at = ?1
         WHERE id = ?2",
        params![Utc::now().to_rfc3339(), id.to_string()],
    )?;

    if affected > 0 {
        tracing::info!(rule = %id, "workflow rule toggled");
    }
    Ok(affected > 0)
}

fn rule_from_row(row: &Row<'_>) -> std::result::Result<TransitionRule, rusqlite::Error> {
    let id: String = row.get(0)?;
    let from: String = row.get(1)?;
    let to: String = row.get(2)?;
    let created_str: String = row.get(4)?;
    let updated_str: String = row.get(5)?;
    let created_by: String = row.get(6)?;
    let updated_by: String = row.get(7)?;

    Ok(TransitionRule {
        id: parse_uuid(&id, "id")?,
        from_status: parse_db(&from, "from_status")?,
        to_status: parse_db(&to, "to_status")?,
        is_active: row.get(3)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
        updated_at: parse_timestamp(&updated_str, "updated_at")?,
        created_by: parse_uuid(&created_by, "created_by")?,
        updated_by: parse_uuid(&updated_by, "updated_by")?,
    })
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
