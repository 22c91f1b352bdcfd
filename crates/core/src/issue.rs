// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

//! Core issue types for the trackle issue tracker.
//!
//! This module contains the fundamental data types: Issue, IssueType,
//! Priority, Status, Comment, and the create/update inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Workflow status of an issue.
///
/// The declaration order is the canonical ordering used when listing
/// transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Newly created, not yet picked up.
    Open,
    /// Currently being worked on.
    InProgress,
    /// Resolved or otherwise finished.
    Closed,
    /// Reopened after having been closed.
    Reopened,
}

impl Status {
    /// Every status, in canonical order.
    pub const ALL: [Status; 4] = [
        Status::Open,
        Status::InProgress,
        Status::Closed,
        Status::Reopened,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in_progress",
            Status::Closed => "closed",
            Status::Reopened => "reopened",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Status::Open),
            "in_progress" => Ok(Status::InProgress),
            "closed" => Ok(Status::Closed),
            "reopened" => Ok(Status::Reopened),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Classification of issues by their nature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// Standard unit of work.
    Task,
    /// Defect or problem to fix.
    Bug,
    /// New capability.
    Feature,
    /// Enhancement of existing behavior.
    Improvement,
}

impl IssueType {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Task => "task",
            IssueType::Bug => "bug",
            IssueType::Feature => "feature",
            IssueType::Improvement => "improvement",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "task" => Ok(IssueType::Task),
            "bug" => Ok(IssueType::Bug),
            "feature" => Ok(IssueType::Feature),
            "improvement" => Ok(IssueType::Improvement),
            _ => Err(Error::InvalidIssueType(s.to_string())),
        }
    }
}

/// Urgency of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// The primary entity representing a tracked work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique identifier.
    pub id: Uuid,
    /// Short description of the work.
    pub title: String,
    /// Longer description providing context.
    pub description: String,
    /// Classification of the issue.
    pub issue_type: IssueType,
    /// Urgency of the issue.
    pub priority: Priority,
    /// Current workflow state.
    pub status: Status,
    /// User this issue belongs to.
    pub owner: Uuid,
    /// When the issue was created.
    pub created_at: DateTime<Utc>,
    /// When the issue was last modified.
    pub updated_at: DateTime<Utc>,
    /// User who created the issue.
    pub created_by: Uuid,
    /// User who last modified the issue.
    pub updated_by: Uuid,
}

impl Issue {
    /// Creates a new issue owned by `actor`, starting at [`Status::Open`].
    pub fn new(new: NewIssue, actor: Uuid, created_at: DateTime<Utc>) -> Self {
        Issue {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            issue_type: new.issue_type,
            priority: new.priority,
            status: Status::Open,
            owner: actor,
            created_at,
            updated_at: created_at,
            created_by: actor,
            updated_by: actor,
        }
    }
}

/// Input for creating an issue.
///
/// Field validation (required, length limits) is the caller's concern;
/// the lifecycle layer takes these values as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    pub issue_type: IssueType,
    pub priority: Priority,
}

/// Partial update for an issue.
///
/// Absent fields are left untouched; this is true patch semantics, so an
/// omitted field is distinguishable from an explicit value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssuePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<IssueType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl IssuePatch {
    /// Returns true if no field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.issue_type.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }
}

/// A comment attached to an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Database-assigned identifier.
    pub id: i64,
    /// The issue this comment belongs to.
    pub issue_id: Uuid,
    /// The comment text.
    pub body: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
    /// User who wrote the comment.
    pub created_by: Uuid,
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
