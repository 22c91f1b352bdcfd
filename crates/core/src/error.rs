// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

//! Error types for trackle-core operations.

use thiserror::Error;

/// All possible errors that can occur in trackle-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("transition rule not found: {0}")]
    RuleNotFound(String),

    #[error("transition rule already exists: {from} -> {to}")]
    DuplicateRule { from: String, to: String },

    #[error("transition not allowed by workflow: cannot go from {from} to {to}")]
    TransitionNotAllowed { from: String, to: String },

    #[error(
        "invalid status: '{0}'\n  hint: valid statuses are: open, in_progress, closed, reopened"
    )]
    InvalidStatus(String),

    #[error("invalid issue type: '{0}'\n  hint: valid types are: task, bug, feature, improvement")]
    InvalidIssueType(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: low, medium, high, critical")]
    InvalidPriority(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for trackle-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
