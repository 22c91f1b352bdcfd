// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

use thiserror::Error;

/// All possible errors surfaced by the trackle CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'trackle init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("invalid id '{0}'\n  hint: ids are UUIDs, copy one from 'trackle list'")]
    InvalidId(String),

    #[error("nothing to edit: provide at least one field to change")]
    NothingToEdit,

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] trackle_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for trackle CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
