// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

//! trackle-core: workflow-gated issue tracking
//!
//! This crate provides the core of the trackle issue tracker: the data
//! model, the transition rule store and workflow engine, the issue
//! lifecycle operations, and the append-only status-change ledger, all
//! backed by SQLite.

pub mod db;
pub mod directory;
pub mod error;
pub mod history;
pub mod identity;
pub mod issue;
pub mod jsonl;
pub mod lifecycle;
pub mod workflow;

pub use db::Database;
pub use directory::{UserDirectory, UNKNOWN_USER};
pub use error::{Error, Result};
pub use history::HistoryEntry;
pub use identity::Actor;
pub use issue::{Comment, Issue, IssuePatch, IssueType, NewIssue, Priority, Status};
pub use lifecycle::{CommentView, HistoryView, ImportReport, ImportRow, IssueView, RowError};
pub use workflow::TransitionRule;
