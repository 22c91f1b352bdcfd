// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn not_initialized_mentions_init_command() {
    let msg = Error::NotInitialized.to_string();
    assert!(msg.contains("trackle init"));
}

#[test]
fn invalid_id_includes_hint() {
    let msg = Error::InvalidId("abc".to_string()).to_string();
    assert!(msg.contains("invalid id 'abc'"));
    assert!(msg.contains("hint"));
}

#[test]
fn field_too_long_reports_counts() {
    let msg = Error::FieldTooLong {
        field: "Title",
        actual: 600,
        max: 500,
    }
    .to_string();
    assert_eq!(msg, "Title too long (600 chars, max 500)");
}

#[test]
fn core_errors_pass_through_unchanged() {
    let core = trackle_core::Error::IssueNotFound("abc".to_string());
    let expected = core.to_string();
    let wrapped: Error = core.into();
    assert_eq!(wrapped.to_string(), expected);
}

#[test]
fn nothing_to_edit_message() {
    let msg = Error::NothingToEdit.to_string();
    assert!(msg.contains("at least one field"));
}
