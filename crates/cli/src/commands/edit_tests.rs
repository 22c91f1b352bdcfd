// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

#![allow(clippy::unwrap_used)]

use super::run_impl;
use crate::commands::testing::TestContext;
use crate::error::Error;
use trackle_core::{lifecycle, Priority, Status};

#[test]
fn updates_title_only() {
    let mut ctx = TestContext::new();
    let issue = ctx.create_issue("Original");

    let view = run_impl(
        &mut ctx.db,
        &ctx.actor,
        &issue.id.to_string(),
        Some("Updated".to_string()),
        None,
        None,
        None,
        None,
    )
    .unwrap();

    assert_eq!(view.title, "Updated");
    assert_eq!(view.status, Status::Open);
    assert_eq!(view.description, "details");
}

#[test]
fn empty_patch_rejected() {
    let mut ctx = TestContext::new();
    let issue = ctx.create_issue("Original");

    let result = run_impl(
        &mut ctx.db,
        &ctx.actor,
        &issue.id.to_string(),
        None,
        None,
        None,
        None,
        None,
    );
    assert!(matches!(result, Err(Error::NothingToEdit)));
}

#[test]
fn malformed_id_rejected_before_touching_db() {
    let mut ctx = TestContext::new();

    let result = run_impl(
        &mut ctx.db,
        &ctx.actor,
        "nonsense",
        Some("Updated".to_string()),
        None,
        None,
        None,
        None,
    );
    assert!(matches!(result, Err(Error::InvalidId(_))));
}

#[test]
fn allowed_status_change_recorded_in_history() {
    let mut ctx = TestContext::new();
    let issue = ctx.create_issue("Original");

    let view = run_impl(
        &mut ctx.db,
        &ctx.actor,
        &issue.id.to_string(),
        None,
        None,
        None,
        None,
        Some("in_progress".to_string()),
    )
    .unwrap();

    assert_eq!(view.status, Status::InProgress);
    let history = lifecycle::history_for_issue(&ctx.db, issue.id).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].from_status, Status::Open);
    assert_eq!(history[0].to_status, Status::InProgress);
}

#[test]
fn denied_status_change_aborts_whole_edit() {
    let mut ctx = TestContext::new();
    let issue = ctx.create_issue("Original");

    // The seeded policy has no open -> closed rule.
    let result = run_impl(
        &mut ctx.db,
        &ctx.actor,
        &issue.id.to_string(),
        Some("Updated".to_string()),
        None,
        None,
        Some("critical".to_string()),
        Some("closed".to_string()),
    );
    assert!(matches!(
        result,
        Err(Error::Core(
            trackle_core::Error::TransitionNotAllowed { .. }
        ))
    ));

    let unchanged = lifecycle::get_issue(&ctx.db, issue.id).unwrap();
    assert_eq!(unchanged.title, "Original");
    assert_eq!(unchanged.priority, Priority::Medium);
    assert_eq!(unchanged.status, Status::Open);
}

#[test]
fn bad_status_string_rejected() {
    let mut ctx = TestContext::new();
    let issue = ctx.create_issue("Original");

    let result = run_impl(
        &mut ctx.db,
        &ctx.actor,
        &issue.id.to_string(),
        None,
        None,
        None,
        None,
        Some("done".to_string()),
    );
    assert!(matches!(
        result,
        Err(Error::Core(trackle_core::Error::InvalidStatus(_)))
    ));
}
