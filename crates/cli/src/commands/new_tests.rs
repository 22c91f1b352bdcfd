// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

#![allow(clippy::unwrap_used)]

use super::run_impl;
use crate::commands::testing::TestContext;
use crate::error::Error;
use trackle_core::{IssueType, Priority, Status};

#[test]
fn creates_issue_with_parsed_enums() {
    let ctx = TestContext::new();

    let view = run_impl(
        &ctx.db,
        &ctx.actor,
        "Fix login",
        "Users cannot log in",
        "bug",
        "critical",
    )
    .unwrap();

    assert_eq!(view.title, "Fix login");
    assert_eq!(view.issue_type, IssueType::Bug);
    assert_eq!(view.priority, Priority::Critical);
    assert_eq!(view.status, Status::Open);
    assert_eq!(view.created_by, "tester");
}

#[test]
fn trims_title_and_description() {
    let ctx = TestContext::new();

    let view = run_impl(
        &ctx.db,
        &ctx.actor,
        "  Fix login  ",
        " details \n",
        "task",
        "low",
    )
    .unwrap();

    assert_eq!(view.title, "Fix login");
    assert_eq!(view.description, "details");
}

#[test]
fn blank_title_rejected() {
    let ctx = TestContext::new();

    let result = run_impl(&ctx.db, &ctx.actor, "  ", "details", "task", "low");
    assert!(matches!(result, Err(Error::FieldEmpty { field: "Title" })));
}

#[test]
fn unknown_type_rejected() {
    let ctx = TestContext::new();

    let result = run_impl(&ctx.db, &ctx.actor, "Title", "details", "epic", "low");
    assert!(matches!(
        result,
        Err(Error::Core(trackle_core::Error::InvalidIssueType(_)))
    ));
}

#[test]
fn unknown_priority_rejected() {
    let ctx = TestContext::new();

    let result = run_impl(&ctx.db, &ctx.actor, "Title", "details", "task", "urgent");
    assert!(matches!(
        result,
        Err(Error::Core(trackle_core::Error::InvalidPriority(_)))
    ));
}
