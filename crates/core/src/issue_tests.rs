// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::Utc;
use yare::parameterized;

// Status parsing tests
#[parameterized(
    open_lower = { "open", Status::Open },
    in_progress_lower = { "in_progress", Status::InProgress },
    closed_lower = { "closed", Status::Closed },
    reopened_lower = { "reopened", Status::Reopened },
    open_upper = { "OPEN", Status::Open },
    reopened_mixed = { "Reopened", Status::Reopened },
)]
fn status_from_str_valid(input: &str, expected: Status) {
    assert_eq!(input.parse::<Status>().unwrap(), expected);
}

#[parameterized(
    invalid = { "invalid" },
    empty = { "" },
    hyphenated = { "in-progress" },
)]
fn status_from_str_invalid(input: &str) {
    assert!(matches!(
        input.parse::<Status>(),
        Err(Error::InvalidStatus(_))
    ));
}

#[parameterized(
    open = { Status::Open, "open" },
    in_progress = { Status::InProgress, "in_progress" },
    closed = { Status::Closed, "closed" },
    reopened = { Status::Reopened, "reopened" },
)]
fn status_as_str(status: Status, expected: &str) {
    assert_eq!(status.as_str(), expected);
}

#[test]
fn status_all_covers_every_variant_in_order() {
    assert_eq!(
        Status::ALL,
        [
            Status::Open,
            Status::InProgress,
            Status::Closed,
            Status::Reopened
        ]
    );
}

#[test]
fn status_ordering_follows_declaration() {
    assert!(Status::Open < Status::InProgress);
    assert!(Status::InProgress < Status::Closed);
    assert!(Status::Closed < Status::Reopened);
}

// IssueType parsing tests
#[parameterized(
    task = { "task", IssueType::Task },
    bug = { "bug", IssueType::Bug },
    feature = { "feature", IssueType::Feature },
    improvement = { "improvement", IssueType::Improvement },
    bug_upper = { "Bug", IssueType::Bug },
)]
fn issue_type_from_str_valid(input: &str, expected: IssueType) {
    assert_eq!(input.parse::<IssueType>().unwrap(), expected);
}

#[parameterized(
    invalid = { "chore" },
    empty = { "" },
)]
fn issue_type_from_str_invalid(input: &str) {
    assert!(matches!(
        input.parse::<IssueType>(),
        Err(Error::InvalidIssueType(_))
    ));
}

// Priority parsing tests
#[parameterized(
    low = { "low", Priority::Low },
    medium = { "medium", Priority::Medium },
    high = { "high", Priority::High },
    critical = { "critical", Priority::Critical },
    high_upper = { "HIGH", Priority::High },
)]
fn priority_from_str_valid(input: &str, expected: Priority) {
    assert_eq!(input.parse::<Priority>().unwrap(), expected);
}

#[test]
fn priority_from_str_invalid() {
    assert!(matches!(
        "urgent".parse::<Priority>(),
        Err(Error::InvalidPriority(_))
    ));
}

#[test]
fn new_issue_starts_open_and_stamps_actor() {
    let actor = uuid::Uuid::new_v4();
    let now = Utc::now();
    let issue = Issue::new(
        NewIssue {
            title: "Fix login".to_string(),
            description: "Login fails on submit".to_string(),
            issue_type: IssueType::Bug,
            priority: Priority::High,
        },
        actor,
        now,
    );

    assert_eq!(issue.status, Status::Open);
    assert_eq!(issue.owner, actor);
    assert_eq!(issue.created_by, actor);
    assert_eq!(issue.updated_by, actor);
    assert_eq!(issue.created_at, now);
    assert_eq!(issue.updated_at, now);
}

#[test]
fn patch_is_empty() {
    assert!(IssuePatch::default().is_empty());

    let patch = IssuePatch {
        status: Some(Status::Closed),
        ..IssuePatch::default()
    };
    assert!(!patch.is_empty());
}

#[test]
fn patch_deserializes_absent_fields_as_none() {
    let patch: IssuePatch = serde_json::from_str(r#"{"title": "New title"}"#).unwrap();
    assert_eq!(patch.title.as_deref(), Some("New title"));
    assert!(patch.description.is_none());
    assert!(patch.status.is_none());
}

#[test]
fn status_serializes_snake_case() {
    let json = serde_json::to_string(&Status::InProgress).unwrap();
    assert_eq!(json, "\"in_progress\"");
}
