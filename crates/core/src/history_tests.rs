// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::Duration;

use crate::db::Database;
use crate::issue::{Issue, IssueType, NewIssue, Priority};

fn seed_issue(db: &Database) -> Issue {
    let actor = db.ensure_user("tester").unwrap();
    let issue = Issue::new(
        NewIssue {
            title: "Tracked issue".to_string(),
            description: "…".to_string(),
            issue_type: IssueType::Task,
            priority: Priority::Low,
        },
        actor,
        Utc::now(),
    );
    db.insert_issue(&issue).unwrap();
    issue
}

#[test]
fn append_assigns_ids() {
    let db = Database::open_in_memory().unwrap();
    let issue = seed_issue(&db);

    let entry = HistoryEntry::new(
        issue.id,
        Status::Open,
        Status::InProgress,
        issue.owner,
        Utc::now(),
    );
    let first = append(&db.conn, &entry).unwrap();
    let second = append(&db.conn, &entry).unwrap();
    assert!(second > first);
}

#[test]
fn list_for_issue_newest_first() {
    let db = Database::open_in_memory().unwrap();
    let issue = seed_issue(&db);
    let base = Utc::now();

    let older = HistoryEntry::new(issue.id, Status::Open, Status::InProgress, issue.owner, base);
    let newer = HistoryEntry::new(
        issue.id,
        Status::InProgress,
        Status::Closed,
        issue.owner,
        base + Duration::seconds(5),
    );
    append(&db.conn, &older).unwrap();
    append(&db.conn, &newer).unwrap();

    let entries = list_for_issue(&db.conn, issue.id).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].to_status, Status::Closed);
    assert_eq!(entries[1].to_status, Status::InProgress);
}

#[test]
fn same_timestamp_falls_back_to_reverse_insert_order() {
    let db = Database::open_in_memory().unwrap();
    let issue = seed_issue(&db);
    let now = Utc::now();

    let first = HistoryEntry::new(issue.id, Status::Open, Status::InProgress, issue.owner, now);
    let second = HistoryEntry::new(issue.id, Status::InProgress, Status::Closed, issue.owner, now);
    append(&db.conn, &first).unwrap();
    append(&db.conn, &second).unwrap();

    let entries = list_for_issue(&db.conn, issue.id).unwrap();
    assert_eq!(entries[0].to_status, Status::Closed);
}

#[test]
fn empty_history_is_not_an_error() {
    let db = Database::open_in_memory().unwrap();
    let issue = seed_issue(&db);
    assert!(list_for_issue(&db.conn, issue.id).unwrap().is_empty());
}

#[test]
fn entries_scoped_per_issue() {
    let db = Database::open_in_memory().unwrap();
    let one = seed_issue(&db);
    let two = seed_issue(&db);

    let entry = HistoryEntry::new(one.id, Status::Open, Status::InProgress, one.owner, Utc::now());
    append(&db.conn, &entry).unwrap();

    assert_eq!(list_for_issue(&db.conn, one.id).unwrap().len(), 1);
    assert!(list_for_issue(&db.conn, two.id).unwrap().is_empty());
}
