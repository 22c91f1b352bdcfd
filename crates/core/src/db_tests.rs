// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

#![allow(clippy::unwrap_used)]

use super::*;
use crate::issue::{IssueType, NewIssue, Priority};
use crate::workflow;

fn test_issue(db: &Database, title: &str) -> Issue {
    let actor = db.ensure_user("tester").unwrap();
    let issue = Issue::new(
        NewIssue {
            title: title.to_string(),
            description: "a description".to_string(),
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
fn create_and_get_issue() {
    let db = Database::open_in_memory().unwrap();
    let issue = test_issue(&db, "Test issue");

    let retrieved = db.get_issue(issue.id).unwrap();
    assert_eq!(retrieved, issue);
    assert_eq!(retrieved.status, Status::Open);
}

#[test]
fn issue_not_found() {
    let db = Database::open_in_memory().unwrap();
    let result = db.get_issue(Uuid::new_v4());
    assert!(matches!(result, Err(Error::IssueNotFound(_))));
}

#[test]
fn list_issues_newest_first() {
    let db = Database::open_in_memory().unwrap();
    let first = test_issue(&db, "First");
    let second = test_issue(&db, "Second");

    let issues = db.list_issues().unwrap();
    assert_eq!(issues.len(), 2);
    // Same-instant creations fall back to reverse insert order.
    assert_eq!(issues[0].id, second.id);
    assert_eq!(issues[1].id, first.id);
}

#[test]
fn list_issues_for_owner_filters() {
    let db = Database::open_in_memory().unwrap();
    let issue = test_issue(&db, "Mine");

    let mine = db.list_issues_for_owner(issue.owner).unwrap();
    assert_eq!(mine.len(), 1);

    let theirs = db.list_issues_for_owner(Uuid::new_v4()).unwrap();
    assert!(theirs.is_empty());
}

#[test]
fn ensure_user_is_idempotent() {
    let db = Database::open_in_memory().unwrap();
    let first = db.ensure_user("alice").unwrap();
    let second = db.ensure_user("alice").unwrap();
    assert_eq!(first, second);

    let other = db.ensure_user("bob").unwrap();
    assert_ne!(first, other);
}

#[test]
fn user_names_batch_lookup() {
    let db = Database::open_in_memory().unwrap();
    let alice = db.ensure_user("alice").unwrap();
    let bob = db.ensure_user("bob").unwrap();
    let ghost = Uuid::new_v4();

    let names = db.user_names(&[alice, bob, ghost]).unwrap();
    assert_eq!(names.get(&alice).map(String::as_str), Some("alice"));
    assert_eq!(names.get(&bob).map(String::as_str), Some("bob"));
    assert!(!names.contains_key(&ghost));
}

#[test]
fn user_names_empty_input() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.user_names(&[]).unwrap().is_empty());
}

#[test]
fn migrations_register_system_user() {
    let db = Database::open_in_memory().unwrap();
    let names = db.user_names(&[Uuid::nil()]).unwrap();
    assert_eq!(names.get(&Uuid::nil()).map(String::as_str), Some("System"));
}

#[test]
fn first_open_seeds_starter_policy() {
    let db = Database::open_in_memory().unwrap();
    let rules = workflow::list_rules(&db).unwrap();

    let pairs: Vec<(Status, Status)> = rules
        .iter()
        .map(|r| (r.from_status, r.to_status))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (Status::Open, Status::InProgress),
            (Status::InProgress, Status::Closed),
            (Status::Closed, Status::Reopened),
            (Status::Reopened, Status::InProgress),
        ]
    );
    assert!(rules.iter().all(|r| r.is_active));
    assert!(rules.iter().all(|r| r.created_by == Uuid::nil()));
}

#[test]
fn seeding_does_not_recur_after_rules_deleted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("issues.db");

    {
        let db = Database::open(&path).unwrap();
        db.conn.execute("DELETE FROM transition_rules", []).unwrap();
    }

    // Re-opening runs migrations again; the seed marker must hold.
    let db = Database::open(&path).unwrap();
    assert!(workflow::list_rules(&db).unwrap().is_empty());
}

#[test]
fn open_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("issues.db");
    let db = Database::open(&path).unwrap();
    drop(db);
    assert!(path.exists());
}

#[test]
fn add_and_get_comments_oldest_first() {
    let db = Database::open_in_memory().unwrap();
    let issue = test_issue(&db, "Test issue");
    let author = db.ensure_user("alice").unwrap();

    db.add_comment(issue.id, "first", author, Utc::now()).unwrap();
    db.add_comment(issue.id, "second", author, Utc::now()).unwrap();

    let comments = db.get_comments(issue.id).unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].body, "first");
    assert_eq!(comments[1].body, "second");
}

#[test]
fn corrupted_status_is_reported() {
    let db = Database::open_in_memory().unwrap();
    let issue = test_issue(&db, "Test issue");

    db.conn
        .execute(
            "UPDATE issues SET status = 'bogus' WHERE id = ?1",
            rusqlite::params![issue.id.to_string()],
        )
        .unwrap();

    let result = db.get_issue(issue.id);
    assert!(matches!(result, Err(Error::Database(_))));
}
