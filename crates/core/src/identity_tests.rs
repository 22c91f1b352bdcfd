// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[test]
fn system_actor_uses_nil_uuid() {
    let actor = Actor::system();
    assert_eq!(actor.id, SYSTEM_USER_ID);
    assert_eq!(actor.id, Uuid::nil());
    assert_eq!(actor.name, "System");
}

#[test]
fn actor_new_stores_fields() {
    let id = Uuid::new_v4();
    let actor = Actor::new(id, "alice");
    assert_eq!(actor.id, id);
    assert_eq!(actor.name, "alice");
}

#[parameterized(
    root = { "root" },
    admin = { "admin" },
    administrator_upper = { "Administrator" },
    nobody = { "nobody" },
)]
fn system_accounts_detected(name: &str) {
    assert!(is_system_account(name));
}

#[parameterized(
    alice = { "alice" },
    dev = { "dev" },
)]
fn regular_accounts_not_system(name: &str) {
    assert!(!is_system_account(name));
}

#[test]
fn detect_user_name_never_empty() {
    assert!(!detect_user_name().is_empty());
}
