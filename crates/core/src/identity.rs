// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

//! Actor identity for audit purposes.
//!
//! The core never authenticates; callers resolve an [`Actor`] (opaque id
//! plus display name) before invoking any mutating operation. This module
//! also provides the display-name detection used by local callers.

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;

use std::process::Command;

use uuid::Uuid;

/// Reserved actor id for system-initiated changes (e.g. seeded rules).
pub const SYSTEM_USER_ID: Uuid = Uuid::nil();

/// Display name of the reserved system actor.
pub const SYSTEM_USER_NAME: &str = "System";

/// The identity attributed to a mutating operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// Opaque user identifier.
    pub id: Uuid,
    /// Display name for decoration of read responses.
    pub name: String,
}

impl Actor {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Actor {
            id,
            name: name.into(),
        }
    }

    /// The reserved system actor.
    pub fn system() -> Self {
        Actor::new(SYSTEM_USER_ID, SYSTEM_USER_NAME)
    }
}

/// Returns the current user's display name for audit purposes.
///
/// Resolution order:
/// 1. Git config user.name (display name only, never email)
/// 2. Unix username from USER or LOGNAME env var (if not a system account)
/// 3. Fallback to "human"
pub fn detect_user_name() -> String {
    if let Some(name) = git_user_name() {
        return name;
    }

    if let Some(name) = unix_username() {
        if !is_system_account(&name) {
            return name;
        }
    }

    "human".to_string()
}

fn git_user_name() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", "user.name"])
        .output()
        .ok()?;

    if output.status.success() {
        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !name.is_empty() {
            return Some(name);
        }
    }
    None
}

fn unix_username() -> Option<String> {
    std::env::var("USER")
        .or_else(|_| std::env::var("LOGNAME"))
        .ok()
        .filter(|s| !s.is_empty())
}

fn is_system_account(name: &str) -> bool {
    matches!(
        name.to_lowercase().as_str(),
        "root" | "system" | "administrator" | "admin" | "daemon" | "nobody"
    )
}
