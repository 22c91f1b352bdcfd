// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

//! Display-name lookup seam.
//!
//! Views decorate audit ids with display names through this trait so the
//! lifecycle layer never depends on where user records live. A missing
//! name must never fail a read; callers substitute [`UNKNOWN_USER`].

use std::collections::HashMap;

use uuid::Uuid;

use crate::db::Database;
use crate::error::Result;

/// Placeholder for ids with no known display name.
pub const UNKNOWN_USER: &str = "Unknown";

/// Batch resolution of user ids to display names.
pub trait UserDirectory {
    /// Returns a mapping for the ids that could be resolved; absent ids
    /// are simply missing from the map.
    fn display_names(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, String>>;
}

impl UserDirectory for Database {
    fn display_names(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, String>> {
        self.user_names(ids)
    }
}

/// Look up one id in a resolved map, falling back to [`UNKNOWN_USER`].
pub fn name_or_unknown(names: &HashMap<Uuid, String>, id: Uuid) -> String {
    names
        .get(&id)
        .cloned()
        .unwrap_or_else(|| UNKNOWN_USER.to_string())
}
