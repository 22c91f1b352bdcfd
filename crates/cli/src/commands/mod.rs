// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

pub mod comment;
pub mod edit;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod new;
pub mod rule;
pub mod show;
pub mod transitions;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use trackle_core::{identity, Actor, Database};
use uuid::Uuid;

use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::{Error, Result};

/// Helper to open the database from the current context.
pub fn open_db() -> Result<(Database, Config)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    tracing::debug!(path = %db_path.display(), "opening database");
    let db = Database::open(&db_path)?;
    Ok((db, config))
}

/// Resolve the actor to attribute mutations to.
///
/// The config's `actor` name wins; otherwise the name is detected from
/// git config or the Unix username. Either way the user is registered so
/// views can resolve the id back to a name.
pub fn resolve_actor(db: &Database, config: &Config) -> Result<Actor> {
    let name = match &config.actor {
        Some(name) => name.clone(),
        None => identity::detect_user_name(),
    };
    let id = db.ensure_user(&name)?;
    Ok(Actor::new(id, name))
}

/// Parse a user-supplied id argument.
pub fn parse_id(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value.trim()).map_err(|_| Error::InvalidId(value.to_string()))
}
