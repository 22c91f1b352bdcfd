// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

use std::path::PathBuf;

use trackle_core::Database;

use crate::config::{get_db_path, init_work_dir, Config};
use crate::error::Result;

pub fn run(path: Option<PathBuf>) -> Result<()> {
    let root = match path {
        Some(p) => p,
        None => std::env::current_dir()?,
    };

    let work_dir = init_work_dir(&root)?;
    let config = Config::load(&work_dir)?;

    // Opening creates the schema and seeds the starter workflow.
    let db_path = get_db_path(&work_dir, &config);
    let _db = Database::open(&db_path)?;

    println!("Initialized trackle in {}", work_dir.display());
    println!("Seeded workflow: open -> in_progress -> closed -> reopened -> in_progress");
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
