// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

use trackle_core::lifecycle;

use super::{open_db, parse_id};
use crate::display::format_statuses;
use crate::error::Result;

pub fn run(id: &str) -> Result<()> {
    let (db, _config) = open_db()?;
    let id = parse_id(id)?;

    let issue = lifecycle::get_issue(&db, id)?;
    let allowed = lifecycle::allowed_transitions_for(&db, id)?;

    println!(
        "{} is {}; can move to: {}",
        issue.id,
        issue.status,
        format_statuses(&allowed)
    );
    Ok(())
}
