// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

use trackle_core::lifecycle;

use super::{open_db, parse_id};
use crate::cli::OutputFormat;
use crate::display::format_issue_details;
use crate::error::Result;

pub fn run(id: &str, output: OutputFormat) -> Result<()> {
    let (db, _config) = open_db()?;
    let id = parse_id(id)?;

    let issue = lifecycle::get_issue(&db, id)?;
    let allowed = lifecycle::allowed_transitions_for(&db, id)?;
    let comments = lifecycle::comments_for_issue(&db, id)?;

    match output {
        OutputFormat::Text => {
            println!("{}", format_issue_details(&issue, &allowed, &comments));
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "issue": issue,
                "allowed_transitions": allowed,
                "comments": comments,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}
