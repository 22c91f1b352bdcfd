// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

use trackle_core::lifecycle;

use super::{open_db, parse_id};
use crate::cli::OutputFormat;
use crate::display::format_history_line;
use crate::error::Result;

pub fn run(id: &str, output: OutputFormat) -> Result<()> {
    let (db, _config) = open_db()?;
    let id = parse_id(id)?;

    // Resolve the issue first so a bad id reports NotFound, not an empty log.
    let issue = lifecycle::get_issue(&db, id)?;
    let history = lifecycle::history_for_issue(&db, id)?;

    match output {
        OutputFormat::Text => {
            println!("History for {}: {}", issue.id, issue.title);
            if history.is_empty() {
                println!("  no status changes recorded");
            } else {
                for entry in &history {
                    println!("{}", format_history_line(entry));
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&history)?);
        }
    }
    Ok(())
}
