// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

use trackle_core::{lifecycle, Status};

use super::{open_db, resolve_actor};
use crate::cli::OutputFormat;
use crate::display::format_issue_line;
use crate::error::Result;

pub fn run(mine: bool, status: Option<String>, output: OutputFormat) -> Result<()> {
    let (db, config) = open_db()?;

    let status: Option<Status> = status.as_deref().map(str::parse).transpose()?;

    let mut issues = if mine {
        let actor = resolve_actor(&db, &config)?;
        lifecycle::list_issues_for_owner(&db, actor.id)?
    } else {
        lifecycle::list_issues(&db)?
    };

    if let Some(status) = status {
        issues.retain(|i| i.status == status);
    }

    match output {
        OutputFormat::Text => {
            if issues.is_empty() {
                println!("No issues found.");
            } else {
                for issue in &issues {
                    println!("{}", format_issue_line(issue));
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&issues)?);
        }
    }
    Ok(())
}
