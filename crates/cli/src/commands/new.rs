// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

use trackle_core::{lifecycle, Actor, Database, IssueType, IssueView, NewIssue, Priority};

use super::{open_db, resolve_actor};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::validate::{validate_description, validate_title};

pub fn run(
    title: &str,
    description: &str,
    issue_type: &str,
    priority: &str,
    output: OutputFormat,
) -> Result<()> {
    let (db, config) = open_db()?;
    let actor = resolve_actor(&db, &config)?;
    let view = run_impl(&db, &actor, title, description, issue_type, priority)?;

    match output {
        OutputFormat::Text => {
            println!(
                "Created [{}] ({}) {}: {}",
                view.issue_type, view.status, view.id, view.title
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }
    Ok(())
}

pub(crate) fn run_impl(
    db: &Database,
    actor: &Actor,
    title: &str,
    description: &str,
    issue_type: &str,
    priority: &str,
) -> Result<IssueView> {
    let title = validate_title(title)?;
    let description = validate_description(description)?;
    let issue_type: IssueType = issue_type.parse()?;
    let priority: Priority = priority.parse()?;

    let view = lifecycle::create_issue(
        db,
        NewIssue {
            title,
            description,
            issue_type,
            priority,
        },
        actor,
    )?;
    Ok(view)
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
