// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

use trackle_core::{lifecycle, Actor, Database, IssuePatch, IssueView};

use super::{open_db, parse_id, resolve_actor};
use crate::error::{Error, Result};
use crate::validate::{validate_description, validate_title};

pub fn run(
    id: &str,
    title: Option<String>,
    description: Option<String>,
    issue_type: Option<String>,
    priority: Option<String>,
    status: Option<String>,
) -> Result<()> {
    let (mut db, config) = open_db()?;
    let actor = resolve_actor(&db, &config)?;
    let view = run_impl(
        &mut db,
        &actor,
        id,
        title,
        description,
        issue_type,
        priority,
        status,
    )?;

    println!("Updated {}: {} ({})", view.id, view.title, view.status);
    Ok(())
}

/// Build and apply the patch; a denied status transition aborts the
/// whole edit.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_impl(
    db: &mut Database,
    actor: &Actor,
    id: &str,
    title: Option<String>,
    description: Option<String>,
    issue_type: Option<String>,
    priority: Option<String>,
    status: Option<String>,
) -> Result<IssueView> {
    let id = parse_id(id)?;

    let patch = IssuePatch {
        title: title.as_deref().map(validate_title).transpose()?,
        description: description.as_deref().map(validate_description).transpose()?,
        issue_type: issue_type.as_deref().map(str::parse).transpose()?,
        priority: priority.as_deref().map(str::parse).transpose()?,
        status: status.as_deref().map(str::parse).transpose()?,
    };

    if patch.is_empty() {
        return Err(Error::NothingToEdit);
    }

    Ok(lifecycle::update_issue(db, id, &patch, actor)?)
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
