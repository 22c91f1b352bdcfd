// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

use trackle_core::{lifecycle, Actor, CommentView, Database};

use super::{open_db, parse_id, resolve_actor};
use crate::display::format_comment;
use crate::error::Result;
use crate::validate::validate_comment;

pub fn add(id: &str, body: &str) -> Result<()> {
    let (db, config) = open_db()?;
    let actor = resolve_actor(&db, &config)?;
    let comment = add_impl(&db, &actor, id, body)?;

    println!("Added comment #{} to {}", comment.id, comment.issue_id);
    Ok(())
}

pub(crate) fn add_impl(
    db: &Database,
    actor: &Actor,
    id: &str,
    body: &str,
) -> Result<CommentView> {
    let id = parse_id(id)?;
    let body = validate_comment(body)?;
    Ok(lifecycle::add_comment(db, id, &body, actor)?)
}

pub fn list(id: &str) -> Result<()> {
    let (db, _config) = open_db()?;
    let id = parse_id(id)?;

    let issue = lifecycle::get_issue(&db, id)?;
    let comments = lifecycle::comments_for_issue(&db, id)?;

    println!("Comments on {}: {}", issue.id, issue.title);
    if comments.is_empty() {
        println!("  no comments");
    } else {
        for comment in &comments {
            for line in format_comment(comment) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
