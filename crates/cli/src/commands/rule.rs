// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

use trackle_core::{workflow, Actor, Database, Status, TransitionRule};

use super::{open_db, parse_id, resolve_actor};
use crate::cli::OutputFormat;
use crate::display::format_rule_line;
use crate::error::Result;

pub fn list(output: OutputFormat) -> Result<()> {
    let (db, _config) = open_db()?;
    let rules = workflow::list_rules(&db)?;

    match output {
        OutputFormat::Text => {
            if rules.is_empty() {
                println!("No rules configured; every transition is allowed.");
            } else {
                for rule in &rules {
                    println!("{}", format_rule_line(rule));
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rules)?);
        }
    }
    Ok(())
}

pub fn add(from: &str, to: &str) -> Result<()> {
    let (mut db, config) = open_db()?;
    let actor = resolve_actor(&db, &config)?;
    let rule = add_impl(&mut db, &actor, from, to)?;

    println!(
        "Added rule {}: {} -> {}",
        rule.id, rule.from_status, rule.to_status
    );
    Ok(())
}

pub(crate) fn add_impl(
    db: &mut Database,
    actor: &Actor,
    from: &str,
    to: &str,
) -> Result<TransitionRule> {
    let from: Status = from.parse()?;
    let to: Status = to.parse()?;
    Ok(workflow::create_rule(db, from, to, actor)?)
}

pub fn toggle(id: &str) -> Result<()> {
    let (db, _config) = open_db()?;
    let rule = toggle_impl(&db, id)?;

    let state = if rule.is_active { "active" } else { "inactive" };
    println!(
        "Rule {} ({} -> {}) is now {}",
        rule.id, rule.from_status, rule.to_status, state
    );
    Ok(())
}

pub(crate) fn toggle_impl(db: &Database, id: &str) -> Result<TransitionRule> {
    let id = parse_id(id)?;
    if !workflow::toggle_rule(db, id)? {
        return Err(trackle_core::Error::RuleNotFound(id.to_string()).into());
    }
    Ok(workflow::get_rule(db, id)?)
}

pub fn rm(id: &str) -> Result<()> {
    let (db, _config) = open_db()?;
    let id = parse_id(id)?;

    if !workflow::delete_rule(&db, id)? {
        return Err(trackle_core::Error::RuleNotFound(id.to_string()).into());
    }
    println!("Deleted rule {}", id);
    Ok(())
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
