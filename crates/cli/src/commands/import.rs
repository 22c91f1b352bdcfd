// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

use std::path::Path;

use trackle_core::{jsonl, lifecycle, Actor, Database, ImportReport, ImportRow, RowError};

use super::{open_db, resolve_actor};
use crate::cli::OutputFormat;
use crate::display::format_import_report;
use crate::error::{Error, Result};

pub fn run(file: &Path, output: OutputFormat) -> Result<()> {
    let (db, config) = open_db()?;
    let actor = resolve_actor(&db, &config)?;
    let report = run_impl(&db, &actor, file)?;

    match output {
        OutputFormat::Text => {
            println!("{}", format_import_report(&report));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Parse the JSONL file and run the bulk create, merging JSON parse
/// failures into the per-row report alongside validation failures.
pub(crate) fn run_impl(db: &Database, actor: &Actor, file: &Path) -> Result<ImportReport> {
    if !file.is_file() {
        return Err(Error::FileNotFound(file.display().to_string()));
    }

    let mut rows = Vec::new();
    let mut parse_errors = Vec::new();
    for (line, parsed) in jsonl::read_lines::<ImportRow>(file)? {
        match parsed {
            Ok(row) => rows.push((line, row)),
            Err(message) => parse_errors.push(RowError {
                row: line,
                title: format!("line {}", line),
                errors: vec![format!("invalid JSON: {}", message)],
            }),
        }
    }

    let mut report = lifecycle::bulk_create(db, &rows, actor)?;
    report.total += parse_errors.len();
    report.failed += parse_errors.len();
    report.errors.extend(parse_errors);
    report.errors.sort_by_key(|e| e.row);

    Ok(report)
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
