// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

//! JSONL (JSON Lines) reading for bulk import.
//!
//! Rows are parsed line by line and returned with their 1-based line
//! numbers; a malformed line yields a per-line error instead of aborting
//! the whole file, so import can report row-level failures.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::Result;

/// One parsed line: the line number and either the record or the parse
/// failure message.
pub type LineResult<T> = (usize, std::result::Result<T, String>);

/// Read all records from a JSONL file, one result per non-blank line.
///
/// Blank lines are skipped (their numbers still count). Returns an empty
/// vec if the file doesn't exist.
pub fn read_lines<T: DeserializeOwned>(path: &Path) -> Result<Vec<LineResult<T>>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed = serde_json::from_str::<T>(&line).map_err(|e| e.to_string());
        records.push((index + 1, parsed));
    }

    Ok(records)
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
