// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

use crate::error::{Error, Result};

// Input length limits
pub const MAX_TITLE_LENGTH: usize = 500;
pub const MAX_DESCRIPTION_LENGTH: usize = 1_000_000;
pub const MAX_COMMENT_LENGTH: usize = 200_000;

/// Validate and trim a title (non-empty after trimming, within length limits).
pub fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field: "Title" });
    }
    if trimmed.len() > MAX_TITLE_LENGTH {
        return Err(Error::FieldTooLong {
            field: "Title",
            actual: trimmed.len(),
            max: MAX_TITLE_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

/// Validate and trim a description (non-empty after trimming, within length limits).
pub fn validate_description(description: &str) -> Result<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty {
            field: "Description",
        });
    }
    if trimmed.len() > MAX_DESCRIPTION_LENGTH {
        return Err(Error::FieldTooLong {
            field: "Description",
            actual: trimmed.len(),
            max: MAX_DESCRIPTION_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

/// Validate and trim a comment body.
pub fn validate_comment(body: &str) -> Result<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field: "Comment" });
    }
    if trimmed.len() > MAX_COMMENT_LENGTH {
        return Err(Error::FieldTooLong {
            field: "Comment",
            actual: trimmed.len(),
            max: MAX_COMMENT_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
