// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

use trackle_core::{CommentView, HistoryView, ImportReport, IssueView, Status, TransitionRule};

/// Format a single issue line for list output.
pub fn format_issue_line(issue: &IssueView) -> String {
    format!(
        "- [{}] ({}, {}) {}: {}",
        issue.issue_type, issue.status, issue.priority, issue.id, issue.title
    )
}

/// Format issue details for the show command.
pub fn format_issue_details(
    issue: &IssueView,
    allowed: &[Status],
    comments: &[CommentView],
) -> String {
    let mut lines = Vec::new();

    lines.push(format!("[{}] {}", issue.issue_type, issue.id));
    lines.push(format!("Title:    {}", issue.title));
    lines.push(format!("Status:   {}", issue.status));
    lines.push(format!("Priority: {}", issue.priority));
    lines.push(format!(
        "Created:  {} by {}",
        issue.created_at.format("%Y-%m-%d %H:%M"),
        issue.created_by
    ));
    lines.push(format!(
        "Updated:  {} by {}",
        issue.updated_at.format("%Y-%m-%d %H:%M"),
        issue.updated_by
    ));
    lines.push(format!("Can move to: {}", format_statuses(allowed)));

    lines.push(String::new());
    lines.push("Description".to_string());
    for line in issue.description.lines() {
        lines.push(format!("  {}", line));
    }

    if !comments.is_empty() {
        lines.push(String::new());
        lines.push(format!("Comments ({})", comments.len()));
        for comment in comments {
            lines.extend(format_comment(comment));
        }
    }

    lines.join("\n")
}

/// Format a comment with a metadata line and indented body.
pub fn format_comment(comment: &CommentView) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "  {} {}",
        comment.created_at.format("%Y-%m-%d %H:%M"),
        comment.created_by
    ));
    for line in comment.body.lines() {
        lines.push(format!("    {}", line));
    }
    lines
}

/// Format a single history entry line.
pub fn format_history_line(entry: &HistoryView) -> String {
    format!(
        "  {}  {} -> {}  by {}",
        entry.created_at.format("%Y-%m-%d %H:%M"),
        entry.from_status,
        entry.to_status,
        entry.created_by
    )
}

/// Format a single transition rule line for rule list output.
pub fn format_rule_line(rule: &TransitionRule) -> String {
    let state = if rule.is_active { "active" } else { "inactive" };
    format!(
        "- {}  {} -> {}  [{}]",
        rule.id, rule.from_status, rule.to_status, state
    )
}

/// Join statuses with commas for inline display.
pub fn format_statuses(statuses: &[Status]) -> String {
    statuses
        .iter()
        .map(Status::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a bulk import report: a summary line, then one line per
/// created issue and per failed row.
pub fn format_import_report(report: &ImportReport) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Imported {} of {} rows ({} failed)",
        report.succeeded, report.total, report.failed
    ));

    for issue in &report.created {
        lines.push(format!("  created {}: {}", issue.id, issue.title));
    }

    for error in &report.errors {
        lines.push(format!("  row {} ({}) failed:", error.row, error.title));
        for reason in &error.errors {
            lines.push(format!("    - {}", reason));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
