// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "trackle")]
#[command(about = "A workflow-gated issue tracker")]
#[command(
    long_about = "A workflow-gated issue tracker.\n\n\
    Issues move between statuses only along configured transition rules;\n\
    every accepted status change is recorded in an audit history."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a tracker with the default workflow
    Init {
        /// Directory to initialize (defaults to the current directory)
        path: Option<PathBuf>,
    },

    /// Create a new issue
    #[command(
        arg_required_else_help = true,
        after_help = "Examples:\n  \
        trackle new \"Fix login\" -d \"Users cannot log in\"          Create a task\n  \
        trackle new \"Crash on save\" -d \"...\" -t bug -p critical   Create a critical bug"
    )]
    New {
        /// Issue title
        title: String,

        /// Longer description of the issue
        #[arg(long, short)]
        description: String,

        /// Issue type (task, bug, feature, improvement)
        #[arg(long = "type", short = 't', default_value = "task")]
        issue_type: String,

        /// Priority (low, medium, high, critical)
        #[arg(long, short, default_value = "medium")]
        priority: String,

        /// Output format (text, json)
        #[arg(long = "format", short = 'f', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show issue details, comments, and allowed transitions
    #[command(arg_required_else_help = true)]
    Show {
        /// Issue ID
        id: String,

        /// Output format (text, json)
        #[arg(long = "format", short = 'f', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List issues, newest first
    List {
        /// Only issues owned by the current actor
        #[arg(long)]
        mine: bool,

        /// Only issues with this status (open, in_progress, closed, reopened)
        #[arg(long, short)]
        status: Option<String>,

        /// Output format (text, json)
        #[arg(long = "format", short = 'f', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Edit an issue; status changes are checked against the workflow
    #[command(
        arg_required_else_help = true,
        after_help = "Examples:\n  \
        trackle edit <id> --title \"New title\"       Rename an issue\n  \
        trackle edit <id> -s in_progress             Move along the workflow\n  \
        trackle edit <id> -s closed -p low           Whole patch applies or none of it"
    )]
    Edit {
        /// Issue ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long, short)]
        description: Option<String>,

        /// New issue type (task, bug, feature, improvement)
        #[arg(long = "type", short = 't')]
        issue_type: Option<String>,

        /// New priority (low, medium, high, critical)
        #[arg(long, short)]
        priority: Option<String>,

        /// New status; denied transitions abort the whole edit
        #[arg(long, short)]
        status: Option<String>,
    },

    /// View an issue's status-change history, newest first
    #[command(arg_required_else_help = true)]
    Log {
        /// Issue ID
        id: String,

        /// Output format (text, json)
        #[arg(long = "format", short = 'f', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the statuses an issue may move to
    #[command(arg_required_else_help = true)]
    Transitions {
        /// Issue ID
        id: String,
    },

    /// Add a comment to an issue
    #[command(arg_required_else_help = true)]
    Comment {
        /// Issue ID
        id: String,

        /// Comment text
        body: String,
    },

    /// List an issue's comments, oldest first
    #[command(arg_required_else_help = true)]
    Comments {
        /// Issue ID
        id: String,
    },

    /// Manage workflow transition rules
    #[command(subcommand)]
    Rule(RuleCommand),

    /// Import issues from a JSONL file
    #[command(arg_required_else_help = true)]
    Import {
        /// Path to a JSONL file, one issue object per line
        file: PathBuf,

        /// Output format (text, json)
        #[arg(long = "format", short = 'f', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum RuleCommand {
    /// List configured rules, active and inactive
    List {
        /// Output format (text, json)
        #[arg(long = "format", short = 'f', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Add a rule allowing one directed transition
    #[command(arg_required_else_help = true)]
    Add {
        /// Status the transition starts from
        from: String,

        /// Status the transition moves to
        to: String,
    },

    /// Flip a rule between active and inactive
    #[command(arg_required_else_help = true)]
    Toggle {
        /// Rule ID
        id: String,
    },

    /// Permanently delete a rule
    #[command(arg_required_else_help = true)]
    Rm {
        /// Rule ID
        id: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
