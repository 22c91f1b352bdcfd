// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

//! trackle - a workflow-gated issue tracker CLI.
//!
//! This crate provides the command surface for the `trackle` binary on
//! top of [`trackle_core`]: project initialization, issue lifecycle
//! commands, workflow rule administration, history and transition
//! queries, comments, and JSONL bulk import.
//!
//! # Initialization
//!
//! Use [`init_work_dir`] to create a new `.trackle/` directory, then open
//! the database:
//!
//! ```rust,ignore
//! use trackle::{find_work_dir, get_db_path, Config};
//! use trackle_core::Database;
//!
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let db = Database::open(&get_db_path(&work_dir, &config))?;
//! ```

mod cli;
mod commands;
mod display;
mod validate;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat, RuleCommand};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { path } => commands::init::run(path),
        Command::New {
            title,
            description,
            issue_type,
            priority,
            output,
        } => commands::new::run(&title, &description, &issue_type, &priority, output),
        Command::Show { id, output } => commands::show::run(&id, output),
        Command::List {
            mine,
            status,
            output,
        } => commands::list::run(mine, status, output),
        Command::Edit {
            id,
            title,
            description,
            issue_type,
            priority,
            status,
        } => commands::edit::run(&id, title, description, issue_type, priority, status),
        Command::Log { id, output } => commands::log::run(&id, output),
        Command::Transitions { id } => commands::transitions::run(&id),
        Command::Comment { id, body } => commands::comment::add(&id, &body),
        Command::Comments { id } => commands::comment::list(&id),
        Command::Rule(cmd) => match cmd {
            RuleCommand::List { output } => commands::rule::list(output),
            RuleCommand::Add { from, to } => commands::rule::add(&from, &to),
            RuleCommand::Toggle { id } => commands::rule::toggle(&id),
            RuleCommand::Rm { id } => commands::rule::rm(&id),
        },
        Command::Import { file, output } => commands::import::run(&file, output),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "trackle", &mut std::io::stdout());
            Ok(())
        }
    }
}
