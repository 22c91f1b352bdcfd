// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Trackle Authors

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use trackle::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so structured output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = trackle::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
