// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use enrollrs::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging();
    if let Err(e) = enrollrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Set up tracing output.
///
/// When a work directory exists, logs append to `.enroll/enroll.log`
/// (no ANSI); otherwise they go to stderr. `RUST_LOG` overrides the
/// default `info` filter.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    fn env_filter(default: &str) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    }

    let log_file = enrollrs::config::find_work_dir()
        .ok()
        .map(|dir| enrollrs::config::log_path(&dir))
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    match log_file {
        Some(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter("info"))
                .with_writer(file)
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter("warn"))
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
