// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! enrollrs - A student enrollment management library.
//!
//! This crate provides the functionality for the `enroll` CLI tool,
//! a local student-records manager that stores data in a SQLite database.
//!
//! # Main Components
//!
//! - [`Database`] - SQLite-backed storage for students and admin accounts
//! - [`Config`] - Project configuration (database name, seed admin user)
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! `enroll init` creates a `.enroll/` directory holding `config.toml` and
//! the database file, then bootstraps the schema and seeds the first
//! administrator:
//!
//! ```rust,ignore
//! use enrollrs::config::{find_work_dir, get_db_path, Config};
//! use enrollrs::Database;
//!
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let db = Database::open(&get_db_path(&work_dir, &config))?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;
mod schema;
mod validate;

pub mod config;
pub mod error;
pub mod id;

pub use cli::{AdminCommand, Cli, Command, ConfigCommand, ExportFormat, OutputFormat};
pub use config::Config;
pub use ee_core::Database;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init {
            admin,
            admin_password,
            database,
            path,
            force,
        } => commands::init::run(admin, admin_password, database, path, force),
        Command::Register {
            name,
            age,
            gender,
            department,
            email,
            phone,
            student_id,
            output,
        } => commands::register::run(
            name, age, gender, department, email, phone, student_id, output,
        ),
        Command::Edit { id, attr, value } => commands::edit::run(&id, &attr, &value),
        Command::Remove { ids } => commands::lifecycle::remove(&ids),
        Command::Restore { ids } => commands::lifecycle::restore(&ids),
        Command::List {
            all,
            department,
            output,
        } => commands::list::run(all, department, output),
        Command::Search { keyword, output } => commands::search::run(&keyword, output),
        Command::Show { id, output } => commands::show::run(&id, output),
        Command::Export {
            filepath,
            format,
            all,
        } => commands::export::run(filepath, format, all),
        Command::Admin(cmd) => commands::admin::run(cmd),
        Command::Config(cmd) => commands::config::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "enroll", &mut std::io::stdout());
            Ok(())
        }
    }
}
