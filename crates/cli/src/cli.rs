// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Id,
}

/// File format for the export command.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Jsonl,
}

impl ExportFormat {
    /// File extension used for default export paths.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Jsonl => "jsonl",
        }
    }
}

#[derive(Parser)]
#[command(name = "enroll")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A command-line student enrollment manager backed by SQLite")]
#[command(
    long_about = "A command-line student enrollment manager.\n\n\
    Register, search, and manage student records in a local SQLite database \
    seeded with an administrator account at init."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the student database and seed the first administrator
    #[command(after_help = colors::examples("\
Examples:
  enroll init                          Create .enroll/ with defaults
  enroll init --admin registrar        Seed admin account 'registrar'
  enroll init --database campus.db     Use a custom database file name
  enroll init --force                  Drop any existing database and recreate

The admin password is printed once when not supplied with --admin-password."))]
    Init {
        /// Username for the seeded administrator (default from config: admin)
        #[arg(long, value_parser = non_empty_string)]
        admin: Option<String>,

        /// Password for the seeded administrator (generated and printed once if omitted)
        #[arg(long, value_name = "PASSWORD")]
        admin_password: Option<String>,

        /// Database file name (default: student_db.sqlite3)
        #[arg(long, value_parser = non_empty_string)]
        database: Option<String>,

        /// Directory to initialize (default: current directory)
        #[arg(long)]
        path: Option<String>,

        /// Drop and recreate an existing database (destructive)
        #[arg(long)]
        force: bool,
    },

    /// Register a new student
    #[command(after_help = colors::examples("\
Examples:
  enroll register \"Alice Johnson\"                       Name only, ID auto-assigned
  enroll register \"Bob Lee\" -a 19 -g M                  With age and gender
  enroll register \"Ada\" -d \"Computer Science\"           With department
  enroll register \"Eve\" -e eve@example.edu -p +12025550123
  enroll register \"Sam\" --student-id S2001              Externally assigned ID
  enroll register \"Kim\" -o id                           Print only the new ID"))]
    Register {
        /// Full name
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Age (10-100)
        #[arg(long, short)]
        age: Option<i64>,

        /// Gender (M, F, Other)
        #[arg(long, short)]
        gender: Option<String>,

        /// Department
        #[arg(long, short)]
        department: Option<String>,

        /// Email address
        #[arg(long, short)]
        email: Option<String>,

        /// Phone number (10-15 digits, optional + prefix)
        #[arg(long, short)]
        phone: Option<String>,

        /// Assign a specific student ID instead of the next sequential one
        #[arg(long, value_name = "ID")]
        student_id: Option<String>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Edit a student's attributes
    #[command(after_help = colors::examples("\
Examples:
  enroll edit S1001 name \"Alice J. Smith\"    Update name
  enroll edit S1001 age 22                    Update age
  enroll edit S1001 department Mathematics    Update department
  enroll edit S1001 email none                Clear an optional field"))]
    Edit {
        /// Student ID
        id: String,

        /// Attribute to edit (name, age, gender, department, email, phone)
        attr: String,

        /// New value ('none' clears optional attributes)
        value: String,
    },

    /// Mark student(s) inactive (soft delete; use 'restore' to undo)
    #[command(arg_required_else_help = true)]
    Remove {
        /// Student ID(s)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Reactivate previously removed student(s)
    #[command(arg_required_else_help = true)]
    Restore {
        /// Student ID(s)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// List students
    #[command(after_help = colors::examples("\
Examples:
  enroll list                      List active students
  enroll list --all                Include inactive students
  enroll list -d Physics           Only one department
  enroll list -o json              Output in JSON format
  enroll list -o id                Output only IDs"))]
    List {
        /// Include inactive students
        #[arg(long)]
        all: bool,

        /// Only students in this department (exact, case-insensitive)
        #[arg(long, short)]
        department: Option<String>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Search active students by name or department
    #[command(arg_required_else_help = true)]
    Search {
        /// Substring to match (case-insensitive)
        #[arg(value_parser = non_empty_string)]
        keyword: String,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show all details of one student
    Show {
        /// Student ID
        id: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Export students to CSV or JSONL
    #[command(after_help = colors::examples("\
Examples:
  enroll export                        Timestamped CSV in the current directory
  enroll export roster.csv             Explicit path
  enroll export -f jsonl               One JSON object per line
  enroll export --all                  Include inactive students"))]
    Export {
        /// Output file (default: students_export_<timestamp>.<ext>)
        filepath: Option<String>,

        /// File format (csv, jsonl)
        #[arg(long, short, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Include inactive students
        #[arg(long)]
        all: bool,
    },

    /// Manage administrator accounts
    #[command(subcommand)]
    Admin(AdminCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Add an administrator account
    Add {
        /// Username (need not be unique)
        #[arg(value_parser = non_empty_string)]
        username: String,

        /// Password (generated and printed once if omitted)
        #[arg(long, value_name = "PASSWORD")]
        password: Option<String>,
    },

    /// List administrator accounts
    List {
        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Check a username/password pair against the stored hash
    #[command(after_help = colors::examples("\
Examples:
  enroll admin verify --password s3cret            Verify the configured admin_user
  enroll admin verify -u registrar -p s3cret       Verify a specific account

Exit status is 0 when the credentials match, 1 otherwise."))]
    Verify {
        /// Username (default: admin_user from config)
        #[arg(long, short)]
        username: Option<String>,

        /// Password to check
        #[arg(long, short, value_name = "PASSWORD")]
        password: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Set a configuration value (database, admin_user)
    Set {
        /// Key to set
        key: String,

        /// New value
        value: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
