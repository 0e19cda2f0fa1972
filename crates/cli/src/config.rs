// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.enroll/config.toml` and includes:
//! - `database`: file name of the SQLite database (default `student_db.sqlite3`)
//! - `admin_user`: the administrator username seeded at init and used as
//!   the default for `admin verify`
//! - `workspace`: optional directory for the database file, for keeping
//!   records outside the project tree

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::validate::{validate_db_name, validate_username};

const WORK_DIR_NAME: &str = ".enroll";
const CONFIG_FILE_NAME: &str = "config.toml";
const GITIGNORE_FILE_NAME: &str = ".gitignore";
const LOG_FILE_NAME: &str = "enroll.log";

pub const DEFAULT_DB_FILE: &str = "student_db.sqlite3";
pub const DEFAULT_ADMIN_USER: &str = "admin";

/// Project configuration stored in `.enroll/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// File name of the SQLite database.
    #[serde(default = "default_database")]
    pub database: String,
    /// Administrator username seeded at init; also the default for
    /// `admin verify`.
    #[serde(default = "default_admin_user")]
    pub admin_user: String,
    /// Optional directory for the database file (relative to the project
    /// root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
}

fn default_database() -> String {
    DEFAULT_DB_FILE.to_string()
}

fn default_admin_user() -> String {
    DEFAULT_ADMIN_USER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: default_database(),
            admin_user: default_admin_user(),
            workspace: None,
        }
    }
}

impl Config {
    /// Creates a config, applying defaults for omitted values.
    ///
    /// # Errors
    ///
    /// Returns an error if the database name contains path separators or
    /// the admin username fails validation.
    pub fn new(database: Option<String>, admin_user: Option<String>) -> Result<Self> {
        let database = database.unwrap_or_else(default_database);
        validate_db_name(&database)?;
        let admin_user = admin_user.unwrap_or_else(default_admin_user);
        validate_username(&admin_user)?;
        Ok(Config {
            database,
            admin_user,
            workspace: None,
        })
    }

    /// Loads configuration from the given `.enroll/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.enroll/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the .enroll directory by walking up from the current directory.
pub fn find_work_dir() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Create the `.enroll/` directory under `target`.
///
/// Without `force`, an existing directory is an error; with it, the
/// directory is reused (the caller is responsible for dropping the old
/// database file).
pub fn init_work_dir(target: &Path, force: bool) -> Result<PathBuf> {
    let work_dir = target.join(WORK_DIR_NAME);
    if work_dir.exists() && !force {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }
    fs::create_dir_all(&work_dir)?;
    Ok(work_dir)
}

/// Get the database path from config.
pub fn get_db_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.workspace {
        Some(workspace) => {
            let workspace_path = Path::new(workspace);
            if workspace_path.is_absolute() {
                workspace_path.join(&config.database)
            } else {
                // Relative to work_dir's parent (the project root)
                work_dir
                    .parent()
                    .unwrap_or(work_dir)
                    .join(workspace)
                    .join(&config.database)
            }
        }
        None => work_dir.join(&config.database),
    }
}

/// Path of the append-only log file inside the work directory.
pub fn log_path(work_dir: &Path) -> PathBuf {
    work_dir.join(LOG_FILE_NAME)
}

/// Write a .gitignore that keeps the database (including WAL sidecars)
/// and log out of version control. The config file is intentionally
/// tracked.
pub fn write_gitignore(work_dir: &Path, config: &Config) -> Result<()> {
    let content = format!("{}*\n{}\n", config.database, LOG_FILE_NAME);
    fs::write(work_dir.join(GITIGNORE_FILE_NAME), content)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
