// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::cli::{ConfigCommand, OutputFormat};
use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::{Error, Result};
use crate::validate::{validate_db_name, validate_username};

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { output } => show(output),
        ConfigCommand::Set { key, value } => {
            let work_dir = find_work_dir()?;
            let config = Config::load(&work_dir)?;
            set_impl(&config, &work_dir, &key, &value)
        }
    }
}

fn show(output: OutputFormat) -> Result<()> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;

    match output {
        OutputFormat::Text | OutputFormat::Id => {
            println!("database = {}", config.database);
            println!("admin_user = {}", config.admin_user);
            if let Some(workspace) = &config.workspace {
                println!("workspace = {}", workspace);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "database": config.database,
                "admin_user": config.admin_user,
                "workspace": config.workspace,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

/// Internal implementation that accepts config/work_dir for testing.
pub(crate) fn set_impl(config: &Config, work_dir: &Path, key: &str, value: &str) -> Result<()> {
    let mut updated = config.clone();

    match key {
        "database" => {
            validate_db_name(value)?;
            let old_path = get_db_path(work_dir, config);
            updated.database = value.to_string();
            if old_path.exists() {
                eprintln!(
                    "warning: existing database file {} is not renamed",
                    old_path.display()
                );
            }
        }
        "admin_user" => {
            updated.admin_user = validate_username(value)?;
        }
        _ => {
            return Err(Error::InvalidConfigKey {
                key: key.to_string(),
            })
        }
    }

    updated.save(work_dir)?;
    println!("Set {} = {}", key, value);

    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
