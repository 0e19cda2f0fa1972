// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use ee_core::{auth, Database};

use crate::config::{get_db_path, init_work_dir, write_gitignore, Config};
use crate::error::Result;

/// Length of a generated one-shot admin password.
const GENERATED_PASSWORD_LEN: usize = 16;

pub fn run(
    admin: Option<String>,
    admin_password: Option<String>,
    database: Option<String>,
    path: Option<String>,
    force: bool,
) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };

    let work_dir = init_work_dir(&target_path, force)?;

    // On re-init, keep existing config values unless overridden
    let config = match Config::load(&work_dir) {
        Ok(existing) if force => {
            // Drop the database the old config points at, in case the
            // file name is changing on this run
            drop_database(&get_db_path(&work_dir, &existing))?;
            Config::new(
                database.or(Some(existing.database)),
                admin.or(Some(existing.admin_user)),
            )?
        }
        _ => Config::new(database, admin)?,
    };
    config.save(&work_dir)?;
    write_gitignore(&work_dir, &config)?;

    let db_path = get_db_path(&work_dir, &config);
    if force {
        drop_database(&db_path)?;
    }

    // Seed password: given, or generated and shown exactly once
    let (password, generated) = match admin_password {
        Some(p) => (p, false),
        None => (
            auth::generate_secret(&config.admin_user, GENERATED_PASSWORD_LEN),
            true,
        ),
    };

    let mut db = Database::open(&db_path)?;
    db.bootstrap(&config.admin_user, &auth::hash_password(&password))?;

    tracing::info!(
        "initialized database '{}' with admin '{}'",
        config.database,
        config.admin_user
    );

    println!("Initialized student records at {}", work_dir.display());
    println!("Database: {}", config.database);
    println!("Admin: {}", config.admin_user);
    if generated {
        println!("Admin password: {} (shown once, store it now)", password);
    }

    Ok(())
}

/// Remove the database file and its WAL sidecars.
///
/// Destructive: any prior student and admin data is gone. Only reachable
/// behind --force.
fn drop_database(db_path: &std::path::Path) -> Result<()> {
    for suffix in ["", "-wal", "-shm"] {
        let mut path = db_path.as_os_str().to_owned();
        path.push(suffix);
        let path = PathBuf::from(path);
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
