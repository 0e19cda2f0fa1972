// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ee_core::{auth, Database};

use super::open_db;
use crate::cli::{AdminCommand, OutputFormat};
use crate::error::{Error, Result};
use crate::schema::AdminJson;
use crate::validate::validate_username;

/// Length of a generated one-shot admin password.
const GENERATED_PASSWORD_LEN: usize = 16;

/// Execute an admin subcommand.
pub fn run(cmd: AdminCommand) -> Result<()> {
    match cmd {
        AdminCommand::Add { username, password } => add(&username, password),
        AdminCommand::List { output } => list(output),
        AdminCommand::Verify { username, password } => verify(username, &password),
    }
}

fn add(username: &str, password: Option<String>) -> Result<()> {
    let username = validate_username(username)?;
    let (db, _, _) = open_db()?;
    add_impl(&db, &username, password)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn add_impl(db: &Database, username: &str, password: Option<String>) -> Result<()> {
    let (password, generated) = match password {
        Some(p) => (p, false),
        None => (
            auth::generate_secret(username, GENERATED_PASSWORD_LEN),
            true,
        ),
    };

    let id = db.insert_admin(username, &auth::hash_password(&password))?;
    tracing::info!("admin account added: {} (id {})", username, id);

    println!("Added admin {} (id {})", username, id);
    if generated {
        println!("Password: {} (shown once, store it now)", password);
    }

    Ok(())
}

fn list(output: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    let admins = db.list_admins()?;

    match output {
        OutputFormat::Text => {
            for admin in &admins {
                println!("{}: {}", admin.id, admin.username);
            }
        }
        OutputFormat::Json => {
            let json: Vec<AdminJson> = admins.iter().map(AdminJson::from).collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Id => {
            for admin in &admins {
                println!("{}", admin.id);
            }
        }
    }

    Ok(())
}

fn verify(username: Option<String>, password: &str) -> Result<()> {
    let (db, config, _) = open_db()?;
    let username = username.unwrap_or(config.admin_user);
    verify_impl(&db, &username, password)
}

/// Internal implementation that accepts db for testing.
///
/// Matches the earliest admin row with the username (duplicates are
/// allowed) and compares the salted hash in constant time.
pub(crate) fn verify_impl(db: &Database, username: &str, password: &str) -> Result<()> {
    let admin = match db.find_admin(username)? {
        Some(admin) => admin,
        None => {
            tracing::warn!("failed login attempt for unknown admin: {}", username);
            return Err(Error::InvalidCredentials);
        }
    };

    if auth::verify_password(&admin.password_hash, password).map_err(Error::from)? {
        tracing::info!("admin {} verified", username);
        println!("Login successful for {}", username);
        Ok(())
    } else {
        tracing::warn!("failed login attempt for admin: {}", username);
        Err(Error::InvalidCredentials)
    }
}

#[cfg(test)]
#[path = "admin_tests.rs"]
mod tests;
