// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ee_core::{Database, EnrollStatus};

use super::open_db;
use crate::error::{Error, Result};

pub fn remove(ids: &[String]) -> Result<()> {
    let (db, _, _) = open_db()?;
    remove_impl(&db, ids)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn remove_impl(db: &Database, ids: &[String]) -> Result<()> {
    for id in ids {
        remove_single(db, id)?;
    }
    Ok(())
}

fn remove_single(db: &Database, id: &str) -> Result<()> {
    let student = db.get_student(id)?;

    if !student.status.is_active() {
        return Err(Error::AlreadyInactive(id.to_string()));
    }

    db.set_student_status(id, EnrollStatus::Inactive)?;
    tracing::info!("student {} marked inactive", id);
    println!("Removed {} (marked inactive)", id);

    Ok(())
}

pub fn restore(ids: &[String]) -> Result<()> {
    let (db, _, _) = open_db()?;
    restore_impl(&db, ids)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn restore_impl(db: &Database, ids: &[String]) -> Result<()> {
    for id in ids {
        restore_single(db, id)?;
    }
    Ok(())
}

fn restore_single(db: &Database, id: &str) -> Result<()> {
    let student = db.get_student(id)?;

    if student.status.is_active() {
        return Err(Error::AlreadyActive(id.to_string()));
    }

    db.set_student_status(id, EnrollStatus::Active)?;
    tracing::info!("student {} reactivated", id);
    println!("Restored {}", id);

    Ok(())
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
