// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::error::Error;
use ee_core::Database;
use tempfile::TempDir;

fn init_at(temp: &TempDir, force: bool) -> Result<()> {
    run(
        None,
        Some("changeme".to_string()),
        None,
        Some(temp.path().to_string_lossy().into_owned()),
        force,
    )
}

#[test]
fn test_init_creates_work_dir_and_database() {
    let temp = TempDir::new().unwrap();
    init_at(&temp, false).unwrap();

    let work_dir = temp.path().join(".enroll");
    assert!(work_dir.is_dir());
    assert!(work_dir.join("config.toml").exists());
    assert!(work_dir.join(".gitignore").exists());
    assert!(work_dir.join("student_db.sqlite3").exists());
}

#[test]
fn test_init_seeds_one_admin_zero_students() {
    let temp = TempDir::new().unwrap();
    init_at(&temp, false).unwrap();

    let db = Database::open(&temp.path().join(".enroll/student_db.sqlite3")).unwrap();
    assert_eq!(db.count_admins().unwrap(), 1);
    assert_eq!(db.count_students().unwrap(), 0);

    let admin = db.find_admin("admin").unwrap().unwrap();
    assert!(ee_core::auth::verify_password(&admin.password_hash, "changeme").unwrap());
}

#[test]
fn test_init_twice_without_force_fails() {
    let temp = TempDir::new().unwrap();
    init_at(&temp, false).unwrap();

    let err = init_at(&temp, false).unwrap_err();
    assert!(matches!(err, Error::AlreadyInitialized(_)));
}

#[test]
fn test_force_drops_prior_data() {
    let temp = TempDir::new().unwrap();
    init_at(&temp, false).unwrap();

    let db_path = temp.path().join(".enroll/student_db.sqlite3");
    {
        let db = Database::open(&db_path).unwrap();
        db.insert_student(&ee_core::Student::new(
            "S1001".to_string(),
            "Alice Johnson".to_string(),
        ))
        .unwrap();
    }

    init_at(&temp, true).unwrap();

    // Same end state as a fresh run: one admin, zero students
    let db = Database::open(&db_path).unwrap();
    assert_eq!(db.count_admins().unwrap(), 1);
    assert_eq!(db.count_students().unwrap(), 0);
}

#[test]
fn test_custom_admin_and_database_names() {
    let temp = TempDir::new().unwrap();
    run(
        Some("registrar".to_string()),
        Some("pw123456".to_string()),
        Some("campus.db".to_string()),
        Some(temp.path().to_string_lossy().into_owned()),
        false,
    )
    .unwrap();

    let db = Database::open(&temp.path().join(".enroll/campus.db")).unwrap();
    assert!(db.find_admin("registrar").unwrap().is_some());
}

#[test]
fn test_force_reinit_keeps_config_values() {
    let temp = TempDir::new().unwrap();
    run(
        Some("registrar".to_string()),
        Some("pw123456".to_string()),
        Some("campus.db".to_string()),
        Some(temp.path().to_string_lossy().into_owned()),
        false,
    )
    .unwrap();

    // Re-init without repeating the overrides
    init_at(&temp, true).unwrap();

    let config = crate::config::Config::load(&temp.path().join(".enroll")).unwrap();
    assert_eq!(config.database, "campus.db");
    assert_eq!(config.admin_user, "registrar");
}
