// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::auth;
use crate::student::Gender;

fn bootstrapped() -> Database {
    let mut db = Database::open_in_memory().unwrap();
    db.bootstrap("admin", &auth::hash_password("changeme"))
        .unwrap();
    db
}

fn sample_student(id: &str, name: &str) -> Student {
    let mut student = Student::new(id.to_string(), name.to_string());
    student.age = Some(21);
    student.gender = Some(Gender::F);
    student.department = Some("Computer Science".to_string());
    student.email = Some("alice@example.edu".to_string());
    student.phone = Some("+12025550123".to_string());
    student
}

#[test]
fn test_bootstrap_creates_both_tables() {
    let db = bootstrapped();
    let count: i64 = db
        .conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'
             AND name IN ('admins', 'students')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 2);
}

#[test]
fn test_bootstrap_seeds_exactly_one_admin() {
    let db = bootstrapped();
    assert_eq!(db.count_admins().unwrap(), 1);
    assert_eq!(db.count_students().unwrap(), 0);

    let admin = db.find_admin("admin").unwrap().unwrap();
    assert_eq!(admin.username, "admin");
    assert!(auth::verify_password(&admin.password_hash, "changeme").unwrap());
}

#[test]
fn test_bootstrap_stores_hash_not_plaintext() {
    let db = bootstrapped();
    let admin = db.find_admin("admin").unwrap().unwrap();
    assert_ne!(admin.password_hash, "changeme");
    assert!(admin.password_hash.starts_with("sha256$"));
}

#[test]
fn test_duplicate_admin_usernames_allowed() {
    let db = bootstrapped();
    // No uniqueness constraint on username: a second row must succeed
    db.insert_admin("admin", &auth::hash_password("other"))
        .unwrap();
    assert_eq!(db.count_admins().unwrap(), 2);

    // Lookup resolves to the earliest row
    let first = db.find_admin("admin").unwrap().unwrap();
    assert_eq!(first.id, 1);
}

#[test]
fn test_insert_and_get_student() {
    let db = bootstrapped();
    let student = sample_student("S1001", "Alice Johnson");
    db.insert_student(&student).unwrap();

    let fetched = db.get_student("S1001").unwrap();
    assert_eq!(fetched, student);
}

#[test]
fn test_get_missing_student() {
    let db = bootstrapped();
    let err = db.get_student("S9999").unwrap_err();
    assert!(matches!(err, Error::StudentNotFound(_)));
}

#[test]
fn test_duplicate_student_id_rejected() {
    let db = bootstrapped();
    db.insert_student(&sample_student("S1001", "Alice Johnson"))
        .unwrap();
    let err = db
        .insert_student(&sample_student("S1001", "Bob Lee"))
        .unwrap_err();
    assert!(matches!(err, Error::Database(_)));
}

#[test]
fn test_status_defaults_to_active_when_omitted() {
    let db = bootstrapped();
    // Insert without the status column; the schema default must apply
    db.conn
        .execute(
            "INSERT INTO students (student_id, name) VALUES ('S1001', 'Alice Johnson')",
            [],
        )
        .unwrap();

    let student = db.get_student("S1001").unwrap();
    assert_eq!(student.status, EnrollStatus::Active);
}

#[test]
fn test_update_student() {
    let db = bootstrapped();
    let mut student = sample_student("S1001", "Alice Johnson");
    db.insert_student(&student).unwrap();

    student.name = "Alice J. Smith".to_string();
    student.department = Some("Mathematics".to_string());
    student.age = None;
    db.update_student(&student).unwrap();

    let fetched = db.get_student("S1001").unwrap();
    assert_eq!(fetched.name, "Alice J. Smith");
    assert_eq!(fetched.department.as_deref(), Some("Mathematics"));
    assert!(fetched.age.is_none());
}

#[test]
fn test_update_missing_student() {
    let db = bootstrapped();
    let err = db
        .update_student(&sample_student("S9999", "Ghost"))
        .unwrap_err();
    assert!(matches!(err, Error::StudentNotFound(_)));
}

#[test]
fn test_soft_delete_and_restore() {
    let db = bootstrapped();
    db.insert_student(&sample_student("S1001", "Alice Johnson"))
        .unwrap();

    db.set_student_status("S1001", EnrollStatus::Inactive)
        .unwrap();
    assert!(db.list_students(false).unwrap().is_empty());
    // The row is still there
    assert_eq!(db.list_students(true).unwrap().len(), 1);
    assert_eq!(
        db.get_student("S1001").unwrap().status,
        EnrollStatus::Inactive
    );

    db.set_student_status("S1001", EnrollStatus::Active).unwrap();
    assert_eq!(db.list_students(false).unwrap().len(), 1);
}

#[test]
fn test_list_orders_by_id() {
    let db = bootstrapped();
    db.insert_student(&sample_student("S1002", "Bob Lee")).unwrap();
    db.insert_student(&sample_student("S1001", "Alice Johnson"))
        .unwrap();

    let students = db.list_students(false).unwrap();
    let ids: Vec<&str> = students.iter().map(|s| s.student_id.as_str()).collect();
    assert_eq!(ids, vec!["S1001", "S1002"]);
}

#[test]
fn test_search_matches_name_and_department() {
    let db = bootstrapped();
    db.insert_student(&sample_student("S1001", "Alice Johnson"))
        .unwrap();
    let mut bob = sample_student("S1002", "Bob Lee");
    bob.department = Some("Physics".to_string());
    db.insert_student(&bob).unwrap();

    // Case-insensitive name match
    let by_name = db.search_students("alice").unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].student_id, "S1001");

    // Department match
    let by_dept = db.search_students("physics").unwrap();
    assert_eq!(by_dept.len(), 1);
    assert_eq!(by_dept[0].student_id, "S1002");
}

#[test]
fn test_search_skips_inactive() {
    let db = bootstrapped();
    db.insert_student(&sample_student("S1001", "Alice Johnson"))
        .unwrap();
    db.set_student_status("S1001", EnrollStatus::Inactive)
        .unwrap();

    assert!(db.search_students("Alice").unwrap().is_empty());
}

#[test]
fn test_open_creates_file_and_parents() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("nested").join("student_db.sqlite3");
    let mut db = Database::open(&path).unwrap();
    db.bootstrap("admin", &auth::hash_password("pw")).unwrap();
    assert!(path.exists());
}

#[test]
fn test_bootstrap_twice_on_same_connection_adds_admin() {
    // execute_batch uses IF NOT EXISTS, so a re-bootstrap only seeds
    let mut db = bootstrapped();
    db.bootstrap("second", &auth::hash_password("pw")).unwrap();
    assert_eq!(db.count_admins().unwrap(), 2);
}
