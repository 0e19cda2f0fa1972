// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed database for student enrollment records.
//!
//! The [`Database`] struct provides all data access operations for
//! students and administrator accounts. Schema creation and the initial
//! admin seed happen together in [`Database::bootstrap`], inside a single
//! transaction, so a failed bootstrap never leaves a half-created schema.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::admin::Admin;
use crate::error::{Error, Result};
use crate::student::{EnrollStatus, Student};

/// SQL schema for the enrollment database.
///
/// Exactly two tables, no foreign keys. `admins.username` carries no
/// uniqueness constraint; duplicate usernames are permitted. Column
/// widths (50/255/10/100/15) are enforced by application-level
/// validation, not by the engine.
pub const SCHEMA: &str = r#"
-- Administrator accounts
CREATE TABLE IF NOT EXISTS admins (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    password_hash TEXT NOT NULL
);

-- Student records; student_id is externally meaningful (e.g. S1001)
CREATE TABLE IF NOT EXISTS students (
    student_id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    age INTEGER,
    gender TEXT,
    department TEXT,
    email TEXT,
    phone TEXT,
    status BOOLEAN DEFAULT TRUE
);
"#;

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid value '{value}' in column '{column}'"
            ))),
        )
    })
}

const STUDENT_COLUMNS: &str =
    "student_id, name, age, gender, department, email, phone, status";

/// Map a row selected with [`STUDENT_COLUMNS`] into a [`Student`].
fn student_from_row(row: &rusqlite::Row<'_>) -> std::result::Result<Student, rusqlite::Error> {
    let gender: Option<String> = row.get(3)?;
    // A NULL status predates the DEFAULT and reads as active.
    let active: Option<bool> = row.get(7)?;
    Ok(Student {
        student_id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        gender: gender
            .as_deref()
            .map(|g| parse_db(g, "gender"))
            .transpose()?,
        department: row.get(4)?,
        email: row.get(5)?,
        phone: row.get(6)?,
        status: EnrollStatus::from_bool(active.unwrap_or(true)),
    })
}

/// SQLite database connection with enrollment operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database at the given path, creating parent directories as
    /// needed. Does not create the schema; see [`Database::bootstrap`].
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        Ok(Database { conn })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Database { conn })
    }

    /// Create the schema and seed the first administrator, atomically.
    ///
    /// Returns the seeded admin's row id. The caller is expected to pass
    /// an already-hashed password (see [`crate::auth::hash_password`]).
    pub fn bootstrap(&mut self, username: &str, password_hash: &str) -> Result<i64> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(SCHEMA)?;
        tx.execute(
            "INSERT INTO admins (username, password_hash) VALUES (?1, ?2)",
            params![username, password_hash],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    // ── Admin operations ────────────────────────────────────────────────

    /// Insert an administrator account. Duplicate usernames are allowed.
    pub fn insert_admin(&self, username: &str, password_hash: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO admins (username, password_hash) VALUES (?1, ?2)",
            params![username, password_hash],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Find the earliest admin row with the given username.
    pub fn find_admin(&self, username: &str) -> Result<Option<Admin>> {
        let admin = self
            .conn
            .query_row(
                "SELECT id, username, password_hash FROM admins
                 WHERE username = ?1 ORDER BY id LIMIT 1",
                params![username],
                |row| {
                    Ok(Admin {
                        id: row.get(0)?,
                        username: row.get(1)?,
                        password_hash: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(admin)
    }

    /// All admin accounts, ordered by id.
    pub fn list_admins(&self) -> Result<Vec<Admin>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, username, password_hash FROM admins ORDER BY id")?;

        let admins = stmt
            .query_map([], |row| {
                Ok(Admin {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    password_hash: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(admins)
    }

    pub fn count_admins(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM admins", [], |row| row.get(0))?;
        Ok(count)
    }

    // ── Student operations ──────────────────────────────────────────────

    /// Insert a student record.
    ///
    /// Fails with a constraint violation if `student_id` already exists;
    /// callers that auto-assign IDs retry on that error.
    pub fn insert_student(&self, student: &Student) -> Result<()> {
        self.conn.execute(
            "INSERT INTO students (student_id, name, age, gender, department, email, phone, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                student.student_id,
                student.name,
                student.age,
                student.gender.map(|g| g.as_str()),
                student.department,
                student.email,
                student.phone,
                student.status.as_bool(),
            ],
        )?;
        Ok(())
    }

    /// Get a student by ID, active or not.
    pub fn get_student(&self, student_id: &str) -> Result<Student> {
        let student = self
            .conn
            .query_row(
                &format!("SELECT {STUDENT_COLUMNS} FROM students WHERE student_id = ?1"),
                params![student_id],
                student_from_row,
            )
            .optional()?;

        student.ok_or_else(|| Error::StudentNotFound(student_id.to_string()))
    }

    /// Check if a student exists.
    pub fn student_exists(&self, student_id: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM students WHERE student_id = ?1",
            params![student_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Update every editable field of a student.
    pub fn update_student(&self, student: &Student) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE students
             SET name = ?1, age = ?2, gender = ?3, department = ?4, email = ?5, phone = ?6
             WHERE student_id = ?7",
            params![
                student.name,
                student.age,
                student.gender.map(|g| g.as_str()),
                student.department,
                student.email,
                student.phone,
                student.student_id,
            ],
        )?;

        if affected == 0 {
            return Err(Error::StudentNotFound(student.student_id.clone()));
        }
        Ok(())
    }

    /// Flip the enrollment flag (soft delete / restore).
    pub fn set_student_status(&self, student_id: &str, status: EnrollStatus) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE students SET status = ?1 WHERE student_id = ?2",
            params![status.as_bool(), student_id],
        )?;

        if affected == 0 {
            return Err(Error::StudentNotFound(student_id.to_string()));
        }
        Ok(())
    }

    /// List students, ordered by ID. Inactive records are included only
    /// when requested.
    pub fn list_students(&self, include_inactive: bool) -> Result<Vec<Student>> {
        let sql = if include_inactive {
            format!("SELECT {STUDENT_COLUMNS} FROM students ORDER BY student_id")
        } else {
            format!(
                "SELECT {STUDENT_COLUMNS} FROM students
                 WHERE status = TRUE ORDER BY student_id"
            )
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let students = stmt
            .query_map([], student_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(students)
    }

    /// Case-insensitive substring search over name and department,
    /// active students only.
    pub fn search_students(&self, keyword: &str) -> Result<Vec<Student>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students
             WHERE (name LIKE '%' || ?1 || '%' OR department LIKE '%' || ?1 || '%')
               AND status = TRUE
             ORDER BY student_id"
        ))?;

        let students = stmt
            .query_map(params![keyword], student_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(students)
    }

    /// Total number of student rows, active and inactive.
    pub fn count_students(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
