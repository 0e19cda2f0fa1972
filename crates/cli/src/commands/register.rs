// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ee_core::{Database, Gender, Student};

use super::open_db;
use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use crate::id::generate_unique_student_id;
use crate::schema::StudentJson;
use crate::validate::{
    validate_age, validate_department, validate_email, validate_name, validate_phone,
    validate_student_id,
};

/// Maximum number of retries for ID collision during registration.
const MAX_ID_COLLISION_RETRIES: u32 = 10;

#[allow(clippy::too_many_arguments)]
pub fn run(
    name: String,
    age: Option<i64>,
    gender: Option<String>,
    department: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    student_id: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    let (db, _, _) = open_db()?;
    run_impl(
        &db, name, age, gender, department, email, phone, student_id, output,
    )
}

/// Internal implementation that accepts db for testing.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_impl(
    db: &Database,
    name: String,
    age: Option<i64>,
    gender: Option<String>,
    department: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    student_id: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    let mut student = Student::new(String::new(), validate_name(&name)?);
    student.age = age.map(validate_age).transpose()?;
    student.gender = gender
        .as_deref()
        .map(|g| g.parse::<Gender>())
        .transpose()?;
    student.department = department.as_deref().map(validate_department).transpose()?;
    student.email = email.as_deref().map(validate_email).transpose()?;
    student.phone = phone.as_deref().map(validate_phone).transpose()?;

    let id = match student_id {
        Some(id) => {
            // Externally assigned ID: taken as-is, duplicates are an error
            let id = validate_student_id(&id)?;
            student.student_id = id.clone();
            match db.insert_student(&student) {
                Ok(()) => id,
                Err(ee_core::Error::Database(ref e)) if is_unique_constraint_error(e) => {
                    return Err(Error::DuplicateStudentId(id));
                }
                Err(e) => return Err(e.into()),
            }
        }
        None => insert_with_assigned_id(db, &mut student)?,
    };

    tracing::info!("student registered: {} - {}", id, student.name);

    match output {
        OutputFormat::Text => {
            println!("Registered {} (assigned ID: {})", student.name, id);
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&StudentJson::from(&student))?
            );
        }
        OutputFormat::Id => println!("{}", id),
    }

    Ok(())
}

/// Insert with a sequential ID, retrying on collision.
///
/// Two processes may both derive the same next ID from the row count and
/// race on the insert; the loser sees a UNIQUE violation and re-derives.
fn insert_with_assigned_id(db: &Database, student: &mut Student) -> Result<String> {
    for _ in 0..MAX_ID_COLLISION_RETRIES {
        let count = db.count_students()?;
        let id = generate_unique_student_id(count, |id| db.student_exists(id).unwrap_or(false));
        student.student_id = id.clone();

        match db.insert_student(student) {
            Ok(()) => return Ok(id),
            Err(ee_core::Error::Database(ref e)) if is_unique_constraint_error(e) => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Err(Error::IdGenerationFailed)
}

/// Check if a rusqlite error is a UNIQUE constraint violation.
fn is_unique_constraint_error(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _) => {
            sqlite_err.code == rusqlite::ErrorCode::ConstraintViolation
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "register_tests.rs"]
mod tests;
