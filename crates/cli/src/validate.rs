// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input validation for student and admin fields.
//!
//! Length limits mirror the column widths the schema documents
//! (VARCHAR-style widths SQLite itself does not enforce).

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

// Input length limits
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MIN_AGE: i64 = 10;
pub const MAX_AGE: i64 = 100;
pub const MAX_STUDENT_ID_LENGTH: usize = 10;
pub const MAX_DEPARTMENT_LENGTH: usize = 50;
pub const MAX_EMAIL_LENGTH: usize = 100;
pub const MAX_PHONE_LENGTH: usize = 15;
pub const MAX_USERNAME_LENGTH: usize = 50;

// Pre-compiled patterns; hard-coded and known-valid, verified at test time.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^\+?\d{10,15}$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Validate and trim a student name.
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field: "Name" });
    }
    if trimmed.len() < MIN_NAME_LENGTH {
        return Err(Error::FieldTooShort {
            field: "Name",
            min: MIN_NAME_LENGTH,
        });
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(Error::FieldTooLong {
            field: "Name",
            actual: trimmed.len(),
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

/// Validate that an age is in the accepted range.
pub fn validate_age(age: i64) -> Result<i64> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(Error::InvalidAge(age.to_string()));
    }
    Ok(age)
}

/// Validate and trim a department name.
pub fn validate_department(department: &str) -> Result<String> {
    let trimmed = department.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field: "Department" });
    }
    if trimmed.len() > MAX_DEPARTMENT_LENGTH {
        return Err(Error::FieldTooLong {
            field: "Department",
            actual: trimmed.len(),
            max: MAX_DEPARTMENT_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

/// Validate an email address (shape check only).
pub fn validate_email(email: &str) -> Result<String> {
    let trimmed = email.trim();
    if trimmed.len() > MAX_EMAIL_LENGTH {
        return Err(Error::FieldTooLong {
            field: "Email",
            actual: trimmed.len(),
            max: MAX_EMAIL_LENGTH,
        });
    }
    if !EMAIL_RE.is_match(trimmed) {
        return Err(Error::InvalidEmail(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Validate a phone number: 10-15 digits, optional leading +.
pub fn validate_phone(phone: &str) -> Result<String> {
    let trimmed = phone.trim();
    if trimmed.len() > MAX_PHONE_LENGTH {
        return Err(Error::FieldTooLong {
            field: "Phone",
            actual: trimmed.len(),
            max: MAX_PHONE_LENGTH,
        });
    }
    if !PHONE_RE.is_match(trimmed) {
        return Err(Error::InvalidPhone(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Validate an externally supplied student ID.
pub fn validate_student_id(id: &str) -> Result<String> {
    let trimmed = id.trim();
    if trimmed.is_empty()
        || trimmed.len() > MAX_STUDENT_ID_LENGTH
        || trimmed.chars().any(char::is_whitespace)
    {
        return Err(Error::InvalidStudentId(id.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Validate and trim an admin username.
pub fn validate_username(username: &str) -> Result<String> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field: "Username" });
    }
    if trimmed.len() > MAX_USERNAME_LENGTH {
        return Err(Error::FieldTooLong {
            field: "Username",
            actual: trimmed.len(),
            max: MAX_USERNAME_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

/// Validate an export file path.
pub fn validate_export_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(Error::ExportPathEmpty);
    }
    Ok(())
}

/// Validate a database file name: a plain file name, no path separators.
pub fn validate_db_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.contains('/') || trimmed.contains('\\') {
        return Err(Error::InvalidDbName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
