// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the enrollrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'enroll init' first")]
    NotInitialized,

    #[error("already initialized at {0}\n  hint: pass --force to drop and recreate the database")]
    AlreadyInitialized(String),

    #[error("student not found: {0}")]
    StudentNotFound(String),

    #[error("student ID already exists: {0}")]
    DuplicateStudentId(String),

    #[error("student {0} is already inactive")]
    AlreadyInactive(String),

    #[error("student {0} is already active")]
    AlreadyActive(String),

    #[error("invalid gender: '{0}'\n  hint: valid values are: M, F, Other")]
    InvalidGender(String),

    #[error("invalid age: '{0}'\n  hint: a number between 10 and 100")]
    InvalidAge(String),

    #[error("invalid email: '{0}'")]
    InvalidEmail(String),

    #[error("invalid phone number: '{0}'\n  hint: 10-15 digits, optionally prefixed with +")]
    InvalidPhone(String),

    #[error("invalid student ID: '{0}'\n  hint: 1-10 characters, no whitespace")]
    InvalidStudentId(String),

    #[error("unknown attribute '{attr}'\n  hint: valid attributes are: name, age, gender, department, email, phone")]
    UnknownAttribute { attr: String },

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("{field} too short (min {min} chars)")]
    FieldTooShort { field: &'static str, min: usize },

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("failed to assign a unique student ID after multiple retries")]
    IdGenerationFailed,

    #[error("export path cannot be empty")]
    ExportPathEmpty,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("unknown config key '{key}'\n  hint: valid keys are: database, admin_user")]
    InvalidConfigKey { key: String },

    #[error("invalid database name: '{0}'\n  hint: a plain file name, no path separators")]
    InvalidDbName(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("corrupted data in database: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for enrollrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<ee_core::Error> for Error {
    fn from(e: ee_core::Error) -> Self {
        match e {
            ee_core::Error::StudentNotFound(id) => Error::StudentNotFound(id),
            ee_core::Error::InvalidGender(s) => Error::InvalidGender(s),
            ee_core::Error::InvalidPasswordHash(s) => Error::CorruptedData(s),
            ee_core::Error::Database(e) => Error::Database(e),
            ee_core::Error::Io(e) => Error::Io(e),
            ee_core::Error::CorruptedData(s) => Error::CorruptedData(s),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
