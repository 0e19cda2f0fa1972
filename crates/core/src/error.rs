// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ee-core operations.

use thiserror::Error;

/// All possible errors that can occur in ee-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("student not found: {0}")]
    StudentNotFound(String),

    #[error("invalid gender: '{0}'\n  hint: valid values are: M, F, Other")]
    InvalidGender(String),

    #[error("invalid password hash: {0}")]
    InvalidPasswordHash(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for ee-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
