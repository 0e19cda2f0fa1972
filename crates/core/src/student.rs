// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core student record types.
//!
//! This module contains the fundamental data types: Student, Gender, and
//! EnrollStatus.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Self-reported gender of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
    Other,
}

impl Gender {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::M => "M",
            Gender::F => "F",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "M" => Ok(Gender::M),
            "F" => Ok(Gender::F),
            "OTHER" => Ok(Gender::Other),
            _ => Err(Error::InvalidGender(s.to_string())),
        }
    }
}

/// Enrollment state of a student record.
///
/// Stored as a boolean column; removal is a soft delete that flips the
/// flag to inactive, never a row deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollStatus {
    /// Enrolled and visible in default listings.
    Active,
    /// Soft-deleted; hidden unless explicitly requested.
    Inactive,
}

impl EnrollStatus {
    /// Returns the string representation used in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollStatus::Active => "active",
            EnrollStatus::Inactive => "inactive",
        }
    }

    /// The boolean value stored in the `status` column.
    pub fn as_bool(&self) -> bool {
        matches!(self, EnrollStatus::Active)
    }

    /// Maps the stored boolean back to a status.
    pub fn from_bool(active: bool) -> Self {
        if active {
            EnrollStatus::Active
        } else {
            EnrollStatus::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        self.as_bool()
    }
}

impl fmt::Display for EnrollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary entity representing an enrolled student.
///
/// `student_id` is a natural key (e.g. "S1001"): externally meaningful,
/// assignable by the operator, and never regenerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier, at most 10 characters.
    pub student_id: String,
    /// Full name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Enrollment state; new records default to active.
    pub status: EnrollStatus,
}

impl Student {
    /// Creates a new active student with all optional fields unset.
    pub fn new(student_id: String, name: String) -> Self {
        Student {
            student_id,
            name,
            age: None,
            gender: None,
            department: None,
            email: None,
            phone: None,
            status: EnrollStatus::Active,
        }
    }
}

#[cfg(test)]
#[path = "student_tests.rs"]
mod tests;
