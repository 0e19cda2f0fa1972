// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed JSON output shapes.
//!
//! Keeps the machine-readable output stable and independent of the
//! storage types.

use ee_core::{Admin, Student};
use serde::Serialize;

/// One student in JSON output and JSONL export.
#[derive(Serialize)]
pub struct StudentJson {
    pub student_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub status: String,
}

impl From<&Student> for StudentJson {
    fn from(student: &Student) -> Self {
        StudentJson {
            student_id: student.student_id.clone(),
            name: student.name.clone(),
            age: student.age,
            gender: student.gender.map(|g| g.as_str().to_string()),
            department: student.department.clone(),
            email: student.email.clone(),
            phone: student.phone.clone(),
            status: student.status.as_str().to_string(),
        }
    }
}

/// Envelope for list and search JSON output.
#[derive(Serialize)]
pub struct StudentListJson {
    pub students: Vec<StudentJson>,
    pub total: usize,
}

impl StudentListJson {
    pub fn new(students: Vec<StudentJson>) -> Self {
        let total = students.len();
        StudentListJson { students, total }
    }
}

/// One admin account in JSON output. Never carries the hash.
#[derive(Serialize)]
pub struct AdminJson {
    pub id: i64,
    pub username: String,
}

impl From<&Admin> for AdminJson {
    fn from(admin: &Admin) -> Self {
        AdminJson {
            id: admin.id,
            username: admin.username.clone(),
        }
    }
}
