// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ee_core::Database;

use super::open_db;
use crate::cli::OutputFormat;
use crate::display::format_student_line;
use crate::error::Result;
use crate::schema::{StudentJson, StudentListJson};

pub fn run(all: bool, department: Option<String>, output: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    run_impl(&db, all, department, output)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(
    db: &Database,
    all: bool,
    department: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    let mut students = db.list_students(all)?;

    if let Some(wanted) = department {
        students.retain(|s| {
            s.department
                .as_deref()
                .is_some_and(|d| d.eq_ignore_ascii_case(&wanted))
        });
    }

    match output {
        OutputFormat::Text => {
            if students.is_empty() {
                println!("No students found.");
                return Ok(());
            }
            for student in &students {
                println!("{}", format_student_line(student));
            }
        }
        OutputFormat::Json => {
            let json = StudentListJson::new(students.iter().map(StudentJson::from).collect());
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Id => {
            for student in &students {
                println!("{}", student.student_id);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
