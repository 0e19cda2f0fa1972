// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ee_core::Database;

use super::open_db;
use crate::cli::OutputFormat;
use crate::display::format_student_line;
use crate::error::Result;
use crate::schema::{StudentJson, StudentListJson};

pub fn run(keyword: &str, output: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    run_impl(&db, keyword, output)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &Database, keyword: &str, output: OutputFormat) -> Result<()> {
    let students = db.search_students(keyword)?;

    match output {
        OutputFormat::Text => {
            if students.is_empty() {
                println!("No matching students found.");
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
#[path = "search_tests.rs"]
mod tests;
