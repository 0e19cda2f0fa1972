// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs::File;
use std::io::{BufWriter, Write};

use chrono::Local;
use ee_core::{Database, Student};

use super::open_db;
use crate::cli::ExportFormat;
use crate::error::Result;
use crate::schema::StudentJson;
use crate::validate::validate_export_path;

/// CSV header row, matching the columns a registrar expects.
const CSV_HEADER: &str = "Student ID,Name,Age,Gender,Department,Email,Phone";

pub fn run(filepath: Option<String>, format: ExportFormat, all: bool) -> Result<()> {
    let filepath = filepath.unwrap_or_else(|| default_export_path(format));
    validate_export_path(&filepath)?;

    let (db, _, _) = open_db()?;
    run_impl(&db, &filepath, format, all)
}

/// Default export path: students_export_<timestamp>.<ext> in the
/// current directory.
fn default_export_path(format: ExportFormat) -> String {
    format!(
        "students_export_{}.{}",
        Local::now().format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(
    db: &Database,
    filepath: &str,
    format: ExportFormat,
    all: bool,
) -> Result<()> {
    let students = db.list_students(all)?;

    if students.is_empty() {
        println!("No students to export.");
        tracing::info!("export skipped: no students");
        return Ok(());
    }

    let file = File::create(filepath)?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            writeln!(writer, "{}", CSV_HEADER)?;
            for student in &students {
                writeln!(writer, "{}", csv_row(student))?;
            }
        }
        ExportFormat::Jsonl => {
            for student in &students {
                let json = serde_json::to_string(&StudentJson::from(student))?;
                writeln!(writer, "{}", json)?;
            }
        }
    }

    writer.flush()?;
    tracing::info!("exported {} students to {}", students.len(), filepath);
    println!("Exported {} students to {}", students.len(), filepath);

    Ok(())
}

/// One CSV row per student, in header order.
fn csv_row(student: &Student) -> String {
    let fields = [
        student.student_id.clone(),
        student.name.clone(),
        student.age.map(|a| a.to_string()).unwrap_or_default(),
        student
            .gender
            .map(|g| g.as_str().to_string())
            .unwrap_or_default(),
        student.department.clone().unwrap_or_default(),
        student.email.clone().unwrap_or_default(),
        student.phone.clone().unwrap_or_default(),
    ];

    fields
        .iter()
        .map(|f| csv_escape(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quote a CSV field when it contains a comma, quote, or newline
/// (RFC 4180).
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
