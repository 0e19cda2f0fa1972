// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ee_core::Database;

use super::open_db;
use crate::cli::OutputFormat;
use crate::display::format_student_details;
use crate::error::Result;
use crate::schema::StudentJson;

pub fn run(id: &str, output: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    run_impl(&db, id, output)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &Database, id: &str, output: OutputFormat) -> Result<()> {
    // Unlike list/search, show also finds inactive students
    let student = db.get_student(id)?;

    match output {
        OutputFormat::Text | OutputFormat::Id => {
            println!("{}", format_student_details(&student));
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&StudentJson::from(&student))?
            );
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
