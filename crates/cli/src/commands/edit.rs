// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ee_core::{Database, Gender};

use super::open_db;
use crate::error::{Error, Result};
use crate::validate::{
    validate_age, validate_department, validate_email, validate_name, validate_phone,
};

pub fn run(id: &str, attr: &str, value: &str) -> Result<()> {
    let (db, _, _) = open_db()?;
    run_impl(&db, id, attr, value)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &Database, id: &str, attr: &str, value: &str) -> Result<()> {
    let mut student = db.get_student(id)?;

    // 'none' clears optional attributes
    let cleared = value.eq_ignore_ascii_case("none");

    match attr {
        "name" => {
            student.name = validate_name(value)?;
        }
        "age" => {
            student.age = if cleared {
                None
            } else {
                let age: i64 = value
                    .parse()
                    .map_err(|_| Error::InvalidAge(value.to_string()))?;
                Some(validate_age(age)?)
            };
        }
        "gender" => {
            student.gender = if cleared {
                None
            } else {
                Some(value.parse::<Gender>().map_err(Error::from)?)
            };
        }
        "department" => {
            student.department = if cleared {
                None
            } else {
                Some(validate_department(value)?)
            };
        }
        "email" => {
            student.email = if cleared {
                None
            } else {
                Some(validate_email(value)?)
            };
        }
        "phone" => {
            student.phone = if cleared {
                None
            } else {
                Some(validate_phone(value)?)
            };
        }
        _ => {
            return Err(Error::UnknownAttribute {
                attr: attr.to_string(),
            })
        }
    }

    db.update_student(&student)?;
    tracing::info!("student {} updated: {} changed", id, attr);
    println!("Updated {} of {}", attr, id);

    Ok(())
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
