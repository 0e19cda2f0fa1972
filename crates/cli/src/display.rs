// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ee_core::Student;

/// Format a single student line for list output.
pub fn format_student_line(student: &Student) -> String {
    let department = student.department.as_deref().unwrap_or("-");
    format!(
        "- [{}] ({}) {}: {}",
        student.student_id, student.status, student.name, department
    )
}

/// Format student details for the show command.
pub fn format_student_details(student: &Student) -> String {
    let mut output = Vec::new();

    // Header: [id] name
    output.push(format!("[{}] {}", student.student_id, student.name));

    output.push(format!("Status: {}", student.status));
    if let Some(age) = student.age {
        output.push(format!("Age: {}", age));
    }
    if let Some(gender) = student.gender {
        output.push(format!("Gender: {}", gender));
    }
    if let Some(department) = &student.department {
        output.push(format!("Department: {}", department));
    }
    if let Some(email) = &student.email {
        output.push(format!("Email: {}", email));
    }
    if let Some(phone) = &student.phone {
        output.push(format!("Phone: {}", phone));
    }

    output.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
