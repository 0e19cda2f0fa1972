// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

#[test]
fn test_gender_round_trip() {
    for gender in [Gender::M, Gender::F, Gender::Other] {
        let parsed: Gender = gender.as_str().parse().unwrap();
        assert_eq!(parsed, gender);
    }
}

#[test]
fn test_gender_parse_is_case_insensitive() {
    assert_eq!("m".parse::<Gender>().unwrap(), Gender::M);
    assert_eq!("f".parse::<Gender>().unwrap(), Gender::F);
    assert_eq!("other".parse::<Gender>().unwrap(), Gender::Other);
    assert_eq!("OTHER".parse::<Gender>().unwrap(), Gender::Other);
}

#[test]
fn test_gender_parse_rejects_unknown() {
    let err = "X".parse::<Gender>().unwrap_err();
    assert!(matches!(err, Error::InvalidGender(_)));
}

#[test]
fn test_status_bool_mapping() {
    assert!(EnrollStatus::Active.as_bool());
    assert!(!EnrollStatus::Inactive.as_bool());
    assert_eq!(EnrollStatus::from_bool(true), EnrollStatus::Active);
    assert_eq!(EnrollStatus::from_bool(false), EnrollStatus::Inactive);
}

#[test]
fn test_status_display() {
    assert_eq!(EnrollStatus::Active.to_string(), "active");
    assert_eq!(EnrollStatus::Inactive.to_string(), "inactive");
}

#[test]
fn test_new_student_defaults() {
    let student = Student::new("S1001".to_string(), "Alice Johnson".to_string());
    assert_eq!(student.student_id, "S1001");
    assert_eq!(student.name, "Alice Johnson");
    assert!(student.age.is_none());
    assert!(student.gender.is_none());
    assert!(student.department.is_none());
    assert!(student.email.is_none());
    assert!(student.phone.is_none());
    assert_eq!(student.status, EnrollStatus::Active);
}
