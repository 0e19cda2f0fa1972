// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

#[test]
fn show_prints_effective_values() {
    let temp = init_temp();

    enroll()
        .args(["config", "show"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("database = student_db.sqlite3"))
        .stdout(predicate::str::contains("admin_user = admin"));
}

#[test]
fn set_admin_user_changes_verify_default() {
    let temp = init_temp();

    enroll()
        .args(["admin", "add", "registrar", "--password", "pw123456"])
        .current_dir(temp.path())
        .assert()
        .success();

    enroll()
        .args(["config", "set", "admin_user", "registrar"])
        .current_dir(temp.path())
        .assert()
        .success();

    // verify without -u now targets registrar
    enroll()
        .args(["admin", "verify", "-p", "pw123456"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("registrar"));
}

#[test]
fn set_rejects_unknown_key() {
    let temp = init_temp();

    enroll()
        .args(["config", "set", "color", "always"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn json_output() {
    let temp = init_temp();

    let output = enroll()
        .args(["config", "show", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["database"], "student_db.sqlite3");
    assert_eq!(json["admin_user"], "admin");
}
