// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Password used for the seeded admin in tests.
pub const ADMIN_PASSWORD: &str = "changeme";

pub fn enroll() -> Command {
    cargo_bin_cmd!("enroll")
}

/// Helper to create an initialized temp directory.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    enroll()
        .arg("init")
        .arg("--admin-password")
        .arg(ADMIN_PASSWORD)
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Helper to register a student and return the assigned ID.
pub fn register(temp: &TempDir, name: &str) -> String {
    let output = enroll()
        .arg("register")
        .arg(name)
        .arg("-o")
        .arg("id")
        .current_dir(temp.path())
        .output()
        .unwrap();

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
