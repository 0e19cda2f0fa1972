// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

#[test]
fn test_hash_format() {
    let hash = hash_password("hunter2");
    let parts: Vec<&str> = hash.split('$').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "sha256");
    assert_eq!(parts[1].len(), 16);
    assert_eq!(parts[2].len(), 64);
}

#[test]
fn test_hash_never_contains_plaintext() {
    let hash = hash_password("topsecret");
    assert!(!hash.contains("topsecret"));
}

#[test]
fn test_verify_accepts_correct_password() {
    let hash = hash_password("hunter2");
    assert!(verify_password(&hash, "hunter2").unwrap());
}

#[test]
fn test_verify_rejects_wrong_password() {
    let hash = hash_password("hunter2");
    assert!(!verify_password(&hash, "hunter3").unwrap());
    assert!(!verify_password(&hash, "").unwrap());
}

#[test]
fn test_verify_rejects_malformed_hash() {
    let err = verify_password("not-a-hash", "pw").unwrap_err();
    assert!(matches!(err, Error::InvalidPasswordHash(_)));
}

#[test]
fn test_verify_rejects_unknown_scheme() {
    let err = verify_password("md5$abcd$1234", "pw").unwrap_err();
    assert!(matches!(err, Error::InvalidPasswordHash(_)));
}

#[test]
fn test_salts_differ_between_hashes() {
    let a = hash_password("same");
    let b = hash_password("same");
    // Same password, fresh salt each time
    assert_ne!(a, b);
}

#[test]
fn test_generate_secret_length() {
    assert_eq!(generate_secret("ctx", 16).len(), 16);
    assert_eq!(generate_secret("ctx", 64).len(), 64);
}
