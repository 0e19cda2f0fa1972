// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Salted password hashing for administrator credentials.
//!
//! Stored format: `sha256$<salt>$<digest>` where the salt is 16 hex
//! characters and the digest is the hex SHA-256 of salt followed by
//! password. The plain password never reaches the database.

use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};
use subtle::ConstantTimeEq;

use crate::error::{Error, Result};

const SCHEME: &str = "sha256";
const SALT_LEN: usize = 16;

/// Process-local sequence so secrets generated within one clock tick
/// still differ.
static SEQ: AtomicU64 = AtomicU64::new(0);

/// Derive a hex secret of `len` characters (at most 64) from the given
/// context string, the current time, and a process-local sequence.
///
/// Used for salts and for one-shot generated passwords. Not a CSPRNG;
/// the input includes nanosecond-resolution time, which is enough to
/// avoid reuse across invocations.
pub fn generate_secret(context: &str, len: usize) -> String {
    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default();
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    let digest = Sha256::digest(format!("{context}:{nanos}:{seq}").as_bytes());
    let mut out = hex::encode(digest);
    out.truncate(len);
    out
}

/// Hash a password with a fresh salt.
pub fn hash_password(password: &str) -> String {
    let salt = generate_secret(password, SALT_LEN);
    hash_with_salt(&salt, password)
}

fn hash_with_salt(salt: &str, password: &str) -> String {
    let digest = Sha256::digest(format!("{salt}{password}").as_bytes());
    format!("{SCHEME}${salt}${}", hex::encode(digest))
}

/// Check a candidate password against a stored hash.
///
/// The digest comparison is constant-time. Returns an error only when
/// the stored value is not in the expected format; a wrong password is
/// `Ok(false)`.
pub fn verify_password(stored: &str, password: &str) -> Result<bool> {
    let mut parts = stored.splitn(3, '$');
    let (scheme, salt, digest) = match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(salt), Some(digest)) => (scheme, salt, digest),
        _ => {
            return Err(Error::InvalidPasswordHash(
                "expected sha256$<salt>$<digest>".to_string(),
            ))
        }
    };

    if scheme != SCHEME {
        return Err(Error::InvalidPasswordHash(format!(
            "unsupported scheme '{scheme}'"
        )));
    }

    let candidate = Sha256::digest(format!("{salt}{password}").as_bytes());
    let candidate_hex = hex::encode(candidate);
    Ok(candidate_hex.as_bytes().ct_eq(digest.as_bytes()).into())
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
