// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Administrator account record.

use serde::Serialize;

/// An administrator account.
///
/// `id` is a surrogate key assigned by the database. Usernames are not
/// unique; lookups by name resolve to the earliest matching row.
/// The password hash is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Admin {
    pub id: i64,
    pub username: String,
    /// Salted hash in `sha256$<salt>$<digest>` form (see [`crate::auth`]).
    #[serde(skip_serializing)]
    pub password_hash: String,
}
