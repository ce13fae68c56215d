// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;

/// A stored operator account.
///
/// The role travels as its string name; the API layer parses it into the
/// typed role enum at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorData {
    /// The canonical numeric identifier.
    pub operator_id: i64,
    /// Login name. Unique, case-sensitive.
    pub login_name: String,
    /// Name shown in clients and audit trails.
    pub display_name: String,
    /// Role name (e.g., "Admin", "ClubManager", "Coach").
    pub role_name: String,
    /// Bcrypt hash of the operator's password.
    pub password_hash: String,
    /// Disabled operators cannot log in or hold sessions.
    pub disabled: bool,
}

/// Hashes a plaintext password with bcrypt at the default cost.
///
/// # Errors
///
/// Returns `StoreError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, StoreError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| StoreError::PasswordHash(e.to_string()))
}

/// Verifies a plaintext password against a stored bcrypt hash.
///
/// # Errors
///
/// Returns `StoreError::PasswordHash` if the hash is malformed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, StoreError> {
    bcrypt::verify(password, password_hash).map_err(|e| StoreError::PasswordHash(e.to_string()))
}
