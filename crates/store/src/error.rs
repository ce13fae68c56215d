// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The requested match has no log in the store.
    #[error("Match not found: {0}")]
    MatchNotFound(i64),
    /// The requested operator was not found.
    #[error("Operator not found: {0}")]
    OperatorNotFound(String),
    /// An operator with this login name already exists.
    #[error("Login name already taken: {0}")]
    DuplicateLoginName(String),
    /// The session token is unknown.
    #[error("Session not found")]
    SessionNotFound,
    /// The session exists but has expired.
    #[error("Session expired")]
    SessionExpired,
    /// The operator account is disabled.
    #[error("Operator is disabled: {0}")]
    OperatorDisabled(String),
    /// Password hashing or verification failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
    /// A stored timestamp could not be parsed.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
