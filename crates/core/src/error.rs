// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtlog_domain::{DomainError, Violation};

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The candidate action failed validation. Carries every violation
    /// found, in priority order.
    InvalidAction(Vec<Violation>),
    /// The candidate action targets a different match than the log.
    MatchScopeMismatch {
        /// The match the log is scoped to.
        expected: i64,
        /// The match the candidate named.
        found: i64,
    },
    /// A match-log command was passed to the directory transition.
    NotADirectoryCommand(&'static str),
    /// A directory command was passed to the match-log transition.
    NotAMatchCommand(&'static str),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidAction(violations) => {
                write!(f, "Invalid action ({} violations):", violations.len())?;
                for violation in violations {
                    write!(f, " [{violation}]")?;
                }
                Ok(())
            }
            Self::MatchScopeMismatch { expected, found } => write!(
                f,
                "Candidate targets match {found} but the log is scoped to match {expected}"
            ),
            Self::NotADirectoryCommand(name) => {
                write!(f, "{name} is not a directory command")
            }
            Self::NotAMatchCommand(name) => {
                write!(f, "{name} is not a match-log command")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
