// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password_policy::PasswordPolicyError;
use courtlog::CoreError;
use courtlog_domain::{DomainError, Violation};
use courtlog_store::StoreError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A single domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A candidate action violated recording rules. Carries every
    /// violation found, in priority order, for clients to display as a
    /// list.
    RuleViolations(Vec<Violation>),
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
    /// Password policy violation.
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::RuleViolations(violations) => {
                write!(f, "Action violates {} rules:", violations.len())?;
                for violation in violations {
                    write!(f, " [{violation}]")?;
                }
                Ok(())
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MatchNotFound(id) => Self::ResourceNotFound {
                resource_type: String::from("Match"),
                message: format!("Match {id} does not exist"),
            },
            StoreError::OperatorNotFound(who) => Self::ResourceNotFound {
                resource_type: String::from("Operator"),
                message: format!("Operator '{who}' does not exist"),
            },
            StoreError::DuplicateLoginName(name) => Self::DomainRuleViolation {
                rule: String::from("unique_login_name"),
                message: format!("Login name '{name}' is already taken"),
            },
            StoreError::SessionNotFound => Self::AuthenticationFailed {
                reason: String::from("Unknown session token"),
            },
            StoreError::SessionExpired => Self::AuthenticationFailed {
                reason: String::from("Session has expired"),
            },
            StoreError::OperatorDisabled(name) => Self::AuthenticationFailed {
                reason: format!("Operator '{name}' is disabled"),
            },
            StoreError::PasswordHash(msg) | StoreError::InvalidTimestamp(msg) => Self::Internal {
                message: msg,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownEnumValue { field, value } => ApiError::DomainRuleViolation {
            rule: String::from("unknown_enum_value"),
            message: format!("Unknown value '{value}' for field '{field}'"),
        },
        DomainError::InvalidMatchResult(value) => ApiError::InvalidInput {
            field: String::from("result"),
            message: format!("Expected a score of the form \"24-22\", got '{value}'"),
        },
        DomainError::InvalidName { field, message } => ApiError::InvalidInput {
            field: field.to_string(),
            message,
        },
        DomainError::InvalidDate(value) => ApiError::InvalidInput {
            field: String::from("played_on"),
            message: format!("Expected an ISO-8601 date (YYYY-MM-DD), got '{value}'"),
        },
        DomainError::InvalidPossessionNumber(n) => ApiError::InvalidInput {
            field: String::from("possession_number"),
            message: format!("Possession number must be at least 1, got {n}"),
        },
        DomainError::ClubNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Club"),
            message: format!("Club {id} does not exist"),
        },
        DomainError::TeamNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Team"),
            message: format!("Team {id} does not exist"),
        },
        DomainError::MatchNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Match"),
            message: format!("Match {id} does not exist"),
        },
        DomainError::DuplicateClubName(name) => ApiError::DomainRuleViolation {
            rule: String::from("unique_club_name"),
            message: format!("A club named '{name}' already exists"),
        },
        DomainError::DuplicateTeamName { club_id, name } => ApiError::DomainRuleViolation {
            rule: String::from("unique_team_name"),
            message: format!("Club {club_id} already has a team named '{name}'"),
        },
        DomainError::NoActionsRecorded(match_id) => ApiError::DomainRuleViolation {
            rule: String::from("no_actions_recorded"),
            message: format!("Match {match_id} has no recorded actions to delete"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::InvalidAction(violations) => ApiError::RuleViolations(violations),
        CoreError::MatchScopeMismatch { expected, found } => ApiError::InvalidInput {
            field: String::from("match_id"),
            message: format!("Candidate targets match {found}, log is scoped to match {expected}"),
        },
        CoreError::NotADirectoryCommand(name) | CoreError::NotAMatchCommand(name) => {
            ApiError::Internal {
                message: format!("Command {name} applied to the wrong state scope"),
            }
        }
    }
}
