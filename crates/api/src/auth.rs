// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization for API operations.

use crate::error::AuthError;
use courtlog_audit::Actor;
use courtlog_store::{MemoryStore, OperatorData, SessionData, verify_password};
use time::Duration;
use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;

/// Roles an operator account can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Full access, including operator registration and the audit trail.
    Admin,
    /// Manages clubs' teams and matches.
    ClubManager,
    /// Records match actions and manages matches.
    Coach,
}

impl Role {
    /// Parses a stored role name.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` for an unknown role name.
    pub fn parse(role_name: &str) -> Result<Self, AuthError> {
        match role_name {
            "Admin" => Ok(Self::Admin),
            "ClubManager" => Ok(Self::ClubManager),
            "Coach" => Ok(Self::Coach),
            other => Err(AuthError::AuthenticationFailed {
                reason: format!("Unknown role '{other}'"),
            }),
        }
    }

    /// Returns the stored name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::ClubManager => "ClubManager",
            Self::Coach => "Coach",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated operator with a resolved role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The operator identifier.
    pub id: i64,
    /// The operator's role.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Builds the audit `Actor` for this operator.
    #[must_use]
    pub fn to_audit_actor(&self, operator: &OperatorData) -> Actor {
        Actor::new(
            format!("operator-{}", self.id),
            format!("operator:{}", operator.login_name),
        )
    }
}

/// Authorization checks, one per guarded operation.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require(
        actor: &AuthenticatedActor,
        allowed: &[Role],
        action: &str,
        required_role: &str,
    ) -> Result<(), AuthError> {
        if allowed.contains(&actor.role) {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: required_role.to_string(),
            })
        }
    }

    /// Checks whether the actor may create clubs.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` if the actor is not an Admin.
    pub fn authorize_manage_clubs(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, &[Role::Admin], "manage clubs", "Admin")
    }

    /// Checks whether the actor may create teams.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` if the actor is neither an
    /// Admin nor a `ClubManager`.
    pub fn authorize_manage_teams(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(
            actor,
            &[Role::Admin, Role::ClubManager],
            "manage teams",
            "Admin or ClubManager",
        )
    }

    /// Checks whether the actor may create matches and set results.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` for an unauthenticated actor;
    /// every authenticated role may manage matches.
    pub fn authorize_manage_matches(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(
            actor,
            &[Role::Admin, Role::ClubManager, Role::Coach],
            "manage matches",
            "any",
        )
    }

    /// Checks whether the actor may record and delete match actions.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` if the actor is neither an
    /// Admin nor a Coach.
    pub fn authorize_record_actions(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(
            actor,
            &[Role::Admin, Role::Coach],
            "record actions",
            "Admin or Coach",
        )
    }

    /// Checks whether the actor may register operator accounts.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` if the actor is not an Admin.
    pub fn authorize_register_operator(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, &[Role::Admin], "register operators", "Admin")
    }

    /// Checks whether the actor may read the audit trail.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` if the actor is not an Admin.
    pub fn authorize_view_audit(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, &[Role::Admin], "view audit trail", "Admin")
    }
}

/// Session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// How long a session remains valid.
    pub const DEFAULT_SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Authenticates an operator by login name and password and opens
    /// a session.
    ///
    /// Returns the session token, the authenticated actor, and the
    /// operator record.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` for an unknown login
    /// name, a wrong password, a disabled account, or an unparseable
    /// stored role.
    pub fn login(
        store: &mut MemoryStore,
        login_name: &str,
        password: &str,
    ) -> Result<(String, AuthenticatedActor, OperatorData), AuthError> {
        let operator: OperatorData = store
            .operator_by_login(login_name)
            .map_err(|_| Self::bad_credentials())?
            .clone();

        if operator.disabled {
            return Err(AuthError::AuthenticationFailed {
                reason: format!("Operator '{login_name}' is disabled"),
            });
        }

        let matches: bool =
            verify_password(password, &operator.password_hash).map_err(|err| {
                AuthError::AuthenticationFailed {
                    reason: format!("Password verification failed: {err}"),
                }
            })?;
        if !matches {
            return Err(Self::bad_credentials());
        }

        let role: Role = Role::parse(&operator.role_name)?;
        let actor = AuthenticatedActor {
            id: operator.operator_id,
            role,
        };

        let token: String = Self::generate_session_token();
        let expires_at: String = (OffsetDateTime::now_utc() + Self::DEFAULT_SESSION_EXPIRATION)
            .format(&Iso8601::DEFAULT)
            .map_err(|err| AuthError::AuthenticationFailed {
                reason: format!("Failed to compute session expiry: {err}"),
            })?;
        store.create_session(SessionData {
            token: token.clone(),
            operator_id: operator.operator_id,
            expires_at,
        });

        Ok((token, actor, operator))
    }

    /// Resolves a session token into an authenticated actor.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` for an unknown or
    /// expired token, a disabled account, or an unparseable stored role.
    pub fn validate_session(
        store: &MemoryStore,
        token: &str,
    ) -> Result<(AuthenticatedActor, OperatorData), AuthError> {
        let operator: OperatorData = store
            .validate_session(token)
            .map_err(|err| AuthError::AuthenticationFailed {
                reason: err.to_string(),
            })?
            .clone();
        let role: Role = Role::parse(&operator.role_name)?;
        Ok((
            AuthenticatedActor {
                id: operator.operator_id,
                role,
            },
            operator,
        ))
    }

    /// Closes a session. Unknown tokens are ignored.
    pub fn logout(store: &mut MemoryStore, token: &str) {
        store.delete_session(token);
    }

    fn generate_session_token() -> String {
        let timestamp: i64 = OffsetDateTime::now_utc().unix_timestamp();
        format!("session_{timestamp}_{}", rand::random::<u64>())
    }

    // Deliberately the same message for unknown logins and wrong
    // passwords.
    fn bad_credentials() -> AuthError {
        AuthError::AuthenticationFailed {
            reason: String::from("Invalid login name or password"),
        }
    }
}
