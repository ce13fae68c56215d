// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction for the server.
//!
//! Provides the Axum extractor that validates session tokens and
//! enforces authentication at the server boundary.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use courtlog_api::{AuthenticatedActor, AuthenticationService};
use courtlog_store::OperatorData;
use tracing::{debug, warn};

use crate::AppState;

/// Extractor for authenticated operators.
///
/// Validates the `Authorization: Bearer <token>` header against the
/// session store and yields the authenticated actor and the operator
/// record.
///
/// # Errors
///
/// Rejects with HTTP 401 Unauthorized if the header is missing or
/// malformed, the token is unknown or expired, or the operator account
/// is disabled.
pub struct SessionOperator(pub AuthenticatedActor, pub OperatorData);

impl FromRequestParts<AppState> for SessionOperator {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token: String = bearer_token(&parts.headers)?;

        let store = state.store.lock().await;
        let (actor, operator) =
            AuthenticationService::validate_session(&store, &token).map_err(|e| {
                warn!(error = %e, "Session validation failed");
                SessionError::InvalidSession(e.to_string())
            })?;

        debug!(
            login_name = %operator.login_name,
            role = ?actor.role,
            "Session validated successfully"
        );

        Ok(Self(actor, operator))
    }
}

/// Extracts the bearer token from a request's Authorization header.
///
/// # Errors
///
/// Returns a `SessionError` if the header is missing or malformed.
pub fn bearer_token(headers: &axum::http::HeaderMap) -> Result<String, SessionError> {
    let auth_header: &str = headers
        .get("Authorization")
        .ok_or_else(|| {
            debug!("Missing Authorization header");
            SessionError::MissingAuthorizationHeader
        })?
        .to_str()
        .map_err(|_| {
            warn!("Invalid Authorization header encoding");
            SessionError::InvalidAuthorizationHeader
        })?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::to_string)
        .ok_or_else(|| {
            warn!("Authorization header does not start with 'Bearer '");
            SessionError::InvalidAuthorizationHeader
        })
}

/// Session extraction errors, converted to HTTP 401 responses.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// Session validation failed.
    InvalidSession(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingAuthorizationHeader => {
                (StatusCode::UNAUTHORIZED, "Missing Authorization header")
            }
            Self::InvalidAuthorizationHeader => (
                StatusCode::UNAUTHORIZED,
                "Invalid Authorization header format. Expected: 'Bearer <token>'",
            ),
            Self::InvalidSession(reason) => {
                return (
                    StatusCode::UNAUTHORIZED,
                    format!("Session validation failed: {reason}"),
                )
                    .into_response();
            }
        };

        (status, message).into_response()
    }
}
