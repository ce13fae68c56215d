// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! API boundary layer for the Courtlog match recorder.
//!
//! Sits between the transport layer and the functional core:
//! authenticates operators, authorizes each operation, translates
//! requests into commands, and translates domain and core errors into
//! the API error contract.

pub mod auth;
pub mod capabilities;
pub mod csv_export;
pub mod error;
pub mod handlers;
pub mod password_policy;
pub mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthenticationService, AuthorizationService, Role};
pub use capabilities::{Capability, OperatorCapabilities, compute_capabilities};
pub use csv_export::export_match_actions;
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
