// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authenticated operators.
//!
//! Clients use the capability set to show or hide UI affordances; the
//! server still enforces authorization on every operation.

use crate::auth::{AuthenticatedActor, Role};
use serde::{Deserialize, Serialize};

/// Whether an operation is available to an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// The operation is available.
    Allowed,
    /// The operation is not available.
    Denied,
}

impl Capability {
    const fn from_bool(allowed: bool) -> Self {
        if allowed { Self::Allowed } else { Self::Denied }
    }
}

/// The full capability set of one operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorCapabilities {
    /// Creating clubs.
    pub manage_clubs: Capability,
    /// Creating teams.
    pub manage_teams: Capability,
    /// Creating matches and recording final scores.
    pub manage_matches: Capability,
    /// Recording and deleting match actions.
    pub record_actions: Capability,
    /// Registering operator accounts.
    pub register_operators: Capability,
    /// Reading the audit trail.
    pub view_audit: Capability,
}

/// Computes the capability set for an authenticated operator.
#[must_use]
pub const fn compute_capabilities(actor: &AuthenticatedActor) -> OperatorCapabilities {
    let is_admin: bool = matches!(actor.role, Role::Admin);
    OperatorCapabilities {
        manage_clubs: Capability::from_bool(is_admin),
        manage_teams: Capability::from_bool(matches!(actor.role, Role::Admin | Role::ClubManager)),
        manage_matches: Capability::from_bool(true),
        record_actions: Capability::from_bool(matches!(actor.role, Role::Admin | Role::Coach)),
        register_operators: Capability::from_bool(is_admin),
        view_audit: Capability::from_bool(is_admin),
    }
}
