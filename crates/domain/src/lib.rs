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

mod action;
mod error;
mod possession;
mod records;
mod registry;
mod resolver;
mod stats;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use action::{ActionDraft, ActionRecord};
pub use error::DomainError;
pub use possession::{
    FRESH_POSSESSION_ORIGINS, RETAINED_POSSESSION_ORIGINS, TurnSuggestion, changes_possession,
    replay_possession_numbers, suggest_next_turn,
};
pub use records::{Club, MatchRecord, MatchResult, Team};
pub use registry::{
    FAST_BREAK_FINALIZATIONS, POSITIONAL_FINALIZATIONS, valid_attack_types, valid_event_details,
    valid_finalization_details, valid_launch_zones,
};
pub use resolver::{DraftField, LegalChoices, Resolution, legal_choices, resolve_change};
pub use stats::{TeamAverages, compute_team_averages};
pub use types::{
    ActionOrigin, AttackType, EventDetail, EventKind, FinalizationDetail, LaunchZone, TeamSide,
};
pub use validation::{Violation, validate_action};
