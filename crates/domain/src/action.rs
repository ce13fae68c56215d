// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{
    ActionOrigin, AttackType, EventDetail, EventKind, FinalizationDetail, LaunchZone, TeamSide,
};
use serde::{Deserialize, Serialize};

/// One recorded discrete play event within a match.
///
/// `possession_changed` is derived from the possession-transition rule,
/// never set directly by a recorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The canonical numeric identifier assigned by the store.
    /// `None` indicates the action has not been persisted yet.
    pub action_id: Option<i64>,
    /// The owning match.
    pub match_id: i64,
    /// Which team-possession this action belongs to (1-based).
    pub possession_number: u32,
    /// The side that performed the action.
    pub team_side: TeamSide,
    /// Tactical context of the possession.
    pub attack_type: AttackType,
    /// How the possession started.
    pub action_origin: ActionOrigin,
    /// The terminal event of the action.
    pub event_kind: EventKind,
    /// How the shot was taken. Present for shots, absent for turnovers.
    pub finalization_detail: Option<FinalizationDetail>,
    /// Court zone of the shot. Same presence rule as `finalization_detail`.
    pub launch_zone: Option<LaunchZone>,
    /// Sub-classification of non-goal events. Forbidden for goals.
    pub event_detail: Option<EventDetail>,
    /// Whether this action ended the possession. Derived.
    pub possession_changed: bool,
}

impl ActionRecord {
    /// Returns a copy of this record with a persisted identifier.
    #[must_use]
    pub fn with_id(mut self, action_id: i64) -> Self {
        self.action_id = Some(action_id);
        self
    }
}

/// A partially-filled action under interactive construction.
///
/// Fields are filled incrementally (origin, attack type, event, detail,
/// zone); the legality resolver narrows and clears them as earlier
/// choices change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionDraft {
    /// The side performing the action, if chosen.
    pub team_side: Option<TeamSide>,
    /// Tactical context, if chosen.
    pub attack_type: Option<AttackType>,
    /// How the possession started, if chosen.
    pub action_origin: Option<ActionOrigin>,
    /// The terminal event, if chosen.
    pub event_kind: Option<EventKind>,
    /// How the shot was taken, if chosen.
    pub finalization_detail: Option<FinalizationDetail>,
    /// Court zone of the shot, if chosen.
    pub launch_zone: Option<LaunchZone>,
    /// Sub-classification of the event, if chosen.
    pub event_detail: Option<EventDetail>,
}

impl ActionDraft {
    /// Creates an empty draft.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            team_side: None,
            attack_type: None,
            action_origin: None,
            event_kind: None,
            finalization_detail: None,
            launch_zone: None,
            event_detail: None,
        }
    }
}
