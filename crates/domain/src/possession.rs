// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The possession-transition rule and the turn sequencer.
//!
//! Both are pure folds over an ordered action history the caller owns.
//! The sequencer never reaches into ambient state; deletions are handled
//! by re-running it over the remaining history.

use crate::action::ActionRecord;
use crate::types::{ActionOrigin, EventDetail, EventKind, TeamSide};
use serde::{Deserialize, Serialize};

/// Origins available when the previous action changed possession (or the
/// match has just started): a fresh possession begins.
pub const FRESH_POSSESSION_ORIGINS: [ActionOrigin; 2] =
    [ActionOrigin::ContinuousPlay, ActionOrigin::SevenMeter];

/// Origins available when the previous action retained possession: the
/// attacking team kept the ball off a rebound.
pub const RETAINED_POSSESSION_ORIGINS: [ActionOrigin; 2] =
    [ActionOrigin::DirectRebound, ActionOrigin::IndirectRebound];

/// Whether an event ends the possession.
///
/// A save never changes possession in this rule variant, regardless of
/// whether the goalkeeper or a defender stopped the shot. A wide shot
/// off the post stays with the attack; a shot directly out does not.
/// Only valid on a record that already passed validation.
#[must_use]
pub const fn changes_possession(event_kind: EventKind, event_detail: Option<EventDetail>) -> bool {
    match event_kind {
        EventKind::ShotSaved => false,
        EventKind::Goal | EventKind::Turnover => true,
        EventKind::ShotWide => !matches!(event_detail, Some(EventDetail::Post)),
    }
}

/// The sequencer's suggestion for the next action to be recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSuggestion {
    /// Possession number the next action belongs to.
    pub next_possession_number: u32,
    /// Side on turn, if the history determines one.
    pub suggested_team_side: Option<TeamSide>,
    /// Origins legal for the next action.
    pub allowed_origins: Vec<ActionOrigin>,
}

/// Computes the next possession number, side on turn, and legal origins
/// from the ordered history of a match (oldest first).
///
/// An empty history starts possession 1 with no side suggestion.
/// Otherwise the last action's possession number advances by one iff that
/// action changed possession, the side flips under the same condition,
/// and the origin set narrows to rebounds when possession was retained.
#[must_use]
pub fn suggest_next_turn(history: &[ActionRecord]) -> TurnSuggestion {
    let Some(last) = history.last() else {
        return TurnSuggestion {
            next_possession_number: 1,
            suggested_team_side: None,
            allowed_origins: FRESH_POSSESSION_ORIGINS.to_vec(),
        };
    };

    if last.possession_changed {
        TurnSuggestion {
            next_possession_number: last.possession_number + 1,
            suggested_team_side: Some(last.team_side.opponent()),
            allowed_origins: FRESH_POSSESSION_ORIGINS.to_vec(),
        }
    } else {
        TurnSuggestion {
            next_possession_number: last.possession_number,
            suggested_team_side: Some(last.team_side),
            allowed_origins: RETAINED_POSSESSION_ORIGINS.to_vec(),
        }
    }
}

/// Re-folds the transition rule over the full history, yielding the
/// possession number each action should carry.
///
/// The running number depends on the complete prefix, so after a deletion
/// the caller re-runs this over the remaining history instead of patching
/// numbers incrementally.
#[must_use]
pub fn replay_possession_numbers(history: &[ActionRecord]) -> Vec<u32> {
    let mut numbers: Vec<u32> = Vec::with_capacity(history.len());
    let mut current: u32 = 1;
    for action in history {
        numbers.push(current);
        if changes_possession(action.event_kind, action.event_detail) {
            current += 1;
        }
    }
    numbers
}
