// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Incremental legality resolution for drafts under construction.
//!
//! The resolver is pure: the caller owns the draft, applies a field
//! change, and asks what that change does to the downstream fields.
//! Nothing here performs I/O or holds state between calls.

use crate::action::ActionDraft;
use crate::registry::{
    valid_attack_types, valid_event_details, valid_finalization_details, valid_launch_zones,
};
use crate::types::{
    ActionOrigin, AttackType, EventDetail, FinalizationDetail, LaunchZone,
};
use serde::{Deserialize, Serialize};

/// The user-settable fields of a draft, in entry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    /// The side performing the action.
    TeamSide,
    /// Tactical context of the possession.
    AttackType,
    /// How the possession started.
    ActionOrigin,
    /// The terminal event.
    EventKind,
    /// How the shot was taken.
    FinalizationDetail,
    /// Court zone of the shot.
    LaunchZone,
    /// Sub-classification of the event.
    EventDetail,
}

/// The outcome of applying one field change to a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The draft after clearing and forcing.
    pub draft: ActionDraft,
    /// Downstream fields that were cleared and must be re-chosen.
    pub cleared: Vec<DraftField>,
    /// Whether the attack type was force-set to positional by a
    /// seven-meter origin.
    pub forced_positional: bool,
}

/// The legal choices remaining for each downstream field of a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalChoices {
    /// Attack types still legal for the chosen origin.
    pub attack_types: Vec<AttackType>,
    /// Finalization details still legal, once attack type and origin are set.
    pub finalization_details: Vec<FinalizationDetail>,
    /// Launch zones still legal, once a finalization detail is set.
    pub launch_zones: Vec<LaunchZone>,
    /// Event details still legal, once an event kind is set.
    pub event_details: Vec<EventDetail>,
}

/// Applies the downstream effects of changing one field of a draft.
///
/// The draft passed in already carries the new value; `changed` names the
/// field that was just edited. Changing the origin or the attack type
/// clears the finalization detail; changing the event kind clears the
/// event detail, finalization detail, and launch zone. A seven-meter
/// origin force-sets the attack type to positional rather than merely
/// restricting the choice. After the hard clears, any retained value
/// that is no longer in its legal subset is cleared as well.
#[must_use]
pub fn resolve_change(draft: &ActionDraft, changed: DraftField) -> Resolution {
    let mut next: ActionDraft = *draft;
    let mut cleared: Vec<DraftField> = Vec::new();
    let mut forced_positional = false;

    match changed {
        DraftField::ActionOrigin | DraftField::AttackType => {
            if next.finalization_detail.take().is_some() {
                cleared.push(DraftField::FinalizationDetail);
            }
            if next.launch_zone.take().is_some() {
                cleared.push(DraftField::LaunchZone);
            }
        }
        DraftField::EventKind => {
            if next.event_detail.take().is_some() {
                cleared.push(DraftField::EventDetail);
            }
            if next.finalization_detail.take().is_some() {
                cleared.push(DraftField::FinalizationDetail);
            }
            if next.launch_zone.take().is_some() {
                cleared.push(DraftField::LaunchZone);
            }
        }
        _ => {}
    }

    // Seven-meter throws are positional by rule: auto-set, not filter.
    if changed == DraftField::ActionOrigin
        && next.action_origin == Some(ActionOrigin::SevenMeter)
        && next.attack_type != Some(AttackType::Positional)
    {
        next.attack_type = Some(AttackType::Positional);
        forced_positional = true;
    }

    sweep_illegal(&mut next, &mut cleared);

    Resolution {
        draft: next,
        cleared,
        forced_positional,
    }
}

/// Clears any retained value that has fallen outside its legal subset.
fn sweep_illegal(draft: &mut ActionDraft, cleared: &mut Vec<DraftField>) {
    if let (Some(origin), Some(attack)) = (draft.action_origin, draft.attack_type)
        && !valid_attack_types(origin).contains(&attack)
    {
        draft.attack_type = None;
        cleared.push(DraftField::AttackType);
    }

    if let (Some(attack), Some(origin), Some(finalization)) =
        (draft.attack_type, draft.action_origin, draft.finalization_detail)
        && !valid_finalization_details(attack, origin).contains(&finalization)
    {
        draft.finalization_detail = None;
        cleared.push(DraftField::FinalizationDetail);
    }

    match (draft.finalization_detail, draft.launch_zone) {
        (Some(finalization), Some(zone)) => {
            if !valid_launch_zones(finalization).contains(&zone) {
                draft.launch_zone = None;
                cleared.push(DraftField::LaunchZone);
            }
        }
        (None, Some(_)) => {
            draft.launch_zone = None;
            cleared.push(DraftField::LaunchZone);
        }
        _ => {}
    }

    if let (Some(event), Some(detail)) = (draft.event_kind, draft.event_detail)
        && !valid_event_details(event).contains(&detail)
    {
        draft.event_detail = None;
        cleared.push(DraftField::EventDetail);
    }
}

/// Returns the legal choices remaining for each downstream field.
///
/// Fields whose prerequisites are not yet chosen report the widest legal
/// set (so a client can render every button before the context narrows).
#[must_use]
pub fn legal_choices(draft: &ActionDraft) -> LegalChoices {
    let attack_types: Vec<AttackType> = draft
        .action_origin
        .map_or_else(
            || vec![AttackType::Positional, AttackType::FastBreak],
            |origin| valid_attack_types(origin).to_vec(),
        );

    let finalization_details: Vec<FinalizationDetail> = match (draft.attack_type, draft.action_origin)
    {
        (Some(attack), Some(origin)) => valid_finalization_details(attack, origin).to_vec(),
        (Some(attack), None) => valid_finalization_details(attack, ActionOrigin::ContinuousPlay)
            .to_vec(),
        _ => Vec::new(),
    };

    let launch_zones: Vec<LaunchZone> = draft
        .finalization_detail
        .map_or_else(Vec::new, |finalization| {
            valid_launch_zones(finalization).to_vec()
        });

    let event_details: Vec<EventDetail> = draft
        .event_kind
        .map_or_else(Vec::new, |event| valid_event_details(event).to_vec());

    LegalChoices {
        attack_types,
        finalization_details,
        launch_zones,
        event_details,
    }
}
