// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The action validator.
//!
//! Given a fully-filled candidate, produces an ordered list of violations
//! (empty list = valid). The most structurally fundamental violations come
//! first: seven-meter rules, then attack-type/finalization consistency,
//! then field-presence invariants. All violations are returned, not just
//! the first; callers display them as a list. Pure, no I/O, idempotent.

use crate::action::ActionRecord;
use crate::registry::{valid_event_details, valid_launch_zones};
use crate::types::{ActionOrigin, AttackType, EventKind, FinalizationDetail};
use serde::Serialize;

/// One rule violation found in a candidate action.
///
/// The code is stable and machine-readable; the message is for humans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Stable snake_case reason code.
    pub code: &'static str,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Violation {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Validates a candidate action against every rule, in priority order.
///
/// Returns all violations found; an empty vector means the candidate may
/// be submitted for persistence. Does not mutate its input.
#[must_use]
pub fn validate_action(candidate: &ActionRecord) -> Vec<Violation> {
    let mut violations: Vec<Violation> = Vec::new();

    check_seven_meter(candidate, &mut violations);
    check_finalization_consistency(candidate, &mut violations);
    check_field_presence(candidate, &mut violations);

    violations
}

/// Seven-meter throws are positional and finalized as seven-meter; the
/// seven-meter finalization in turn only appears on a seven-meter throw.
fn check_seven_meter(candidate: &ActionRecord, violations: &mut Vec<Violation>) {
    if candidate.action_origin == ActionOrigin::SevenMeter {
        if candidate.attack_type != AttackType::Positional {
            violations.push(Violation::new(
                "seven_meter_requires_positional",
                "A seven-meter throw is always a positional attack",
            ));
        }
        if candidate.event_kind.is_shot()
            && candidate.finalization_detail != Some(FinalizationDetail::SevenMeter)
        {
            violations.push(Violation::new(
                "seven_meter_requires_matching_detail",
                "A shot from a seven-meter throw must be finalized as a seven-meter",
            ));
        }
    } else if candidate.finalization_detail == Some(FinalizationDetail::SevenMeter) {
        violations.push(Violation::new(
            "seven_meter_detail_requires_seven_meter_origin",
            "A seven-meter finalization requires a seven-meter origin",
        ));
    }
}

/// The finalization detail must belong to the attack type's subset.
fn check_finalization_consistency(candidate: &ActionRecord, violations: &mut Vec<Violation>) {
    let Some(finalization) = candidate.finalization_detail else {
        return;
    };

    match candidate.attack_type {
        AttackType::FastBreak => {
            if !finalization.is_fast_break() {
                violations.push(Violation::new(
                    "fast_break_requires_wave_finalization",
                    format!(
                        "Finalization {finalization} is not a fast-break wave"
                    ),
                ));
            }
        }
        AttackType::Positional => {
            if !finalization.is_positional() {
                violations.push(Violation::new(
                    "positional_requires_positional_finalization",
                    format!(
                        "Finalization {finalization} is not a positional finalization"
                    ),
                ));
            }
        }
    }
}

/// Presence invariants per event kind, plus subset membership of the
/// event detail and launch zone.
fn check_field_presence(candidate: &ActionRecord, violations: &mut Vec<Violation>) {
    match candidate.event_kind {
        EventKind::Goal => {
            if candidate.finalization_detail.is_none() || candidate.launch_zone.is_none() {
                violations.push(Violation::new(
                    "goal_requires_finalization_and_zone",
                    "A goal must carry a finalization detail and a launch zone",
                ));
            }
            if candidate.event_detail.is_some() {
                violations.push(Violation::new(
                    "goal_forbids_event_detail",
                    "A goal carries no event detail",
                ));
            }
        }
        EventKind::Turnover => {
            if candidate.finalization_detail.is_some() || candidate.launch_zone.is_some() {
                violations.push(Violation::new(
                    "turnover_forbids_finalization_and_zone",
                    "A turnover carries neither a finalization detail nor a launch zone",
                ));
            }
            if candidate.event_detail.is_none() {
                violations.push(Violation::new(
                    "turnover_requires_event_detail",
                    "A turnover must carry its sub-type as an event detail",
                ));
            }
        }
        EventKind::ShotSaved | EventKind::ShotWide => {
            if candidate.finalization_detail.is_none() || candidate.launch_zone.is_none() {
                violations.push(Violation::new(
                    "shot_requires_finalization_and_zone",
                    "A saved or wide shot must carry a finalization detail and a launch zone",
                ));
            }
            if candidate.event_detail.is_none() {
                violations.push(Violation::new(
                    "shot_requires_event_detail",
                    "A saved or wide shot must carry an event detail",
                ));
            }
        }
    }

    if let Some(detail) = candidate.event_detail
        && !valid_event_details(candidate.event_kind).contains(&detail)
    {
        violations.push(Violation::new(
            "event_detail_not_valid_for_event",
            format!(
                "Event detail {detail} is not valid for {}",
                candidate.event_kind
            ),
        ));
    }

    if let (Some(finalization), Some(zone)) = (candidate.finalization_detail, candidate.launch_zone)
        && !valid_launch_zones(finalization).contains(&zone)
    {
        violations.push(Violation::new(
            "launch_zone_not_valid_for_finalization",
            format!("Launch zone {zone} is not valid for finalization {finalization}"),
        ));
    }
}
