// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lookup tables for the closed value sets and their contextual subsets.
//!
//! This module is the single source of truth for which finalization
//! details, event details, attack types, and launch zones are legal in a
//! given context. It contains no behavior beyond table lookup.

use crate::types::{ActionOrigin, AttackType, EventDetail, FinalizationDetail, LaunchZone};

/// Finalization details legal for positional attacks.
pub const POSITIONAL_FINALIZATIONS: [FinalizationDetail; 5] = [
    FinalizationDetail::ExteriorShot,
    FinalizationDetail::Pivot,
    FinalizationDetail::Penetration,
    FinalizationDetail::Wing,
    FinalizationDetail::SevenMeter,
];

/// Finalization details legal for fast breaks.
pub const FAST_BREAK_FINALIZATIONS: [FinalizationDetail; 4] = [
    FinalizationDetail::CounterGoal,
    FinalizationDetail::FirstWave,
    FinalizationDetail::SecondWave,
    FinalizationDetail::ThirdWave,
];

const SEVEN_METER_ONLY: [FinalizationDetail; 1] = [FinalizationDetail::SevenMeter];

const SAVE_DETAILS: [EventDetail; 2] = [EventDetail::GoalkeeperSave, EventDetail::DefenderBlock];

const WIDE_DETAILS: [EventDetail; 2] = [EventDetail::Post, EventDetail::DirectOut];

const TURNOVER_DETAILS: [EventDetail; 8] = [
    EventDetail::Steps,
    EventDetail::DoubleDribble,
    EventDetail::OffensiveFoul,
    EventDetail::PassivePlay,
    EventDetail::AreaInvasion,
    EventDetail::Steal,
    EventDetail::FootFault,
    EventDetail::BallOut,
];

const ALL_ZONES: [LaunchZone; 3] = [LaunchZone::Left, LaunchZone::Center, LaunchZone::Right];

const WING_ZONES: [LaunchZone; 2] = [LaunchZone::Left, LaunchZone::Right];

const CENTER_ONLY: [LaunchZone; 1] = [LaunchZone::Center];

const BOTH_ATTACK_TYPES: [AttackType; 2] = [AttackType::Positional, AttackType::FastBreak];

const POSITIONAL_ONLY: [AttackType; 1] = [AttackType::Positional];

/// Returns the finalization details legal for an attack type and origin.
///
/// A seven-meter origin admits only the seven-meter detail; otherwise the
/// attack type selects the positional or fast-break subset.
#[must_use]
pub const fn valid_finalization_details(
    attack_type: AttackType,
    origin: ActionOrigin,
) -> &'static [FinalizationDetail] {
    match (origin, attack_type) {
        (ActionOrigin::SevenMeter, _) => &SEVEN_METER_ONLY,
        (_, AttackType::Positional) => &POSITIONAL_FINALIZATIONS,
        (_, AttackType::FastBreak) => &FAST_BREAK_FINALIZATIONS,
    }
}

/// Returns the event details legal for an event kind.
///
/// Goals carry no event detail, so the goal subset is empty.
#[must_use]
pub const fn valid_event_details(event_kind: crate::types::EventKind) -> &'static [EventDetail] {
    match event_kind {
        crate::types::EventKind::Goal => &[],
        crate::types::EventKind::ShotSaved => &SAVE_DETAILS,
        crate::types::EventKind::ShotWide => &WIDE_DETAILS,
        crate::types::EventKind::Turnover => &TURNOVER_DETAILS,
    }
}

/// Returns the attack types legal for an origin.
///
/// Seven-meter throws are positional by rule.
#[must_use]
pub const fn valid_attack_types(origin: ActionOrigin) -> &'static [AttackType] {
    match origin {
        ActionOrigin::SevenMeter => &POSITIONAL_ONLY,
        _ => &BOTH_ATTACK_TYPES,
    }
}

/// Returns the launch zones legal for a finalization detail.
///
/// The pivot shoots from the center, wings from the sides, seven-meter
/// throws from the center mark; every other finalization may come from
/// any third of the court.
#[must_use]
pub const fn valid_launch_zones(finalization: FinalizationDetail) -> &'static [LaunchZone] {
    match finalization {
        FinalizationDetail::Pivot | FinalizationDetail::SevenMeter => &CENTER_ONLY,
        FinalizationDetail::Wing => &WING_ZONES,
        _ => &ALL_ZONES,
    }
}
