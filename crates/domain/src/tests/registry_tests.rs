// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ActionOrigin, AttackType, EventDetail, EventKind, FinalizationDetail, LaunchZone,
    valid_attack_types, valid_event_details, valid_finalization_details, valid_launch_zones,
};

#[test]
fn test_positional_attack_offers_five_finalizations() {
    let details = valid_finalization_details(AttackType::Positional, ActionOrigin::ContinuousPlay);
    assert_eq!(details.len(), 5);
    assert!(details.contains(&FinalizationDetail::ExteriorShot));
    assert!(details.contains(&FinalizationDetail::Pivot));
    assert!(details.contains(&FinalizationDetail::Penetration));
    assert!(details.contains(&FinalizationDetail::Wing));
    assert!(details.contains(&FinalizationDetail::SevenMeter));
}

#[test]
fn test_fast_break_offers_four_waves() {
    let details = valid_finalization_details(AttackType::FastBreak, ActionOrigin::ContinuousPlay);
    assert_eq!(details.len(), 4);
    assert!(details.iter().all(FinalizationDetail::is_fast_break));
}

#[test]
fn test_seven_meter_origin_narrows_finalization_to_seven_meter() {
    let details = valid_finalization_details(AttackType::Positional, ActionOrigin::SevenMeter);
    assert_eq!(details, &[FinalizationDetail::SevenMeter]);
}

#[test]
fn test_goal_has_no_event_details() {
    assert!(valid_event_details(EventKind::Goal).is_empty());
}

#[test]
fn test_saved_shot_details() {
    let details = valid_event_details(EventKind::ShotSaved);
    assert_eq!(
        details,
        &[EventDetail::GoalkeeperSave, EventDetail::DefenderBlock]
    );
}

#[test]
fn test_wide_shot_details() {
    let details = valid_event_details(EventKind::ShotWide);
    assert_eq!(details, &[EventDetail::Post, EventDetail::DirectOut]);
}

#[test]
fn test_turnover_has_eight_sub_types() {
    let details = valid_event_details(EventKind::Turnover);
    assert_eq!(details.len(), 8);
    assert!(details.contains(&EventDetail::Steps));
    assert!(details.contains(&EventDetail::BallOut));
    assert!(!details.contains(&EventDetail::Post));
}

#[test]
fn test_seven_meter_origin_forces_positional_attack() {
    assert_eq!(
        valid_attack_types(ActionOrigin::SevenMeter),
        &[AttackType::Positional]
    );
    assert_eq!(valid_attack_types(ActionOrigin::ContinuousPlay).len(), 2);
}

#[test]
fn test_launch_zone_grids() {
    assert_eq!(
        valid_launch_zones(FinalizationDetail::Pivot),
        &[LaunchZone::Center]
    );
    assert_eq!(
        valid_launch_zones(FinalizationDetail::SevenMeter),
        &[LaunchZone::Center]
    );
    assert_eq!(
        valid_launch_zones(FinalizationDetail::Wing),
        &[LaunchZone::Left, LaunchZone::Right]
    );
    assert_eq!(valid_launch_zones(FinalizationDetail::ExteriorShot).len(), 3);
    assert_eq!(valid_launch_zones(FinalizationDetail::FirstWave).len(), 3);
}
