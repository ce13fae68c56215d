// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtlog_audit::{Actor, Cause};
use courtlog_domain::{
    ActionOrigin, ActionRecord, AttackType, EventDetail, EventKind, FinalizationDetail, LaunchZone,
    TeamSide,
};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("operator-1"), String::from("operator"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-1"), String::from("Test request"))
}

/// A valid positional goal for possession 1 by the home side.
pub fn create_goal_candidate(match_id: i64, possession_number: u32, team_side: TeamSide) -> ActionRecord {
    ActionRecord {
        action_id: None,
        match_id,
        possession_number,
        team_side,
        attack_type: AttackType::Positional,
        action_origin: ActionOrigin::ContinuousPlay,
        event_kind: EventKind::Goal,
        finalization_detail: Some(FinalizationDetail::Penetration),
        launch_zone: Some(LaunchZone::Center),
        event_detail: None,
        possession_changed: false,
    }
}

/// A valid saved shot, which retains possession.
pub fn create_saved_shot_candidate(
    match_id: i64,
    possession_number: u32,
    team_side: TeamSide,
) -> ActionRecord {
    ActionRecord {
        action_id: None,
        match_id,
        possession_number,
        team_side,
        attack_type: AttackType::Positional,
        action_origin: ActionOrigin::ContinuousPlay,
        event_kind: EventKind::ShotSaved,
        finalization_detail: Some(FinalizationDetail::ExteriorShot),
        launch_zone: Some(LaunchZone::Left),
        event_detail: Some(EventDetail::GoalkeeperSave),
        possession_changed: false,
    }
}
