// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::{AuthenticatedActor, Role};
use crate::handlers;
use crate::request_response::{ActionRequest, CreateMatchRequest};
use courtlog_store::{MemoryStore, OperatorData};

pub const TEST_PASSWORD: &str = "s3cure-court-pw";

pub fn create_test_operator(
    store: &mut MemoryStore,
    login_name: &str,
    role: Role,
) -> (AuthenticatedActor, OperatorData) {
    let operator = store
        .create_operator(login_name, "Test Operator", role.as_str(), TEST_PASSWORD)
        .unwrap();
    (
        AuthenticatedActor {
            id: operator.operator_id,
            role,
        },
        operator,
    )
}

pub fn store_with_admin() -> (MemoryStore, AuthenticatedActor, OperatorData) {
    let mut store = MemoryStore::new();
    let (actor, operator) = create_test_operator(&mut store, "admin", Role::Admin);
    (store, actor, operator)
}

pub fn create_test_match(
    store: &mut MemoryStore,
    actor: &AuthenticatedActor,
    operator: &OperatorData,
) -> i64 {
    let response = handlers::create_match(
        store,
        actor,
        operator,
        &CreateMatchRequest {
            home_team_name: String::from("Alpha"),
            away_team_name: String::from("Beta"),
            played_on: String::from("2026-03-14"),
            competition: String::from("Liga"),
        },
    )
    .unwrap();
    response.match_id.unwrap()
}

pub fn goal_request(possession_number: u32, team_side: &str) -> ActionRequest {
    ActionRequest {
        possession_number,
        team_side: team_side.to_string(),
        attack_type: String::from("POSITIONAL"),
        action_origin: String::from("CONTINUOUS_PLAY"),
        event_kind: String::from("GOAL"),
        finalization_detail: Some(String::from("WING")),
        launch_zone: Some(String::from("LEFT")),
        event_detail: None,
    }
}

pub fn saved_shot_request(possession_number: u32, team_side: &str) -> ActionRequest {
    ActionRequest {
        possession_number,
        team_side: team_side.to_string(),
        attack_type: String::from("POSITIONAL"),
        action_origin: String::from("CONTINUOUS_PLAY"),
        event_kind: String::from("SHOT_SAVED"),
        finalization_detail: Some(String::from("EXTERIOR_SHOT")),
        launch_zone: Some(String::from("CENTER")),
        event_detail: Some(String::from("GOALKEEPER_SAVE")),
    }
}
