// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_goal_candidate, create_saved_shot_candidate, create_test_actor, create_test_cause,
};
use crate::{Command, CoreError, MatchLog, TransitionResult, apply};
use courtlog_domain::{DomainError, EventDetail, EventKind, TeamSide};

#[test]
fn test_record_action_appends_and_derives_possession_flag() {
    let log: MatchLog = MatchLog::new(1);
    let mut candidate = create_goal_candidate(1, 1, TeamSide::Home);
    // Whatever the caller claims, the flag is recomputed.
    candidate.possession_changed = false;

    let result: TransitionResult = apply(
        &log,
        Command::RecordAction { candidate },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(result.new_log.actions.len(), 1);
    assert!(result.new_log.actions[0].possession_changed);
    assert_eq!(result.audit_event.match_scope, Some(1));
    assert_eq!(result.audit_event.action.name, "RecordAction");
}

#[test]
fn test_record_action_rejects_invalid_candidate_with_all_violations() {
    let log: MatchLog = MatchLog::new(1);
    let mut candidate = create_goal_candidate(1, 1, TeamSide::Home);
    candidate.finalization_detail = None;
    candidate.launch_zone = None;
    candidate.event_detail = Some(EventDetail::Post);

    let err: CoreError = apply(
        &log,
        Command::RecordAction { candidate },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap_err();

    let CoreError::InvalidAction(violations) = err else {
        panic!("expected InvalidAction");
    };
    let codes: Vec<&str> = violations.iter().map(|v| v.code).collect();
    assert!(codes.contains(&"goal_requires_finalization_and_zone"));
    assert!(codes.contains(&"goal_forbids_event_detail"));
}

#[test]
fn test_record_action_rejects_wrong_match_scope() {
    let log: MatchLog = MatchLog::new(1);
    let candidate = create_goal_candidate(2, 1, TeamSide::Home);

    let err: CoreError = apply(
        &log,
        Command::RecordAction { candidate },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        CoreError::MatchScopeMismatch {
            expected: 1,
            found: 2
        }
    );
}

#[test]
fn test_failed_record_leaves_log_untouched() {
    let log: MatchLog = MatchLog::new(1);
    let mut candidate = create_goal_candidate(1, 1, TeamSide::Home);
    candidate.finalization_detail = None;

    let _ = apply(
        &log,
        Command::RecordAction { candidate },
        create_test_actor(),
        create_test_cause(),
    );

    assert!(log.actions.is_empty());
}

#[test]
fn test_delete_last_action_removes_newest() {
    let log: MatchLog = MatchLog::new(1);
    let first: TransitionResult = apply(
        &log,
        Command::RecordAction {
            candidate: create_saved_shot_candidate(1, 1, TeamSide::Home),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    let result: TransitionResult = apply(
        &first.new_log,
        Command::DeleteLastAction { match_id: 1 },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert!(result.new_log.actions.is_empty());
    assert_eq!(result.audit_event.action.name, "DeleteLastAction");
}

#[test]
fn test_delete_on_empty_log_is_rejected() {
    let err: CoreError = apply(
        &MatchLog::new(1),
        Command::DeleteLastAction { match_id: 1 },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::NoActionsRecorded(1))
    );
}

#[test]
fn test_directory_command_is_rejected_by_match_transition() {
    let err: CoreError = apply(
        &MatchLog::new(1),
        Command::CreateClub {
            name: String::from("Club"),
            city: String::from("City"),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap_err();

    assert_eq!(err, CoreError::NotAMatchCommand("CreateClub"));
}

#[test]
fn test_audit_snapshots_reflect_action_counts() {
    let log: MatchLog = MatchLog::new(3);
    let result: TransitionResult = apply(
        &log,
        Command::RecordAction {
            candidate: create_goal_candidate(3, 1, TeamSide::Home),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(
        result.audit_event.before.data,
        "match=3,actions=0,next_possession=1"
    );
    assert_eq!(
        result.audit_event.after.data,
        "match=3,actions=1,next_possession=2"
    );

    let goal = &result.new_log.actions[0];
    assert_eq!(goal.event_kind, EventKind::Goal);
}
