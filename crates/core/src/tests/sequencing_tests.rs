// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_goal_candidate, create_saved_shot_candidate, create_test_actor, create_test_cause,
};
use crate::{Command, CoreError, MatchLog, TransitionResult, apply};
use courtlog_domain::{ActionOrigin, TeamSide, suggest_next_turn};

fn record(log: &MatchLog, candidate: courtlog_domain::ActionRecord) -> Result<TransitionResult, CoreError> {
    apply(
        log,
        Command::RecordAction { candidate },
        create_test_actor(),
        create_test_cause(),
    )
}

#[test]
fn test_wrong_possession_number_is_rejected() {
    let log: MatchLog = MatchLog::new(1);
    let candidate = create_goal_candidate(1, 4, TeamSide::Home);

    let err: CoreError = record(&log, candidate).unwrap_err();

    let CoreError::InvalidAction(violations) = err else {
        panic!("expected InvalidAction");
    };
    assert!(violations.iter().any(|v| v.code == "possession_number_mismatch"));
}

#[test]
fn test_team_off_turn_is_rejected() {
    let log: MatchLog = MatchLog::new(1);
    let first: TransitionResult =
        record(&log, create_goal_candidate(1, 1, TeamSide::Home)).unwrap();

    // Home just scored; it is Away's turn.
    let err: CoreError =
        record(&first.new_log, create_goal_candidate(1, 2, TeamSide::Home)).unwrap_err();

    let CoreError::InvalidAction(violations) = err else {
        panic!("expected InvalidAction");
    };
    assert!(violations.iter().any(|v| v.code == "team_side_not_on_turn"));
}

#[test]
fn test_rebound_origin_required_after_retained_possession() {
    let log: MatchLog = MatchLog::new(1);
    let first: TransitionResult =
        record(&log, create_saved_shot_candidate(1, 1, TeamSide::Home)).unwrap();

    // Possession retained off the save; continuous play is not available.
    let mut candidate = create_goal_candidate(1, 1, TeamSide::Home);
    candidate.action_origin = ActionOrigin::ContinuousPlay;

    let err: CoreError = record(&first.new_log, candidate).unwrap_err();

    let CoreError::InvalidAction(violations) = err else {
        panic!("expected InvalidAction");
    };
    assert!(violations.iter().any(|v| v.code == "origin_not_allowed_for_turn"));
}

#[test]
fn test_rebound_follow_up_is_accepted() {
    let log: MatchLog = MatchLog::new(1);
    let first: TransitionResult =
        record(&log, create_saved_shot_candidate(1, 1, TeamSide::Home)).unwrap();

    let mut candidate = create_goal_candidate(1, 1, TeamSide::Home);
    candidate.action_origin = ActionOrigin::DirectRebound;

    let result: TransitionResult = record(&first.new_log, candidate).unwrap();
    assert_eq!(result.new_log.actions.len(), 2);
    assert_eq!(result.new_log.actions[1].possession_number, 1);
}

#[test]
fn test_full_possession_sequence_stays_consistent() {
    let mut log: MatchLog = MatchLog::new(1);

    for _ in 0..4 {
        let suggestion = suggest_next_turn(&log.actions);
        let side: TeamSide = suggestion.suggested_team_side.unwrap_or(TeamSide::Home);
        let candidate =
            create_goal_candidate(1, suggestion.next_possession_number, side);
        log = record(&log, candidate).unwrap().new_log;
    }

    let numbers: Vec<u32> = log.actions.iter().map(|a| a.possession_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    let sides: Vec<TeamSide> = log.actions.iter().map(|a| a.team_side).collect();
    assert_eq!(
        sides,
        vec![TeamSide::Home, TeamSide::Away, TeamSide::Home, TeamSide::Away]
    );
}

#[test]
fn test_sequencer_recovers_after_delete_last() {
    let mut log: MatchLog = MatchLog::new(1);
    log = record(&log, create_goal_candidate(1, 1, TeamSide::Home))
        .unwrap()
        .new_log;
    log = record(&log, create_goal_candidate(1, 2, TeamSide::Away))
        .unwrap()
        .new_log;

    log = apply(
        &log,
        Command::DeleteLastAction { match_id: 1 },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap()
    .new_log;

    // Suggestions re-derive from the remaining history.
    let suggestion = suggest_next_turn(&log.actions);
    assert_eq!(suggestion.next_possession_number, 2);
    assert_eq!(suggestion.suggested_team_side, Some(TeamSide::Away));

    let result = record(&log, create_goal_candidate(1, 2, TeamSide::Away)).unwrap();
    assert_eq!(result.new_log.actions.len(), 2);
}
