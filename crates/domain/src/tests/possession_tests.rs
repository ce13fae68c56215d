// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ActionOrigin, ActionRecord, AttackType, EventDetail, EventKind, FinalizationDetail, LaunchZone,
    TeamSide, TurnSuggestion, changes_possession, replay_possession_numbers, suggest_next_turn,
};

fn create_test_action(
    possession_number: u32,
    team_side: TeamSide,
    event_kind: EventKind,
    event_detail: Option<EventDetail>,
) -> ActionRecord {
    ActionRecord {
        action_id: None,
        match_id: 1,
        possession_number,
        team_side,
        attack_type: AttackType::Positional,
        action_origin: ActionOrigin::ContinuousPlay,
        event_kind,
        finalization_detail: if event_kind == EventKind::Turnover {
            None
        } else {
            Some(FinalizationDetail::ExteriorShot)
        },
        launch_zone: if event_kind == EventKind::Turnover {
            None
        } else {
            Some(LaunchZone::Center)
        },
        event_detail,
        possession_changed: changes_possession(event_kind, event_detail),
    }
}

#[test]
fn test_saved_shot_never_changes_possession() {
    assert!(!changes_possession(
        EventKind::ShotSaved,
        Some(EventDetail::GoalkeeperSave)
    ));
    assert!(!changes_possession(
        EventKind::ShotSaved,
        Some(EventDetail::DefenderBlock)
    ));
    assert!(!changes_possession(EventKind::ShotSaved, None));
}

#[test]
fn test_wide_shot_off_post_keeps_possession() {
    assert!(!changes_possession(
        EventKind::ShotWide,
        Some(EventDetail::Post)
    ));
}

#[test]
fn test_wide_shot_directly_out_changes_possession() {
    assert!(changes_possession(
        EventKind::ShotWide,
        Some(EventDetail::DirectOut)
    ));
}

#[test]
fn test_goal_and_turnover_change_possession() {
    assert!(changes_possession(EventKind::Goal, None));
    assert!(changes_possession(
        EventKind::Turnover,
        Some(EventDetail::Steps)
    ));
}

#[test]
fn test_empty_history_starts_possession_one() {
    let suggestion: TurnSuggestion = suggest_next_turn(&[]);

    assert_eq!(suggestion.next_possession_number, 1);
    assert_eq!(suggestion.suggested_team_side, None);
    assert_eq!(
        suggestion.allowed_origins,
        vec![ActionOrigin::ContinuousPlay, ActionOrigin::SevenMeter]
    );
}

#[test]
fn test_goal_hands_turn_to_opponent() {
    let history = vec![create_test_action(1, TeamSide::Home, EventKind::Goal, None)];

    let suggestion: TurnSuggestion = suggest_next_turn(&history);

    assert_eq!(suggestion.next_possession_number, 2);
    assert_eq!(suggestion.suggested_team_side, Some(TeamSide::Away));
    assert_eq!(
        suggestion.allowed_origins,
        vec![ActionOrigin::ContinuousPlay, ActionOrigin::SevenMeter]
    );
}

#[test]
fn test_saved_shot_keeps_turn_and_narrows_origins_to_rebounds() {
    let history = vec![create_test_action(
        1,
        TeamSide::Home,
        EventKind::ShotSaved,
        Some(EventDetail::GoalkeeperSave),
    )];

    let suggestion: TurnSuggestion = suggest_next_turn(&history);

    assert_eq!(suggestion.next_possession_number, 1);
    assert_eq!(suggestion.suggested_team_side, Some(TeamSide::Home));
    assert_eq!(
        suggestion.allowed_origins,
        vec![ActionOrigin::DirectRebound, ActionOrigin::IndirectRebound]
    );
}

#[test]
fn test_possession_number_is_monotonic_and_steps_by_at_most_one() {
    let mut history: Vec<ActionRecord> = Vec::new();
    let script = [
        (EventKind::ShotSaved, Some(EventDetail::GoalkeeperSave)),
        (EventKind::ShotWide, Some(EventDetail::Post)),
        (EventKind::Goal, None),
        (EventKind::Turnover, Some(EventDetail::Steps)),
        (EventKind::ShotWide, Some(EventDetail::DirectOut)),
    ];

    let mut previous: u32 = suggest_next_turn(&history).next_possession_number;
    for (event_kind, event_detail) in script {
        let suggestion: TurnSuggestion = suggest_next_turn(&history);
        let side: TeamSide = suggestion.suggested_team_side.unwrap_or(TeamSide::Home);
        history.push(create_test_action(
            suggestion.next_possession_number,
            side,
            event_kind,
            event_detail,
        ));

        let next: u32 = suggest_next_turn(&history).next_possession_number;
        assert!(next >= previous);
        assert!(next - suggestion.next_possession_number <= 1);
        previous = next;
    }
}

#[test]
fn test_round_trip_of_suggestions_produces_consistent_numbering() {
    let mut history: Vec<ActionRecord> = Vec::new();
    let script = [
        (EventKind::Goal, None),
        (EventKind::ShotSaved, Some(EventDetail::DefenderBlock)),
        (EventKind::ShotWide, Some(EventDetail::DirectOut)),
        (EventKind::Turnover, Some(EventDetail::OffensiveFoul)),
        (EventKind::Goal, None),
    ];

    for (event_kind, event_detail) in script {
        let suggestion: TurnSuggestion = suggest_next_turn(&history);
        let side: TeamSide = suggestion.suggested_team_side.unwrap_or(TeamSide::Away);
        history.push(create_test_action(
            suggestion.next_possession_number,
            side,
            event_kind,
            event_detail,
        ));
    }

    // Stored numbers must match a clean re-fold: no gaps, no regressions.
    let replayed: Vec<u32> = replay_possession_numbers(&history);
    let stored: Vec<u32> = history.iter().map(|a| a.possession_number).collect();
    assert_eq!(stored, replayed);
    for pair in stored.windows(2) {
        assert!(pair[1] == pair[0] || pair[1] == pair[0] + 1);
    }
}

#[test]
fn test_replay_after_deleting_last_action() {
    let mut history = vec![
        create_test_action(1, TeamSide::Home, EventKind::Goal, None),
        create_test_action(2, TeamSide::Away, EventKind::Goal, None),
        create_test_action(
            3,
            TeamSide::Home,
            EventKind::ShotSaved,
            Some(EventDetail::GoalkeeperSave),
        ),
    ];

    history.pop();

    assert_eq!(replay_possession_numbers(&history), vec![1, 2]);
    let suggestion: TurnSuggestion = suggest_next_turn(&history);
    assert_eq!(suggestion.next_possession_number, 3);
    assert_eq!(suggestion.suggested_team_side, Some(TeamSide::Home));
}
