// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_actor, create_test_cause};
use crate::{Command, CoreError, Directory, DirectoryResult, apply_directory};
use courtlog_domain::{DomainError, MatchResult};

fn directory_with_club() -> Directory {
    let result: DirectoryResult = apply_directory(
        &Directory::new(),
        Command::CreateClub {
            name: String::from("BM Granollers"),
            city: String::from("Granollers"),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();
    let mut directory: Directory = result.new_directory;
    // The store assigns identifiers on persist; simulate that here.
    directory.clubs[0].club_id = Some(1);
    directory
}

#[test]
fn test_create_club_produces_audit_event() {
    let result: DirectoryResult = apply_directory(
        &Directory::new(),
        Command::CreateClub {
            name: String::from("BM Granollers"),
            city: String::from("Granollers"),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(result.new_directory.clubs.len(), 1);
    assert_eq!(result.audit_event.action.name, "CreateClub");
    assert_eq!(result.audit_event.match_scope, None);
    assert_eq!(result.audit_event.before.data, "clubs=0,teams=0,matches=0");
    assert_eq!(result.audit_event.after.data, "clubs=1,teams=0,matches=0");
}

#[test]
fn test_duplicate_club_name_is_rejected_case_insensitively() {
    let directory: Directory = directory_with_club();

    let err: CoreError = apply_directory(
        &directory,
        Command::CreateClub {
            name: String::from("bm granollers"),
            city: String::from("Elsewhere"),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::DuplicateClubName(String::from(
            "bm granollers"
        )))
    );
}

#[test]
fn test_create_team_requires_existing_club() {
    let err: CoreError = apply_directory(
        &Directory::new(),
        Command::CreateTeam {
            club_id: 99,
            name: String::from("Senior A"),
            category: String::from("Senior"),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap_err();

    assert_eq!(err, CoreError::DomainViolation(DomainError::ClubNotFound(99)));
}

#[test]
fn test_create_team_rejects_duplicate_name_within_club() {
    let directory: Directory = directory_with_club();

    let result: DirectoryResult = apply_directory(
        &directory,
        Command::CreateTeam {
            club_id: 1,
            name: String::from("Senior A"),
            category: String::from("Senior"),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    let err: CoreError = apply_directory(
        &result.new_directory,
        Command::CreateTeam {
            club_id: 1,
            name: String::from("senior a"),
            category: String::from("Senior"),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::DuplicateTeamName { club_id: 1, .. })
    ));
}

#[test]
fn test_create_match_validates_date() {
    let err: CoreError = apply_directory(
        &Directory::new(),
        Command::CreateMatch {
            home_team_name: String::from("Alpha"),
            away_team_name: String::from("Beta"),
            played_on: String::from("03/14/2026"),
            competition: String::from("Liga"),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::InvalidDate(_))
    ));
}

#[test]
fn test_set_match_result_requires_existing_match() {
    let err: CoreError = apply_directory(
        &Directory::new(),
        Command::SetMatchResult {
            match_id: 5,
            result: MatchResult::parse("24-22").unwrap(),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap_err();

    assert_eq!(err, CoreError::DomainViolation(DomainError::MatchNotFound(5)));
}

#[test]
fn test_set_match_result_updates_match() {
    let created: DirectoryResult = apply_directory(
        &Directory::new(),
        Command::CreateMatch {
            home_team_name: String::from("Alpha"),
            away_team_name: String::from("Beta"),
            played_on: String::from("2026-03-14"),
            competition: String::from("Liga"),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();
    let mut directory: Directory = created.new_directory;
    directory.matches[0].match_id = Some(7);

    let result: DirectoryResult = apply_directory(
        &directory,
        Command::SetMatchResult {
            match_id: 7,
            result: MatchResult::parse("30-28").unwrap(),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    let record = result.new_directory.find_match(7).unwrap();
    assert_eq!(record.result, Some(MatchResult::parse("30-28").unwrap()));
    assert_eq!(result.audit_event.action.name, "SetMatchResult");
}

#[test]
fn test_match_command_is_rejected_by_directory_transition() {
    let err: CoreError = apply_directory(
        &Directory::new(),
        Command::DeleteLastAction { match_id: 1 },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap_err();

    assert_eq!(err, CoreError::NotADirectoryCommand("DeleteLastAction"));
}
