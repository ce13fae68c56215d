// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Club, DomainError, MatchRecord, MatchResult, Team};

#[test]
fn test_club_creation_trims_fields() {
    let club: Club = Club::new("  BM Granollers ", " Granollers ").unwrap();
    assert_eq!(club.name, "BM Granollers");
    assert_eq!(club.city, "Granollers");
    assert_eq!(club.club_id, None);
}

#[test]
fn test_blank_club_name_is_rejected() {
    let err: DomainError = Club::new("   ", "Somewhere").unwrap_err();
    assert!(matches!(err, DomainError::InvalidName { field: "club name", .. }));
}

#[test]
fn test_team_requires_name_and_category() {
    assert!(Team::new(1, "Senior A", "Senior").is_ok());
    assert!(Team::new(1, "", "Senior").is_err());
    assert!(Team::new(1, "Senior A", " ").is_err());
}

#[test]
fn test_match_result_parses_score_string() {
    let result: MatchResult = MatchResult::parse("24-22").unwrap();
    assert_eq!(result.home_goals, 24);
    assert_eq!(result.away_goals, 22);
    assert_eq!(result.as_string(), "24-22");
}

#[test]
fn test_match_result_rejects_malformed_strings() {
    for value in ["24", "24:22", "a-b", "-", ""] {
        assert!(
            MatchResult::parse(value).is_err(),
            "expected rejection of {value:?}"
        );
    }
}

#[test]
fn test_match_creation_validates_date() {
    let record: MatchRecord =
        MatchRecord::new("BM Granollers", "FC Barcelona", "2026-03-14", "Liga Asobal").unwrap();
    assert_eq!(record.played_on, "2026-03-14");
    assert!(!record.is_finished());

    let err: DomainError =
        MatchRecord::new("BM Granollers", "FC Barcelona", "14/03/2026", "Liga Asobal").unwrap_err();
    assert_eq!(err, DomainError::InvalidDate(String::from("14/03/2026")));
}
