// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{MatchRecord, MatchResult, TeamAverages, compute_team_averages};

fn finished_match(home: &str, away: &str, result: &str) -> MatchRecord {
    let mut record: MatchRecord =
        MatchRecord::new(home, away, "2026-02-01", "Liga Asobal").unwrap();
    record.result = Some(MatchResult::parse(result).unwrap());
    record
}

#[test]
fn test_averages_over_two_matches() {
    let matches = vec![
        finished_match("Alpha", "Beta", "30-20"),
        finished_match("Beta", "Alpha", "25-25"),
    ];

    let averages: Vec<TeamAverages> = compute_team_averages(&matches);
    assert_eq!(averages.len(), 2);

    let alpha = &averages[0];
    assert_eq!(alpha.team_name, "Alpha");
    assert_eq!(alpha.matches_played, 2);
    assert!((alpha.goals_for_avg - 27.5).abs() < f64::EPSILON);
    assert!((alpha.goals_against_avg - 22.5).abs() < f64::EPSILON);
}

#[test]
fn test_unfinished_matches_are_skipped() {
    let mut unfinished: MatchRecord =
        MatchRecord::new("Alpha", "Beta", "2026-02-08", "Liga Asobal").unwrap();
    unfinished.result = None;

    let matches = vec![finished_match("Alpha", "Beta", "28-24"), unfinished];

    let averages: Vec<TeamAverages> = compute_team_averages(&matches);
    assert_eq!(averages[0].matches_played, 1);
    assert!((averages[0].goals_for_avg - 28.0).abs() < f64::EPSILON);
}

#[test]
fn test_no_finished_matches_yields_empty_list() {
    let mut record: MatchRecord =
        MatchRecord::new("Alpha", "Beta", "2026-02-15", "Copa").unwrap();
    record.result = None;
    assert!(compute_team_averages(&[record]).is_empty());
}
