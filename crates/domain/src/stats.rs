// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::records::MatchRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Goal averages for one team across its finished matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAverages {
    /// The team's name as it appears in match records.
    pub team_name: String,
    /// Finished matches the team appeared in.
    pub matches_played: u32,
    /// Average goals scored per match.
    pub goals_for_avg: f64,
    /// Average goals conceded per match.
    pub goals_against_avg: f64,
}

#[derive(Default)]
struct Tally {
    matches: u32,
    goals_for: u32,
    goals_against: u32,
}

/// Computes per-team goal averages from finished matches.
///
/// Matches without a recorded result are skipped. Teams are keyed by the
/// denormalized name strings on the match records and returned in name
/// order.
#[must_use]
pub fn compute_team_averages(matches: &[MatchRecord]) -> Vec<TeamAverages> {
    let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();

    for record in matches {
        let Some(result) = record.result else {
            continue;
        };
        let home = tallies.entry(record.home_team_name.as_str()).or_default();
        home.matches += 1;
        home.goals_for += u32::from(result.home_goals);
        home.goals_against += u32::from(result.away_goals);

        let away = tallies.entry(record.away_team_name.as_str()).or_default();
        away.matches += 1;
        away.goals_for += u32::from(result.away_goals);
        away.goals_against += u32::from(result.home_goals);
    }

    tallies
        .into_iter()
        .map(|(name, tally)| TeamAverages {
            team_name: name.to_string(),
            matches_played: tally.matches,
            goals_for_avg: f64::from(tally.goals_for) / f64::from(tally.matches),
            goals_against_avg: f64::from(tally.goals_against) / f64::from(tally.matches),
        })
        .collect()
}
