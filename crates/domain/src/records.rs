// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;
use time::format_description::well_known::Iso8601;

/// A handball club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    /// The canonical numeric identifier assigned by the store.
    /// `None` indicates the club has not been persisted yet.
    pub club_id: Option<i64>,
    /// The club's name. Unique across clubs.
    pub name: String,
    /// The city the club plays in.
    pub city: String,
}

impl Club {
    /// Creates a new `Club` without a persisted ID.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the name or city is blank.
    pub fn new(name: &str, city: &str) -> Result<Self, DomainError> {
        validate_name("club name", name)?;
        validate_name("club city", city)?;
        Ok(Self {
            club_id: None,
            name: name.trim().to_string(),
            city: city.trim().to_string(),
        })
    }
}

/// A team belonging to a club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// The canonical numeric identifier assigned by the store.
    pub team_id: Option<i64>,
    /// The owning club.
    pub club_id: i64,
    /// The team's name. Unique within its club.
    pub name: String,
    /// Age/competition category (e.g., "Senior", "Juvenil").
    pub category: String,
}

impl Team {
    /// Creates a new `Team` without a persisted ID.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the name or category is blank.
    pub fn new(club_id: i64, name: &str, category: &str) -> Result<Self, DomainError> {
        validate_name("team name", name)?;
        validate_name("team category", category)?;
        Ok(Self {
            team_id: None,
            club_id,
            name: name.trim().to_string(),
            category: category.trim().to_string(),
        })
    }
}

/// The final score of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Goals scored by the home side.
    pub home_goals: u16,
    /// Goals scored by the away side.
    pub away_goals: u16,
}

impl MatchResult {
    /// Parses a result string of the form `"24-22"`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMatchResult` if the string is not two
    /// dash-separated non-negative scores.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidMatchResult(value.to_string());
        let (home, away) = value.trim().split_once('-').ok_or_else(invalid)?;
        let home_goals: u16 = home.trim().parse().map_err(|_| invalid())?;
        let away_goals: u16 = away.trim().parse().map_err(|_| invalid())?;
        Ok(Self {
            home_goals,
            away_goals,
        })
    }

    /// Formats the result back to its wire form.
    #[must_use]
    pub fn as_string(&self) -> String {
        format!("{}-{}", self.home_goals, self.away_goals)
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home_goals, self.away_goals)
    }
}

/// A scheduled or finished match between two named teams.
///
/// Team names are denormalized strings: a match may involve an opponent
/// that is not registered as a club in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// The canonical numeric identifier assigned by the store.
    pub match_id: Option<i64>,
    /// Name of the home team.
    pub home_team_name: String,
    /// Name of the away team.
    pub away_team_name: String,
    /// Calendar date the match is played on, ISO-8601 (`YYYY-MM-DD`).
    pub played_on: String,
    /// The competition the match belongs to.
    pub competition: String,
    /// Final score, once the match is finished.
    pub result: Option<MatchResult>,
}

impl MatchRecord {
    /// Creates a new `MatchRecord` without a persisted ID or result.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if a team name or the competition
    /// is blank, or `DomainError::InvalidDate` if `played_on` is not an
    /// ISO-8601 calendar date.
    pub fn new(
        home_team_name: &str,
        away_team_name: &str,
        played_on: &str,
        competition: &str,
    ) -> Result<Self, DomainError> {
        validate_name("home team name", home_team_name)?;
        validate_name("away team name", away_team_name)?;
        validate_name("competition", competition)?;
        let played_on: String = played_on.trim().to_string();
        Date::parse(&played_on, &Iso8601::DEFAULT)
            .map_err(|_| DomainError::InvalidDate(played_on.clone()))?;
        Ok(Self {
            match_id: None,
            home_team_name: home_team_name.trim().to_string(),
            away_team_name: away_team_name.trim().to_string(),
            played_on,
            competition: competition.trim().to_string(),
            result: None,
        })
    }

    /// Returns whether a final score has been recorded.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.result.is_some()
    }
}

/// Rejects blank or whitespace-only name fields.
fn validate_name(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidName {
            field,
            message: String::from("must not be blank"),
        });
    }
    Ok(())
}
