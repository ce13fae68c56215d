// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur when constructing or validating domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A string from the boundary did not match any value of a closed enum.
    UnknownEnumValue {
        /// The field the value was supplied for.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A match result string was not of the form "H-A" with numeric scores.
    InvalidMatchResult(String),
    /// A required name field was empty or otherwise malformed.
    InvalidName {
        /// The field the value was supplied for.
        field: &'static str,
        /// The reason the value was rejected.
        message: String,
    },
    /// A date string could not be parsed as an ISO-8601 calendar date.
    InvalidDate(String),
    /// A possession number was outside the valid range (must be >= 1).
    InvalidPossessionNumber(u32),
    /// The requested club does not exist.
    ClubNotFound(i64),
    /// The requested team does not exist.
    TeamNotFound(i64),
    /// The requested match does not exist.
    MatchNotFound(i64),
    /// A club with the same name already exists.
    DuplicateClubName(String),
    /// A team with the same name already exists within the club.
    DuplicateTeamName {
        /// The club the team was being added to.
        club_id: i64,
        /// The duplicated team name.
        name: String,
    },
    /// The match has no recorded actions to delete.
    NoActionsRecorded(i64),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownEnumValue { field, value } => {
                write!(f, "Unknown value for {field}: {value}")
            }
            Self::InvalidMatchResult(value) => {
                write!(f, "Invalid match result (expected \"H-A\"): {value}")
            }
            Self::InvalidName { field, message } => write!(f, "Invalid {field}: {message}"),
            Self::InvalidDate(value) => write!(f, "Invalid ISO-8601 date: {value}"),
            Self::InvalidPossessionNumber(n) => {
                write!(f, "Possession number must be at least 1, got {n}")
            }
            Self::ClubNotFound(id) => write!(f, "Club not found: {id}"),
            Self::TeamNotFound(id) => write!(f, "Team not found: {id}"),
            Self::MatchNotFound(id) => write!(f, "Match not found: {id}"),
            Self::DuplicateClubName(name) => {
                write!(f, "A club named '{name}' already exists")
            }
            Self::DuplicateTeamName { club_id, name } => {
                write!(f, "Club {club_id} already has a team named '{name}'")
            }
            Self::NoActionsRecorded(match_id) => {
                write!(f, "Match {match_id} has no recorded actions")
            }
        }
    }
}

impl std::error::Error for DomainError {}
