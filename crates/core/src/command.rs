// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtlog_domain::{ActionRecord, MatchResult};

/// Commands are data-only descriptions of requested state changes.
///
/// Directory commands touch the club/team/match directory; match commands
/// touch one match's action log. `apply_directory` and `apply` each accept
/// only their own class.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a new club in the directory.
    CreateClub {
        /// The club's name. Unique across clubs.
        name: String,
        /// The city the club plays in.
        city: String,
    },
    /// Create a new team under an existing club.
    CreateTeam {
        /// The owning club's persisted identifier.
        club_id: i64,
        /// The team's name. Unique within the club.
        name: String,
        /// Age/competition category.
        category: String,
    },
    /// Create a new match in the directory.
    CreateMatch {
        /// Name of the home team.
        home_team_name: String,
        /// Name of the away team.
        away_team_name: String,
        /// Calendar date, ISO-8601 (`YYYY-MM-DD`).
        played_on: String,
        /// The competition the match belongs to.
        competition: String,
    },
    /// Record the final score of an existing match.
    SetMatchResult {
        /// The match's persisted identifier.
        match_id: i64,
        /// The final score.
        result: MatchResult,
    },
    /// Append a validated action to a match's log.
    RecordAction {
        /// The candidate action. `possession_changed` is derived during
        /// the transition, whatever the caller set.
        candidate: ActionRecord,
    },
    /// Delete the newest action of a match's log.
    DeleteLastAction {
        /// The match's persisted identifier.
        match_id: i64,
    },
}

impl Command {
    /// Returns the stable name of this command, used for audit events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateClub { .. } => "CreateClub",
            Self::CreateTeam { .. } => "CreateTeam",
            Self::CreateMatch { .. } => "CreateMatch",
            Self::SetMatchResult { .. } => "SetMatchResult",
            Self::RecordAction { .. } => "RecordAction",
            Self::DeleteLastAction { .. } => "DeleteLastAction",
        }
    }

    /// Returns whether this command targets the directory rather than a
    /// single match's action log.
    #[must_use]
    pub const fn is_directory_command(&self) -> bool {
        matches!(
            self,
            Self::CreateClub { .. }
                | Self::CreateTeam { .. }
                | Self::CreateMatch { .. }
                | Self::SetMatchResult { .. }
        )
    }
}
