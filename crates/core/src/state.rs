// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtlog_audit::{AuditEvent, StateSnapshot};
use courtlog_domain::{ActionRecord, Club, MatchRecord, Team, suggest_next_turn};

/// The club/team/match directory.
///
/// This is global metadata, separate from the per-match action logs.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    /// All persisted clubs.
    pub clubs: Vec<Club>,
    /// All persisted teams.
    pub teams: Vec<Team>,
    /// All persisted matches.
    pub matches: Vec<MatchRecord>,
}

impl Directory {
    /// Creates a new empty directory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clubs: Vec::new(),
            teams: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Checks if a club with this persisted identifier exists.
    #[must_use]
    pub fn has_club(&self, club_id: i64) -> bool {
        self.clubs.iter().any(|c| c.club_id == Some(club_id))
    }

    /// Checks if a club name is already taken (case-insensitive).
    #[must_use]
    pub fn club_name_taken(&self, name: &str) -> bool {
        self.clubs
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Checks if a team name is already taken within a club.
    #[must_use]
    pub fn team_name_taken(&self, club_id: i64, name: &str) -> bool {
        self.teams
            .iter()
            .any(|t| t.club_id == club_id && t.name.eq_ignore_ascii_case(name))
    }

    /// Looks up a match by its persisted identifier.
    #[must_use]
    pub fn find_match(&self, match_id: i64) -> Option<&MatchRecord> {
        self.matches
            .iter()
            .find(|m| m.match_id == Some(match_id))
    }

    /// Converts the directory to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(format!(
            "clubs={},teams={},matches={}",
            self.clubs.len(),
            self.teams.len(),
            self.matches.len()
        ))
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

/// The ordered action log of a single match.
///
/// The log is the unit of scoped state: every record/delete transition
/// reads and replaces one `MatchLog`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchLog {
    /// The match this log belongs to.
    pub match_id: i64,
    /// Recorded actions, oldest first.
    pub actions: Vec<ActionRecord>,
}

impl MatchLog {
    /// Creates a new empty log for a match.
    ///
    /// # Arguments
    ///
    /// * `match_id` - The match this log is scoped to
    #[must_use]
    pub const fn new(match_id: i64) -> Self {
        Self {
            match_id,
            actions: Vec::new(),
        }
    }

    /// Converts the log to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        let next: u32 = suggest_next_turn(&self.actions).next_possession_number;
        StateSnapshot::new(format!(
            "match={},actions={},next_possession={next}",
            self.match_id,
            self.actions.len()
        ))
    }
}

/// The result of a successful match-log transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new log after the transition.
    pub new_log: MatchLog,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}

/// The result of a successful directory transition.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryResult {
    /// The new directory after the transition.
    pub new_directory: Directory,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}
