// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! In-memory store for the Courtlog match recorder.
//!
//! The store is the sole owner of persisted state: the directory, the
//! per-match action logs, operator accounts, sessions, and the audit
//! timeline. The functional core produces immutable transition results;
//! the store assigns identifiers and makes them durable for the life of
//! the process. Durable storage beyond the process is an external
//! concern.

mod error;
mod operators;
mod sessions;

#[cfg(test)]
mod tests;

pub use error::StoreError;
pub use operators::{OperatorData, hash_password, verify_password};
pub use sessions::SessionData;

use courtlog::{Directory, DirectoryResult, MatchLog, TransitionResult};
use courtlog_audit::AuditEvent;
use std::collections::HashMap;
use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;

/// An audit event with its assigned identifier and receipt timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAuditEvent {
    /// The canonical numeric identifier.
    pub event_id: i64,
    /// When the store received the event, ISO-8601.
    pub recorded_at: String,
    /// The event itself.
    pub event: AuditEvent,
}

/// The in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    directory: Directory,
    logs: HashMap<i64, MatchLog>,
    audit_events: Vec<StoredAuditEvent>,
    operators: Vec<OperatorData>,
    sessions: Vec<SessionData>,
    next_club_id: i64,
    next_team_id: i64,
    next_match_id: i64,
    next_action_id: i64,
    next_event_id: i64,
    next_operator_id: i64,
}

impl MemoryStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current directory.
    #[must_use]
    pub const fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Persists a directory transition, assigning identifiers to any
    /// newly created records and recording the audit event.
    ///
    /// Creating a match also creates its empty action log.
    ///
    /// Returns the assigned audit event identifier.
    pub fn persist_directory(&mut self, result: DirectoryResult) -> i64 {
        let mut directory: Directory = result.new_directory;

        for club in &mut directory.clubs {
            if club.club_id.is_none() {
                self.next_club_id += 1;
                club.club_id = Some(self.next_club_id);
            }
        }
        for team in &mut directory.teams {
            if team.team_id.is_none() {
                self.next_team_id += 1;
                team.team_id = Some(self.next_team_id);
            }
        }
        for record in &mut directory.matches {
            if record.match_id.is_none() {
                self.next_match_id += 1;
                record.match_id = Some(self.next_match_id);
                self.logs
                    .insert(self.next_match_id, MatchLog::new(self.next_match_id));
            }
        }

        self.directory = directory;
        self.append_audit_event(result.audit_event)
    }

    /// Returns the action log of a match.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MatchNotFound` if the match has no log.
    pub fn match_log(&self, match_id: i64) -> Result<&MatchLog, StoreError> {
        self.logs
            .get(&match_id)
            .ok_or(StoreError::MatchNotFound(match_id))
    }

    /// Persists a match-log transition, assigning identifiers to any
    /// newly appended actions and recording the audit event.
    ///
    /// Returns the assigned audit event identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MatchNotFound` if the log's match is unknown.
    pub fn persist_transition(&mut self, result: TransitionResult) -> Result<i64, StoreError> {
        let mut log: MatchLog = result.new_log;
        if !self.logs.contains_key(&log.match_id) {
            return Err(StoreError::MatchNotFound(log.match_id));
        }

        for action in &mut log.actions {
            if action.action_id.is_none() {
                self.next_action_id += 1;
                action.action_id = Some(self.next_action_id);
            }
        }

        self.logs.insert(log.match_id, log);
        Ok(self.append_audit_event(result.audit_event))
    }

    /// Returns the full audit timeline, oldest first.
    #[must_use]
    pub fn audit_timeline(&self) -> &[StoredAuditEvent] {
        &self.audit_events
    }

    /// Returns the audit timeline of one match, oldest first.
    #[must_use]
    pub fn match_timeline(&self, match_id: i64) -> Vec<&StoredAuditEvent> {
        self.audit_events
            .iter()
            .filter(|stored| stored.event.match_scope == Some(match_id))
            .collect()
    }

    fn append_audit_event(&mut self, event: AuditEvent) -> i64 {
        self.next_event_id += 1;
        let recorded_at: String = OffsetDateTime::now_utc()
            .format(&Iso8601::DEFAULT)
            .unwrap_or_default();
        self.audit_events.push(StoredAuditEvent {
            event_id: self.next_event_id,
            recorded_at,
            event,
        });
        self.next_event_id
    }

    /// Creates an operator account with a bcrypt-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateLoginName` if the login name is
    /// taken, or `StoreError::PasswordHash` if hashing fails.
    pub fn create_operator(
        &mut self,
        login_name: &str,
        display_name: &str,
        role_name: &str,
        password: &str,
    ) -> Result<OperatorData, StoreError> {
        if self.operators.iter().any(|op| op.login_name == login_name) {
            return Err(StoreError::DuplicateLoginName(login_name.to_string()));
        }

        let password_hash: String = operators::hash_password(password)?;
        self.next_operator_id += 1;
        let operator = OperatorData {
            operator_id: self.next_operator_id,
            login_name: login_name.to_string(),
            display_name: display_name.to_string(),
            role_name: role_name.to_string(),
            password_hash,
            disabled: false,
        };
        self.operators.push(operator.clone());
        Ok(operator)
    }

    /// Looks up an operator by login name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::OperatorNotFound` if no operator matches.
    pub fn operator_by_login(&self, login_name: &str) -> Result<&OperatorData, StoreError> {
        self.operators
            .iter()
            .find(|op| op.login_name == login_name)
            .ok_or_else(|| StoreError::OperatorNotFound(login_name.to_string()))
    }

    /// Looks up an operator by identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::OperatorNotFound` if no operator matches.
    pub fn operator_by_id(&self, operator_id: i64) -> Result<&OperatorData, StoreError> {
        self.operators
            .iter()
            .find(|op| op.operator_id == operator_id)
            .ok_or_else(|| StoreError::OperatorNotFound(operator_id.to_string()))
    }

    /// Returns all operator accounts.
    #[must_use]
    pub fn list_operators(&self) -> &[OperatorData] {
        &self.operators
    }

    /// Stores a new session.
    pub fn create_session(&mut self, session: SessionData) {
        self.sessions.push(session);
    }

    /// Looks up a session by token, checking expiry and the owning
    /// operator's status.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SessionNotFound` for an unknown token,
    /// `StoreError::SessionExpired` for a stale one, and
    /// `StoreError::OperatorDisabled` if the owning account is disabled.
    pub fn validate_session(&self, token: &str) -> Result<&OperatorData, StoreError> {
        let session: &SessionData = self
            .sessions
            .iter()
            .find(|s| s.token == token)
            .ok_or(StoreError::SessionNotFound)?;

        if session.is_expired(OffsetDateTime::now_utc())? {
            return Err(StoreError::SessionExpired);
        }

        let operator: &OperatorData = self.operator_by_id(session.operator_id)?;
        if operator.disabled {
            return Err(StoreError::OperatorDisabled(operator.login_name.clone()));
        }
        Ok(operator)
    }

    /// Deletes a session by token. Unknown tokens are ignored.
    pub fn delete_session(&mut self, token: &str) {
        self.sessions.retain(|s| s.token != token);
    }
}
