// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Directory, DirectoryResult, MatchLog, TransitionResult};
use courtlog_audit::{Actor, AuditAction, AuditEvent, Cause, StateSnapshot};
use courtlog_domain::{
    ActionRecord, Club, DomainError, MatchRecord, Team, TurnSuggestion, Violation,
    changes_possession, suggest_next_turn, validate_action,
};

/// Applies a directory command, producing a new directory and audit event.
///
/// Directory commands (`CreateClub`, `CreateTeam`, `CreateMatch`,
/// `SetMatchResult`) operate on global metadata, not on a match's log.
///
/// # Arguments
///
/// * `directory` - The current directory (immutable)
/// * `command` - The directory command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(DirectoryResult)` containing the new directory and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The command violates domain rules (blank fields, duplicates,
///   unknown club or match)
/// - The command is a match-log command
pub fn apply_directory(
    directory: &Directory,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<DirectoryResult, CoreError> {
    match command {
        Command::CreateClub { name, city } => {
            let club: Club = Club::new(&name, &city)?;

            if directory.club_name_taken(&club.name) {
                return Err(CoreError::DomainViolation(DomainError::DuplicateClubName(
                    club.name,
                )));
            }

            let mut new_directory: Directory = directory.clone();
            new_directory.clubs.push(club.clone());

            let action: AuditAction = AuditAction::new(
                String::from("CreateClub"),
                Some(format!("Created club '{}' in {}", club.name, club.city)),
            );

            Ok(directory_result(directory, new_directory, actor, cause, action))
        }
        Command::CreateTeam {
            club_id,
            name,
            category,
        } => {
            if !directory.has_club(club_id) {
                return Err(CoreError::DomainViolation(DomainError::ClubNotFound(
                    club_id,
                )));
            }

            let team: Team = Team::new(club_id, &name, &category)?;

            if directory.team_name_taken(club_id, &team.name) {
                return Err(CoreError::DomainViolation(DomainError::DuplicateTeamName {
                    club_id,
                    name: team.name,
                }));
            }

            let mut new_directory: Directory = directory.clone();
            new_directory.teams.push(team.clone());

            let action: AuditAction = AuditAction::new(
                String::from("CreateTeam"),
                Some(format!(
                    "Created team '{}' ({}) under club {club_id}",
                    team.name, team.category
                )),
            );

            Ok(directory_result(directory, new_directory, actor, cause, action))
        }
        Command::CreateMatch {
            home_team_name,
            away_team_name,
            played_on,
            competition,
        } => {
            let record: MatchRecord =
                MatchRecord::new(&home_team_name, &away_team_name, &played_on, &competition)?;

            let mut new_directory: Directory = directory.clone();
            new_directory.matches.push(record.clone());

            let action: AuditAction = AuditAction::new(
                String::from("CreateMatch"),
                Some(format!(
                    "Created match {} vs {} on {} ({})",
                    record.home_team_name, record.away_team_name, record.played_on,
                    record.competition
                )),
            );

            Ok(directory_result(directory, new_directory, actor, cause, action))
        }
        Command::SetMatchResult { match_id, result } => {
            if directory.find_match(match_id).is_none() {
                return Err(CoreError::DomainViolation(DomainError::MatchNotFound(
                    match_id,
                )));
            }

            let mut new_directory: Directory = directory.clone();
            for record in &mut new_directory.matches {
                if record.match_id == Some(match_id) {
                    record.result = Some(result);
                }
            }

            let action: AuditAction = AuditAction::new(
                String::from("SetMatchResult"),
                Some(format!("Recorded result {result} for match {match_id}")),
            );

            Ok(directory_result(directory, new_directory, actor, cause, action))
        }
        other => Err(CoreError::NotADirectoryCommand(other.name())),
    }
}

/// Applies a match-log command, producing a new log and audit event.
///
/// `RecordAction` is validation-gated: a candidate with any rule
/// violations is rejected with the full violation list, including the
/// turn-consistency checks derived from the possession sequencer.
/// `DeleteLastAction` removes only the newest action; possession numbers
/// of remaining actions are never rewritten.
///
/// # Arguments
///
/// * `log` - The current match log (immutable)
/// * `command` - The match-log command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new log and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The candidate fails validation (`CoreError::InvalidAction`)
/// - The candidate targets a different match than the log
/// - The log has no actions to delete
/// - The command is a directory command
pub fn apply(
    log: &MatchLog,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::RecordAction { candidate } => {
            if candidate.match_id != log.match_id {
                return Err(CoreError::MatchScopeMismatch {
                    expected: log.match_id,
                    found: candidate.match_id,
                });
            }

            let mut violations: Vec<Violation> = validate_action(&candidate);
            check_turn_consistency(&log.actions, &candidate, &mut violations);
            if !violations.is_empty() {
                return Err(CoreError::InvalidAction(violations));
            }

            // The possession flag is derived, never taken from the caller.
            let mut recorded: ActionRecord = candidate;
            recorded.possession_changed =
                changes_possession(recorded.event_kind, recorded.event_detail);

            let action: AuditAction = AuditAction::new(
                String::from("RecordAction"),
                Some(format!(
                    "possession={} team={} event={} changed={}",
                    recorded.possession_number,
                    recorded.team_side,
                    recorded.event_kind,
                    recorded.possession_changed
                )),
            );

            let mut new_log: MatchLog = log.clone();
            new_log.actions.push(recorded);

            Ok(transition_result(log, new_log, actor, cause, action))
        }
        Command::DeleteLastAction { match_id } => {
            if match_id != log.match_id {
                return Err(CoreError::MatchScopeMismatch {
                    expected: log.match_id,
                    found: match_id,
                });
            }

            let mut new_log: MatchLog = log.clone();
            let Some(removed) = new_log.actions.pop() else {
                return Err(CoreError::DomainViolation(DomainError::NoActionsRecorded(
                    match_id,
                )));
            };

            let action: AuditAction = AuditAction::new(
                String::from("DeleteLastAction"),
                Some(format!(
                    "Removed possession={} team={} event={}",
                    removed.possession_number, removed.team_side, removed.event_kind
                )),
            );

            Ok(transition_result(log, new_log, actor, cause, action))
        }
        other => Err(CoreError::NotAMatchCommand(other.name())),
    }
}

/// Turn-consistency checks a candidate must pass against the log's
/// current sequencer suggestion.
fn check_turn_consistency(
    history: &[ActionRecord],
    candidate: &ActionRecord,
    violations: &mut Vec<Violation>,
) {
    let suggestion: TurnSuggestion = suggest_next_turn(history);

    if candidate.possession_number != suggestion.next_possession_number {
        violations.push(Violation {
            code: "possession_number_mismatch",
            message: format!(
                "Expected possession {}, got {}",
                suggestion.next_possession_number, candidate.possession_number
            ),
        });
    }

    if let Some(side) = suggestion.suggested_team_side
        && candidate.team_side != side
    {
        violations.push(Violation {
            code: "team_side_not_on_turn",
            message: format!("It is {side}'s turn, not {}", candidate.team_side),
        });
    }

    if !suggestion.allowed_origins.contains(&candidate.action_origin) {
        violations.push(Violation {
            code: "origin_not_allowed_for_turn",
            message: format!(
                "Origin {} is not available for this turn",
                candidate.action_origin
            ),
        });
    }
}

fn directory_result(
    directory: &Directory,
    new_directory: Directory,
    actor: Actor,
    cause: Cause,
    action: AuditAction,
) -> DirectoryResult {
    let before: StateSnapshot = directory.to_snapshot();
    let after: StateSnapshot = new_directory.to_snapshot();
    let audit_event: AuditEvent = AuditEvent::new(actor, cause, action, None, before, after);
    DirectoryResult {
        new_directory,
        audit_event,
    }
}

fn transition_result(
    log: &MatchLog,
    new_log: MatchLog,
    actor: Actor,
    cause: Cause,
    action: AuditAction,
) -> TransitionResult {
    let before: StateSnapshot = log.to_snapshot();
    let after: StateSnapshot = new_log.to_snapshot();
    let audit_event: AuditEvent =
        AuditEvent::new(actor, cause, action, Some(log.match_id), before, after);
    TransitionResult {
        new_log,
        audit_event,
    }
}
