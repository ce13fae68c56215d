// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operation handlers.
//!
//! Every mutating handler follows the same shape: authorize the actor,
//! load the current state from the store, apply the command through the
//! rules engine, persist the transition, and build the response. The
//! transport layer above only parses requests and renders responses.

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    ActionRequest, ActionResponse, AuditEventResponse, ClubResponse, CreateClubRequest,
    CreateMatchRequest, CreateTeamRequest, MatchResponse, NextTurnResponse, OperatorSummary,
    RegisterOperatorRequest, SetMatchResultRequest, TeamAveragesResponse, TeamResponse,
    ValidateActionResponse, ViolationBody,
};
use courtlog::{Command, CoreError, MatchLog, TransitionResult, apply, apply_directory};
use courtlog_audit::{Actor, Cause};
use courtlog_domain::{
    ActionRecord, MatchResult, TurnSuggestion, compute_team_averages, suggest_next_turn,
};
use courtlog_store::{MemoryStore, OperatorData, StoredAuditEvent};

/// Registers a new operator account. Admin only.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for non-admins,
/// `ApiError::PasswordPolicyViolation` for a weak password, and
/// `ApiError::DomainRuleViolation` for a taken login name.
pub fn register_operator(
    store: &mut MemoryStore,
    actor: &AuthenticatedActor,
    request: &RegisterOperatorRequest,
) -> Result<OperatorSummary, ApiError> {
    AuthorizationService::authorize_register_operator(actor)?;
    crate::auth::Role::parse(&request.role).map_err(|_| ApiError::InvalidInput {
        field: String::from("role"),
        message: format!("Unknown role '{}'", request.role),
    })?;
    PasswordPolicy::default().validate(
        &request.password,
        &request.password_confirmation,
        &request.login_name,
        &request.display_name,
    )?;

    let operator: OperatorData = store.create_operator(
        &request.login_name,
        &request.display_name,
        &request.role,
        &request.password,
    )?;
    tracing::info!(
        login_name = %operator.login_name,
        role = %operator.role_name,
        "Registered operator"
    );
    Ok(OperatorSummary::from_operator(&operator))
}

/// Lists all operator accounts. Admin only.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for non-admins.
pub fn list_operators(
    store: &MemoryStore,
    actor: &AuthenticatedActor,
) -> Result<Vec<OperatorSummary>, ApiError> {
    AuthorizationService::authorize_register_operator(actor)?;
    Ok(store
        .list_operators()
        .iter()
        .map(OperatorSummary::from_operator)
        .collect())
}

/// Creates a club. Admin only.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for non-admins and
/// `ApiError::DomainRuleViolation` for a duplicate club name.
pub fn create_club(
    store: &mut MemoryStore,
    actor: &AuthenticatedActor,
    operator: &OperatorData,
    request: &CreateClubRequest,
) -> Result<ClubResponse, ApiError> {
    AuthorizationService::authorize_manage_clubs(actor)?;

    let result = apply_directory(
        store.directory(),
        Command::CreateClub {
            name: request.name.clone(),
            city: request.city.clone(),
        },
        actor.to_audit_actor(operator),
        request_cause(operator, "Create club"),
    )
    .map_err(translate_core_error)?;
    store.persist_directory(result);

    let club = store.directory().clubs.last().ok_or_else(missing_record)?;
    tracing::info!(name = %club.name, "Created club");
    Ok(ClubResponse::from_club(club))
}

/// Lists all clubs.
#[must_use]
pub fn list_clubs(store: &MemoryStore) -> Vec<ClubResponse> {
    store
        .directory()
        .clubs
        .iter()
        .map(ClubResponse::from_club)
        .collect()
}

/// Creates a team within a club. Admin or `ClubManager`.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for coaches,
/// `ApiError::ResourceNotFound` for an unknown club, and
/// `ApiError::DomainRuleViolation` for a duplicate team name within
/// the club.
pub fn create_team(
    store: &mut MemoryStore,
    actor: &AuthenticatedActor,
    operator: &OperatorData,
    request: &CreateTeamRequest,
) -> Result<TeamResponse, ApiError> {
    AuthorizationService::authorize_manage_teams(actor)?;

    let result = apply_directory(
        store.directory(),
        Command::CreateTeam {
            club_id: request.club_id,
            name: request.name.clone(),
            category: request.category.clone(),
        },
        actor.to_audit_actor(operator),
        request_cause(operator, "Create team"),
    )
    .map_err(translate_core_error)?;
    store.persist_directory(result);

    let team = store.directory().teams.last().ok_or_else(missing_record)?;
    tracing::info!(name = %team.name, club_id = team.club_id, "Created team");
    Ok(TeamResponse::from_team(team))
}

/// Lists all teams.
#[must_use]
pub fn list_teams(store: &MemoryStore) -> Vec<TeamResponse> {
    store
        .directory()
        .teams
        .iter()
        .map(TeamResponse::from_team)
        .collect()
}

/// Creates a match. Any authenticated role.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for bad names or dates.
pub fn create_match(
    store: &mut MemoryStore,
    actor: &AuthenticatedActor,
    operator: &OperatorData,
    request: &CreateMatchRequest,
) -> Result<MatchResponse, ApiError> {
    AuthorizationService::authorize_manage_matches(actor)?;

    let result = apply_directory(
        store.directory(),
        Command::CreateMatch {
            home_team_name: request.home_team_name.clone(),
            away_team_name: request.away_team_name.clone(),
            played_on: request.played_on.clone(),
            competition: request.competition.clone(),
        },
        actor.to_audit_actor(operator),
        request_cause(operator, "Create match"),
    )
    .map_err(translate_core_error)?;
    store.persist_directory(result);

    let record = store.directory().matches.last().ok_or_else(missing_record)?;
    tracing::info!(
        home = %record.home_team_name,
        away = %record.away_team_name,
        "Created match"
    );
    Ok(MatchResponse::from_record(record))
}

/// Lists all matches.
#[must_use]
pub fn list_matches(store: &MemoryStore) -> Vec<MatchResponse> {
    store
        .directory()
        .matches
        .iter()
        .map(MatchResponse::from_record)
        .collect()
}

/// Records the final score of a match. Any authenticated role.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for a malformed score and
/// `ApiError::ResourceNotFound` for an unknown match.
pub fn set_match_result(
    store: &mut MemoryStore,
    actor: &AuthenticatedActor,
    operator: &OperatorData,
    match_id: i64,
    request: &SetMatchResultRequest,
) -> Result<MatchResponse, ApiError> {
    AuthorizationService::authorize_manage_matches(actor)?;

    let parsed: MatchResult =
        MatchResult::parse(&request.result).map_err(translate_domain_error)?;
    let result = apply_directory(
        store.directory(),
        Command::SetMatchResult {
            match_id,
            result: parsed,
        },
        actor.to_audit_actor(operator),
        request_cause(operator, "Set match result"),
    )
    .map_err(translate_core_error)?;
    store.persist_directory(result);

    let record = store
        .directory()
        .matches
        .iter()
        .find(|m| m.match_id == Some(match_id))
        .ok_or_else(missing_record)?;
    tracing::info!(match_id, result = %request.result, "Recorded match result");
    Ok(MatchResponse::from_record(record))
}

/// Lists the recorded actions of a match, oldest first.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` for an unknown match.
pub fn list_actions(store: &MemoryStore, match_id: i64) -> Result<Vec<ActionResponse>, ApiError> {
    let log: &MatchLog = store.match_log(match_id)?;
    Ok(log.actions.iter().map(ActionResponse::from_record).collect())
}

/// Records a match action. Admin or Coach.
///
/// The candidate is checked against the full rule set, including turn
/// consistency with the existing log, before anything is persisted.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for club managers,
/// `ApiError::ResourceNotFound` for an unknown match, and
/// `ApiError::RuleViolations` carrying every rule the candidate
/// breaks.
pub fn record_action(
    store: &mut MemoryStore,
    actor: &AuthenticatedActor,
    operator: &OperatorData,
    match_id: i64,
    request: &ActionRequest,
) -> Result<ActionResponse, ApiError> {
    AuthorizationService::authorize_record_actions(actor)?;

    let candidate: ActionRecord = request
        .to_candidate(match_id)
        .map_err(ApiError::RuleViolations)?;
    let log: &MatchLog = store.match_log(match_id)?;
    let result: TransitionResult = apply(
        log,
        Command::RecordAction { candidate },
        actor.to_audit_actor(operator),
        request_cause(operator, "Record action"),
    )
    .map_err(translate_core_error)?;
    store.persist_transition(result)?;

    let recorded = store
        .match_log(match_id)?
        .actions
        .last()
        .ok_or_else(missing_record)?;
    tracing::info!(
        match_id,
        possession = recorded.possession_number,
        event = recorded.event_kind.as_str(),
        "Recorded action"
    );
    Ok(ActionResponse::from_record(recorded))
}

/// Checks a candidate action against the rule set without recording it.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` for an unknown match. Rule
/// violations are part of the report, not an error.
pub fn validate_action(
    store: &MemoryStore,
    match_id: i64,
    request: &ActionRequest,
) -> Result<ValidateActionResponse, ApiError> {
    let candidate: ActionRecord = match request.to_candidate(match_id) {
        Ok(candidate) => candidate,
        Err(violations) => {
            return Ok(ValidateActionResponse {
                valid: false,
                violations: violations.iter().map(ViolationBody::from_violation).collect(),
            });
        }
    };

    let log: &MatchLog = store.match_log(match_id)?;
    let outcome = apply(
        log,
        Command::RecordAction { candidate },
        Actor::new(String::from("validation"), String::from("system")),
        Cause::new(
            String::from("what-if"),
            String::from("Candidate validation, not recorded"),
        ),
    );
    match outcome {
        Ok(_) => Ok(ValidateActionResponse {
            valid: true,
            violations: Vec::new(),
        }),
        Err(CoreError::InvalidAction(violations)) => Ok(ValidateActionResponse {
            valid: false,
            violations: violations.iter().map(ViolationBody::from_violation).collect(),
        }),
        Err(err) => Err(translate_core_error(err)),
    }
}

/// Suggests the setup of the next possession of a match.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` for an unknown match.
pub fn next_turn(store: &MemoryStore, match_id: i64) -> Result<NextTurnResponse, ApiError> {
    let log: &MatchLog = store.match_log(match_id)?;
    let suggestion: TurnSuggestion = suggest_next_turn(&log.actions);
    Ok(NextTurnResponse::from_suggestion(&suggestion))
}

/// Deletes the most recently recorded action of a match. Admin or Coach.
///
/// Returns the deleted action.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for club managers,
/// `ApiError::ResourceNotFound` for an unknown match, and
/// `ApiError::DomainRuleViolation` when the log is empty.
pub fn delete_last_action(
    store: &mut MemoryStore,
    actor: &AuthenticatedActor,
    operator: &OperatorData,
    match_id: i64,
) -> Result<ActionResponse, ApiError> {
    AuthorizationService::authorize_record_actions(actor)?;

    let log: &MatchLog = store.match_log(match_id)?;
    let deleted = log.actions.last().cloned().ok_or_else(|| {
        translate_core_error(CoreError::DomainViolation(
            courtlog_domain::DomainError::NoActionsRecorded(match_id),
        ))
    })?;
    let result: TransitionResult = apply(
        log,
        Command::DeleteLastAction { match_id },
        actor.to_audit_actor(operator),
        request_cause(operator, "Delete last action"),
    )
    .map_err(translate_core_error)?;
    store.persist_transition(result)?;

    tracing::info!(
        match_id,
        possession = deleted.possession_number,
        "Deleted last action"
    );
    Ok(ActionResponse::from_record(&deleted))
}

/// Computes per-team scoring averages across finished matches.
#[must_use]
pub fn team_stats(store: &MemoryStore) -> Vec<TeamAveragesResponse> {
    compute_team_averages(&store.directory().matches)
        .into_iter()
        .map(|averages| TeamAveragesResponse {
            team_name: averages.team_name,
            matches_played: averages.matches_played,
            goals_for_avg: averages.goals_for_avg,
            goals_against_avg: averages.goals_against_avg,
        })
        .collect()
}

/// Returns the full audit timeline, oldest first. Admin only.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for non-admins.
pub fn audit_timeline(
    store: &MemoryStore,
    actor: &AuthenticatedActor,
) -> Result<Vec<AuditEventResponse>, ApiError> {
    AuthorizationService::authorize_view_audit(actor)?;
    Ok(store
        .audit_timeline()
        .iter()
        .map(audit_event_response)
        .collect())
}

/// Returns the audit timeline of one match, oldest first. Admin only.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for non-admins and
/// `ApiError::ResourceNotFound` for an unknown match.
pub fn match_audit_timeline(
    store: &MemoryStore,
    actor: &AuthenticatedActor,
    match_id: i64,
) -> Result<Vec<AuditEventResponse>, ApiError> {
    AuthorizationService::authorize_view_audit(actor)?;
    store.match_log(match_id)?;
    Ok(store
        .match_timeline(match_id)
        .into_iter()
        .map(audit_event_response)
        .collect())
}

fn audit_event_response(stored: &StoredAuditEvent) -> AuditEventResponse {
    AuditEventResponse {
        event_id: stored.event_id,
        recorded_at: stored.recorded_at.clone(),
        actor_id: stored.event.actor.id.clone(),
        actor_type: stored.event.actor.actor_type.clone(),
        cause: stored.event.cause.description.clone(),
        action: stored.event.action.name.clone(),
        details: stored.event.action.details.clone(),
        match_id: stored.event.match_scope,
        before: stored.event.before.data.clone(),
        after: stored.event.after.data.clone(),
    }
}

fn request_cause(operator: &OperatorData, description: &str) -> Cause {
    Cause::new(
        format!("operator-{}", operator.operator_id),
        description.to_string(),
    )
}

fn missing_record() -> ApiError {
    ApiError::Internal {
        message: String::from("Persisted record is missing from the store"),
    }
}
