// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response bodies for the HTTP surface.
//!
//! Enum-valued fields travel as their SCREAMING_SNAKE_CASE wire names
//! and are parsed here, at the boundary. Unknown values surface as
//! `unknown_enum_value` violations rather than deserialization errors
//! so clients always receive the full list of problems.

use courtlog_domain::{
    ActionOrigin, ActionRecord, AttackType, Club, DomainError, EventDetail, EventKind,
    FinalizationDetail, LaunchZone, MatchRecord, Team, TeamSide, TurnSuggestion, Violation,
};
use courtlog_store::OperatorData;
use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The operator's login name.
    pub login_name: String,
    /// The operator's password, plaintext over the transport.
    pub password: String,
}

/// Public view of an operator account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorSummary {
    /// The operator identifier.
    pub operator_id: i64,
    /// The login name.
    pub login_name: String,
    /// The display name.
    pub display_name: String,
    /// The role name.
    pub role: String,
    /// Whether the account is disabled.
    pub disabled: bool,
}

impl OperatorSummary {
    /// Builds a summary from a stored operator, omitting the hash.
    #[must_use]
    pub fn from_operator(operator: &OperatorData) -> Self {
        Self {
            operator_id: operator.operator_id,
            login_name: operator.login_name.clone(),
            display_name: operator.display_name.clone(),
            role: operator.role_name.clone(),
            disabled: operator.disabled,
        }
    }
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The session token to present on subsequent requests.
    pub session_token: String,
    /// The authenticated operator.
    pub operator: OperatorSummary,
}

/// Operator registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterOperatorRequest {
    /// The new operator's login name.
    pub login_name: String,
    /// The new operator's display name.
    pub display_name: String,
    /// The new operator's role name.
    pub role: String,
    /// The new operator's password.
    pub password: String,
    /// Confirmation of the password.
    pub password_confirmation: String,
}

/// Club creation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClubRequest {
    /// The club name, unique ignoring case.
    pub name: String,
    /// The club's home city.
    pub city: String,
}

/// Public view of a club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubResponse {
    /// The club identifier.
    pub club_id: Option<i64>,
    /// The club name.
    pub name: String,
    /// The club's home city.
    pub city: String,
}

impl ClubResponse {
    /// Builds a response from a directory club record.
    #[must_use]
    pub fn from_club(club: &Club) -> Self {
        Self {
            club_id: club.club_id,
            name: club.name.clone(),
            city: club.city.clone(),
        }
    }
}

/// Team creation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamRequest {
    /// The owning club.
    pub club_id: i64,
    /// The team name, unique within the club.
    pub name: String,
    /// The competition category, e.g. "Senior".
    pub category: String,
}

/// Public view of a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamResponse {
    /// The team identifier.
    pub team_id: Option<i64>,
    /// The owning club.
    pub club_id: i64,
    /// The team name.
    pub name: String,
    /// The competition category.
    pub category: String,
}

impl TeamResponse {
    /// Builds a response from a directory team record.
    #[must_use]
    pub fn from_team(team: &Team) -> Self {
        Self {
            team_id: team.team_id,
            club_id: team.club_id,
            name: team.name.clone(),
            category: team.category.clone(),
        }
    }
}

/// Match creation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMatchRequest {
    /// The home team's name.
    pub home_team_name: String,
    /// The away team's name.
    pub away_team_name: String,
    /// The date the match is played, ISO-8601.
    pub played_on: String,
    /// The competition the match belongs to.
    pub competition: String,
}

/// Public view of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResponse {
    /// The match identifier.
    pub match_id: Option<i64>,
    /// The home team's name.
    pub home_team_name: String,
    /// The away team's name.
    pub away_team_name: String,
    /// The date the match is played, ISO-8601.
    pub played_on: String,
    /// The competition the match belongs to.
    pub competition: String,
    /// The final score, "home-away", once recorded.
    pub result: Option<String>,
    /// Whether a final score has been recorded.
    pub finished: bool,
}

impl MatchResponse {
    /// Builds a response from a directory match record.
    #[must_use]
    pub fn from_record(record: &MatchRecord) -> Self {
        Self {
            match_id: record.match_id,
            home_team_name: record.home_team_name.clone(),
            away_team_name: record.away_team_name.clone(),
            played_on: record.played_on.clone(),
            competition: record.competition.clone(),
            result: record.result.map(|r| r.as_string()),
            finished: record.is_finished(),
        }
    }
}

/// Request body for recording a final score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetMatchResultRequest {
    /// The final score, "home-away".
    pub result: String,
}

/// A candidate match action as submitted by a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    /// One-based possession sequence number.
    pub possession_number: u32,
    /// Which side holds the ball.
    pub team_side: String,
    /// How the attack was organized.
    pub attack_type: String,
    /// How the possession started.
    pub action_origin: String,
    /// How the possession ended.
    pub event_kind: String,
    /// How a shot was finalized, when the event is a shot.
    pub finalization_detail: Option<String>,
    /// Where the shot was launched from, when the event is a shot.
    pub launch_zone: Option<String>,
    /// Qualifier for saves, misses, and turnovers.
    pub event_detail: Option<String>,
}

impl ActionRequest {
    /// Parses the request into a domain candidate for one match.
    ///
    /// The possession-change flag is left unset; the rules engine
    /// derives it when the candidate is applied.
    ///
    /// # Errors
    ///
    /// Returns one `unknown_enum_value` violation per unparseable
    /// field, so a request with several bad values reports all of
    /// them.
    pub fn to_candidate(&self, match_id: i64) -> Result<ActionRecord, Vec<Violation>> {
        let mut violations: Vec<Violation> = Vec::new();

        let team_side = collect(TeamSide::parse(&self.team_side), &mut violations);
        let attack_type = collect(AttackType::parse(&self.attack_type), &mut violations);
        let action_origin = collect(ActionOrigin::parse(&self.action_origin), &mut violations);
        let event_kind = collect(EventKind::parse(&self.event_kind), &mut violations);
        let finalization_detail = collect_opt(
            self.finalization_detail
                .as_deref()
                .map(FinalizationDetail::parse),
            &mut violations,
        );
        let launch_zone = collect_opt(
            self.launch_zone.as_deref().map(LaunchZone::parse),
            &mut violations,
        );
        let event_detail = collect_opt(
            self.event_detail.as_deref().map(EventDetail::parse),
            &mut violations,
        );

        match (team_side, attack_type, action_origin, event_kind) {
            (Some(team_side), Some(attack_type), Some(action_origin), Some(event_kind))
                if violations.is_empty() =>
            {
                Ok(ActionRecord {
                    action_id: None,
                    match_id,
                    possession_number: self.possession_number,
                    team_side,
                    attack_type,
                    action_origin,
                    event_kind,
                    finalization_detail,
                    launch_zone,
                    event_detail,
                    possession_changed: false,
                })
            }
            _ => Err(violations),
        }
    }
}

fn collect<T>(parsed: Result<T, DomainError>, violations: &mut Vec<Violation>) -> Option<T> {
    match parsed {
        Ok(value) => Some(value),
        Err(err) => {
            violations.push(Violation {
                code: "unknown_enum_value",
                message: err.to_string(),
            });
            None
        }
    }
}

fn collect_opt<T>(
    parsed: Option<Result<T, DomainError>>,
    violations: &mut Vec<Violation>,
) -> Option<T> {
    parsed.and_then(|result| collect(result, violations))
}

/// A recorded match action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    /// The action identifier.
    pub action_id: Option<i64>,
    /// The match the action belongs to.
    pub match_id: i64,
    /// One-based possession sequence number.
    pub possession_number: u32,
    /// Which side held the ball.
    pub team_side: String,
    /// How the attack was organized.
    pub attack_type: String,
    /// How the possession started.
    pub action_origin: String,
    /// How the possession ended.
    pub event_kind: String,
    /// How a shot was finalized.
    pub finalization_detail: Option<String>,
    /// Where the shot was launched from.
    pub launch_zone: Option<String>,
    /// Qualifier for saves, misses, and turnovers.
    pub event_detail: Option<String>,
    /// Whether the possession passed to the opponent.
    pub possession_changed: bool,
}

impl ActionResponse {
    /// Builds a response from a recorded action.
    #[must_use]
    pub fn from_record(record: &ActionRecord) -> Self {
        Self {
            action_id: record.action_id,
            match_id: record.match_id,
            possession_number: record.possession_number,
            team_side: record.team_side.as_str().to_string(),
            attack_type: record.attack_type.as_str().to_string(),
            action_origin: record.action_origin.as_str().to_string(),
            event_kind: record.event_kind.as_str().to_string(),
            finalization_detail: record.finalization_detail.map(|d| d.as_str().to_string()),
            launch_zone: record.launch_zone.map(|z| z.as_str().to_string()),
            event_detail: record.event_detail.map(|d| d.as_str().to_string()),
            possession_changed: record.possession_changed,
        }
    }
}

/// A single rule violation in a validation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationBody {
    /// The stable violation code.
    pub code: String,
    /// A human-readable description.
    pub message: String,
}

impl ViolationBody {
    /// Builds a body from a domain violation.
    #[must_use]
    pub fn from_violation(violation: &Violation) -> Self {
        Self {
            code: violation.code.to_string(),
            message: violation.message.clone(),
        }
    }
}

/// What-if validation report for a candidate action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateActionResponse {
    /// Whether the candidate would be accepted as-is.
    pub valid: bool,
    /// Every violation found, in priority order.
    pub violations: Vec<ViolationBody>,
}

/// Suggested setup for the next possession of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextTurnResponse {
    /// The possession number the next action must carry.
    pub next_possession_number: u32,
    /// The side expected to hold the ball, absent for an empty log.
    pub suggested_team_side: Option<String>,
    /// The action origins legal for the next possession.
    pub allowed_origins: Vec<String>,
}

impl NextTurnResponse {
    /// Builds a response from a turn suggestion.
    #[must_use]
    pub fn from_suggestion(suggestion: &TurnSuggestion) -> Self {
        Self {
            next_possession_number: suggestion.next_possession_number,
            suggested_team_side: suggestion.suggested_team_side.map(|s| s.as_str().to_string()),
            allowed_origins: suggestion
                .allowed_origins
                .iter()
                .map(|origin| origin.as_str().to_string())
                .collect(),
        }
    }
}

/// Per-team scoring averages across finished matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAveragesResponse {
    /// The team name.
    pub team_name: String,
    /// How many finished matches the team appears in.
    pub matches_played: u32,
    /// Average goals scored per match.
    pub goals_for_avg: f64,
    /// Average goals conceded per match.
    pub goals_against_avg: f64,
}

/// One entry of the audit timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEventResponse {
    /// The event identifier.
    pub event_id: i64,
    /// When the store received the event, ISO-8601.
    pub recorded_at: String,
    /// Who caused the event.
    pub actor_id: String,
    /// The kind of actor.
    pub actor_type: String,
    /// Why the event happened.
    pub cause: String,
    /// What was done.
    pub action: String,
    /// Optional free-form detail about the action.
    pub details: Option<String>,
    /// The match the event concerns, absent for directory events.
    pub match_id: Option<i64>,
    /// State snapshot before the event.
    pub before: String,
    /// State snapshot after the event.
    pub after: String,
}
