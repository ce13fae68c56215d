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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod session;

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use courtlog_api::{
    ApiError, AuthenticationService, OperatorCapabilities, compute_capabilities,
    csv_export::export_match_actions, handlers,
    request_response::{
        ActionRequest, ActionResponse, AuditEventResponse, ClubResponse, CreateClubRequest,
        CreateMatchRequest, CreateTeamRequest, LoginRequest, LoginResponse, MatchResponse,
        NextTurnResponse, OperatorSummary, RegisterOperatorRequest, SetMatchResultRequest,
        TeamAveragesResponse, TeamResponse, ValidateActionResponse, ViolationBody,
    },
};
use courtlog_store::MemoryStore;
use session::SessionOperator;

/// Courtlog Server - HTTP server for the Courtlog match recorder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Login name of the seeded admin account
    #[arg(long, default_value = "admin")]
    admin_login: String,

    /// Password of the seeded admin account. Without it no account is
    /// seeded and every request will fail authentication.
    #[arg(long)]
    admin_password: Option<String>,
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The store, wrapped in a Mutex for safe concurrent access.
    pub store: Arc<Mutex<MemoryStore>>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Stable error code.
    error: String,
    /// Human-readable error message.
    message: String,
    /// Rule violations, present only for rejected candidate actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    violations: Option<Vec<ViolationBody>>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The response body.
    body: ErrorResponse,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let (status, code) = match &err {
            ApiError::AuthenticationFailed { .. } => {
                (StatusCode::UNAUTHORIZED, "authentication_failed")
            }
            ApiError::Unauthorized { .. } => (StatusCode::FORBIDDEN, "unauthorized"),
            ApiError::DomainRuleViolation { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "domain_rule_violation")
            }
            ApiError::RuleViolations(_) => (StatusCode::UNPROCESSABLE_ENTITY, "rule_violations"),
            ApiError::PasswordPolicyViolation { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "password_policy_violation")
            }
            ApiError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "invalid_input"),
            ApiError::ResourceNotFound { .. } => (StatusCode::NOT_FOUND, "resource_not_found"),
            ApiError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };

        let violations: Option<Vec<ViolationBody>> = match &err {
            ApiError::RuleViolations(violations) => Some(
                violations
                    .iter()
                    .map(ViolationBody::from_violation)
                    .collect(),
            ),
            _ => None,
        };

        Self {
            status,
            body: ErrorResponse {
                error: code.to_string(),
                message: err.to_string(),
                violations,
            },
        }
    }
}

/// Handler for POST /login.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let (token, _, operator) =
        AuthenticationService::login(&mut store, &req.login_name, &req.password)
            .map_err(ApiError::from)?;
    drop(store);

    info!(login_name = %req.login_name, "Operator logged in");
    Ok(Json(LoginResponse {
        session_token: token,
        operator: OperatorSummary::from_operator(&operator),
    }))
}

/// Handler for POST /logout.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, session::SessionError> {
    let token: String = session::bearer_token(&headers)?;
    let mut store = app_state.store.lock().await;
    AuthenticationService::logout(&mut store, &token);
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /capabilities.
async fn handle_capabilities(
    SessionOperator(actor, _): SessionOperator,
) -> Json<OperatorCapabilities> {
    Json(compute_capabilities(&actor))
}

/// Handler for POST /operators.
async fn handle_register_operator(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Json(req): Json<RegisterOperatorRequest>,
) -> Result<Json<OperatorSummary>, HttpError> {
    let mut store = app_state.store.lock().await;
    let summary = handlers::register_operator(&mut store, &actor, &req)?;
    Ok(Json(summary))
}

/// Handler for GET /operators.
async fn handle_list_operators(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
) -> Result<Json<Vec<OperatorSummary>>, HttpError> {
    let store = app_state.store.lock().await;
    let operators = handlers::list_operators(&store, &actor)?;
    Ok(Json(operators))
}

/// Handler for POST /clubs.
async fn handle_create_club(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, operator): SessionOperator,
    Json(req): Json<CreateClubRequest>,
) -> Result<Json<ClubResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let club = handlers::create_club(&mut store, &actor, &operator, &req)?;
    Ok(Json(club))
}

/// Handler for GET /clubs.
async fn handle_list_clubs(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
) -> Json<Vec<ClubResponse>> {
    let store = app_state.store.lock().await;
    Json(handlers::list_clubs(&store))
}

/// Handler for POST /teams.
async fn handle_create_team(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, operator): SessionOperator,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Json<TeamResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let team = handlers::create_team(&mut store, &actor, &operator, &req)?;
    Ok(Json(team))
}

/// Handler for GET /teams.
async fn handle_list_teams(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
) -> Json<Vec<TeamResponse>> {
    let store = app_state.store.lock().await;
    Json(handlers::list_teams(&store))
}

/// Handler for POST /matches.
async fn handle_create_match(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, operator): SessionOperator,
    Json(req): Json<CreateMatchRequest>,
) -> Result<Json<MatchResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let record = handlers::create_match(&mut store, &actor, &operator, &req)?;
    Ok(Json(record))
}

/// Handler for GET /matches.
async fn handle_list_matches(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
) -> Json<Vec<MatchResponse>> {
    let store = app_state.store.lock().await;
    Json(handlers::list_matches(&store))
}

/// Handler for POST `/matches/{match_id}/result`.
async fn handle_set_match_result(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, operator): SessionOperator,
    Path(match_id): Path<i64>,
    Json(req): Json<SetMatchResultRequest>,
) -> Result<Json<MatchResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let record = handlers::set_match_result(&mut store, &actor, &operator, match_id, &req)?;
    Ok(Json(record))
}

/// Handler for GET `/matches/{match_id}/actions`.
async fn handle_list_actions(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
    Path(match_id): Path<i64>,
) -> Result<Json<Vec<ActionResponse>>, HttpError> {
    let store = app_state.store.lock().await;
    let actions = handlers::list_actions(&store, match_id)?;
    Ok(Json(actions))
}

/// Handler for POST `/matches/{match_id}/actions`.
async fn handle_record_action(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, operator): SessionOperator,
    Path(match_id): Path<i64>,
    Json(req): Json<ActionRequest>,
) -> Result<Json<ActionResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let recorded = handlers::record_action(&mut store, &actor, &operator, match_id, &req)?;
    Ok(Json(recorded))
}

/// Handler for POST `/matches/{match_id}/actions/validate`.
///
/// What-if validation; nothing is persisted.
async fn handle_validate_action(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
    Path(match_id): Path<i64>,
    Json(req): Json<ActionRequest>,
) -> Result<Json<ValidateActionResponse>, HttpError> {
    let store = app_state.store.lock().await;
    let report = handlers::validate_action(&store, match_id, &req)?;
    Ok(Json(report))
}

/// Handler for GET `/matches/{match_id}/next_turn`.
async fn handle_next_turn(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
    Path(match_id): Path<i64>,
) -> Result<Json<NextTurnResponse>, HttpError> {
    let store = app_state.store.lock().await;
    let suggestion = handlers::next_turn(&store, match_id)?;
    Ok(Json(suggestion))
}

/// Handler for DELETE `/matches/{match_id}/actions/last`.
async fn handle_delete_last_action(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, operator): SessionOperator,
    Path(match_id): Path<i64>,
) -> Result<Json<ActionResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let deleted = handlers::delete_last_action(&mut store, &actor, &operator, match_id)?;
    Ok(Json(deleted))
}

/// Handler for GET `/matches/{match_id}/actions/export`.
///
/// Returns the match's action log as CSV.
async fn handle_export_actions(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
    Path(match_id): Path<i64>,
) -> Result<Response, HttpError> {
    let store = app_state.store.lock().await;
    let log = store.match_log(match_id).map_err(ApiError::from)?;
    let csv: String = export_match_actions(log)?;
    drop(store);

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        csv,
    )
        .into_response())
}

/// Handler for GET /stats/teams.
async fn handle_team_stats(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
) -> Json<Vec<TeamAveragesResponse>> {
    let store = app_state.store.lock().await;
    Json(handlers::team_stats(&store))
}

/// Handler for GET /audit/timeline.
async fn handle_audit_timeline(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
) -> Result<Json<Vec<AuditEventResponse>>, HttpError> {
    let store = app_state.store.lock().await;
    let timeline = handlers::audit_timeline(&store, &actor)?;
    Ok(Json(timeline))
}

/// Handler for GET `/audit/matches/{match_id}`.
async fn handle_match_audit_timeline(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Path(match_id): Path<i64>,
) -> Result<Json<Vec<AuditEventResponse>>, HttpError> {
    let store = app_state.store.lock().await;
    let timeline = handlers::match_audit_timeline(&store, &actor, match_id)?;
    Ok(Json(timeline))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(handle_login))
        .route("/logout", post(handle_logout))
        .route("/capabilities", get(handle_capabilities))
        .route("/operators", post(handle_register_operator))
        .route("/operators", get(handle_list_operators))
        .route("/clubs", post(handle_create_club))
        .route("/clubs", get(handle_list_clubs))
        .route("/teams", post(handle_create_team))
        .route("/teams", get(handle_list_teams))
        .route("/matches", post(handle_create_match))
        .route("/matches", get(handle_list_matches))
        .route("/matches/{match_id}/result", post(handle_set_match_result))
        .route("/matches/{match_id}/actions", get(handle_list_actions))
        .route("/matches/{match_id}/actions", post(handle_record_action))
        .route(
            "/matches/{match_id}/actions/validate",
            post(handle_validate_action),
        )
        .route(
            "/matches/{match_id}/actions/last",
            delete(handle_delete_last_action),
        )
        .route(
            "/matches/{match_id}/actions/export",
            get(handle_export_actions),
        )
        .route("/matches/{match_id}/next_turn", get(handle_next_turn))
        .route("/stats/teams", get(handle_team_stats))
        .route("/audit/timeline", get(handle_audit_timeline))
        .route("/audit/matches/{match_id}", get(handle_match_audit_timeline))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Courtlog Server");

    let mut store: MemoryStore = MemoryStore::new();
    if let Some(password) = &args.admin_password {
        store.create_operator(&args.admin_login, "Administrator", "Admin", password)?;
        info!(login_name = %args.admin_login, "Seeded admin account");
    } else {
        info!("No admin password given; starting without any accounts");
    }

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
