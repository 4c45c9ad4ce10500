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

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use liga_escolar_api::{
    ActivateSeasonResponse, ApiError, CreateLeagueRequest, CreateLeagueResponse,
    CreateNonSchoolDayRequest, CreateNonSchoolDayResponse, CreatePlayerRequest,
    CreatePlayerResponse, CreateSeasonRequest, CreateSeasonResponse, CreateTeamRequest,
    CreateTeamResponse, DeleteAllLeaguesResponse, DeleteLeagueMatchesResponse,
    DeleteMatchResponse, DeleteNonSchoolDayResponse, DeletePlayerResponse, DeleteSeasonResponse,
    DeleteTeamResponse, GenerateScheduleRequest, GenerateScheduleResponse, GetSeasonResponse,
    HealthResponse, ListLeaguesResponse, ListMatchesResponse, ListNonSchoolDaysResponse,
    ListSeasonsResponse, RecordResultRequest, RecordResultResponse, ResetResponse,
    StandingsResponse, UpdateNonSchoolDayRequest, UpdateNonSchoolDayResponse, UpdatePlayerRequest,
    UpdatePlayerResponse, UpdateTeamRequest, UpdateTeamResponse, activate_season, create_league,
    create_non_school_day, create_player, create_season, create_team, delete_all_leagues,
    delete_league_matches, delete_match, delete_non_school_day, delete_player, delete_season,
    delete_team, generate_schedule, get_season, health, list_leagues, list_matches,
    list_non_school_days, list_seasons, record_result, reset, standings, update_non_school_day,
    update_player, update_team,
};
use liga_escolar_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Liga Escolar Server - HTTP server for the school sports league manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Enable the destructive DELETE `/api/reset` endpoint
    #[arg(long)]
    allow_reset: bool,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for league data.
    persistence: Arc<Mutex<Persistence>>,
    /// Whether the destructive reset endpoint is enabled.
    allow_reset: bool,
}

/// Query parameters for listing matches.
#[derive(Debug, Deserialize)]
struct MatchesQuery {
    /// The league whose fixtures to list.
    league_id: i64,
}

/// Query parameters for listing non-school days.
#[derive(Debug, Deserialize)]
struct NonSchoolDaysQuery {
    /// The owning season.
    season_id: i64,
}

/// Query parameters for the standings endpoint.
#[derive(Debug, Deserialize)]
struct StandingsQuery {
    /// The sport, e.g. "FOOTBALL" or "BASKETBALL".
    sport: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for GET `/api/health` endpoint.
///
/// Returns entity counts and a probe timestamp.
async fn handle_health(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<HealthResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: HealthResponse = health(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/api/seasons` endpoint.
///
/// Creates a season and seeds its six leagues and vacation blackouts.
async fn handle_create_season(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateSeasonRequest>,
) -> Result<Json<CreateSeasonResponse>, HttpError> {
    info!(name = %req.name, "Handling create_season request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateSeasonResponse = create_season(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/seasons` endpoint.
///
/// Lists all seasons with their leagues and non-school days.
async fn handle_list_seasons(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListSeasonsResponse>, HttpError> {
    info!("Handling list_seasons request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListSeasonsResponse = list_seasons(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/seasons/{season_id}` endpoint.
///
/// Returns a single season with its nested details.
async fn handle_get_season(
    AxumState(app_state): AxumState<AppState>,
    Path(season_id): Path<i64>,
) -> Result<Json<GetSeasonResponse>, HttpError> {
    info!(season_id = season_id, "Handling get_season request");

    let mut persistence = app_state.persistence.lock().await;
    let response: GetSeasonResponse = get_season(&mut persistence, season_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/api/seasons/{season_id}/activate` endpoint.
///
/// Makes the given season the active one.
async fn handle_activate_season(
    AxumState(app_state): AxumState<AppState>,
    Path(season_id): Path<i64>,
) -> Result<Json<ActivateSeasonResponse>, HttpError> {
    info!(season_id = season_id, "Handling activate_season request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ActivateSeasonResponse = activate_season(&mut persistence, season_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/api/seasons/{season_id}` endpoint.
///
/// Deletes a season together with everything it owns.
async fn handle_delete_season(
    AxumState(app_state): AxumState<AppState>,
    Path(season_id): Path<i64>,
) -> Result<Json<DeleteSeasonResponse>, HttpError> {
    info!(season_id = season_id, "Handling delete_season request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteSeasonResponse = delete_season(&mut persistence, season_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/leagues` endpoint.
///
/// Lists all leagues across all seasons.
async fn handle_list_leagues(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListLeaguesResponse>, HttpError> {
    info!("Handling list_leagues request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListLeaguesResponse = list_leagues(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/api/leagues` endpoint.
///
/// Creates a league with auto-named placeholder teams.
async fn handle_create_league(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateLeagueRequest>,
) -> Result<Json<CreateLeagueResponse>, HttpError> {
    info!(
        season_id = req.season_id,
        sport = %req.sport,
        category = %req.category,
        team_count = req.team_count,
        "Handling create_league request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateLeagueResponse = create_league(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/api/leagues` endpoint.
///
/// Deletes every league along with its teams and matches.
async fn handle_delete_all_leagues(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<DeleteAllLeaguesResponse>, HttpError> {
    info!("Handling delete_all_leagues request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteAllLeaguesResponse = delete_all_leagues(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/api/teams` endpoint.
///
/// Registers a team in a league.
async fn handle_create_team(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Json<CreateTeamResponse>, HttpError> {
    info!(
        league_id = req.league_id,
        name = %req.name,
        "Handling create_team request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateTeamResponse = create_team(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PUT `/api/teams/{team_id}` endpoint.
///
/// Renames a team.
async fn handle_update_team(
    AxumState(app_state): AxumState<AppState>,
    Path(team_id): Path<i64>,
    Json(req): Json<UpdateTeamRequest>,
) -> Result<Json<UpdateTeamResponse>, HttpError> {
    info!(team_id = team_id, name = %req.name, "Handling update_team request");

    let mut persistence = app_state.persistence.lock().await;
    let response: UpdateTeamResponse = update_team(&mut persistence, team_id, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/api/teams/{team_id}` endpoint.
///
/// Removes a team that has no scheduled matches.
async fn handle_delete_team(
    AxumState(app_state): AxumState<AppState>,
    Path(team_id): Path<i64>,
) -> Result<Json<DeleteTeamResponse>, HttpError> {
    info!(team_id = team_id, "Handling delete_team request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteTeamResponse = delete_team(&mut persistence, team_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/api/players` endpoint.
///
/// Registers a player in a team.
async fn handle_create_player(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreatePlayerRequest>,
) -> Result<Json<CreatePlayerResponse>, HttpError> {
    info!(
        team_id = req.team_id,
        name = %req.name,
        "Handling create_player request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreatePlayerResponse = create_player(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PUT `/api/players/{player_id}` endpoint.
///
/// Renames a player.
async fn handle_update_player(
    AxumState(app_state): AxumState<AppState>,
    Path(player_id): Path<i64>,
    Json(req): Json<UpdatePlayerRequest>,
) -> Result<Json<UpdatePlayerResponse>, HttpError> {
    info!(player_id = player_id, name = %req.name, "Handling update_player request");

    let mut persistence = app_state.persistence.lock().await;
    let response: UpdatePlayerResponse = update_player(&mut persistence, player_id, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/api/players/{player_id}` endpoint.
///
/// Removes a player that has no recorded goals.
async fn handle_delete_player(
    AxumState(app_state): AxumState<AppState>,
    Path(player_id): Path<i64>,
) -> Result<Json<DeletePlayerResponse>, HttpError> {
    info!(player_id = player_id, "Handling delete_player request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeletePlayerResponse = delete_player(&mut persistence, player_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/non-school-days` endpoint.
///
/// Lists a season's blackout days in date order.
async fn handle_list_non_school_days(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<NonSchoolDaysQuery>,
) -> Result<Json<ListNonSchoolDaysResponse>, HttpError> {
    info!(
        season_id = query.season_id,
        "Handling list_non_school_days request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ListNonSchoolDaysResponse =
        list_non_school_days(&mut persistence, query.season_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/api/non-school-days` endpoint.
///
/// Declares a day on which no matches may be scheduled.
async fn handle_create_non_school_day(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateNonSchoolDayRequest>,
) -> Result<Json<CreateNonSchoolDayResponse>, HttpError> {
    info!(
        season_id = req.season_id,
        day = %req.day,
        "Handling create_non_school_day request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateNonSchoolDayResponse = create_non_school_day(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PUT `/api/non-school-days/{non_school_day_id}` endpoint.
///
/// Updates a blackout day's date or description.
async fn handle_update_non_school_day(
    AxumState(app_state): AxumState<AppState>,
    Path(non_school_day_id): Path<i64>,
    Json(req): Json<UpdateNonSchoolDayRequest>,
) -> Result<Json<UpdateNonSchoolDayResponse>, HttpError> {
    info!(
        non_school_day_id = non_school_day_id,
        day = %req.day,
        "Handling update_non_school_day request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: UpdateNonSchoolDayResponse =
        update_non_school_day(&mut persistence, non_school_day_id, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/api/non-school-days/{non_school_day_id}` endpoint.
///
/// Removes a blackout day.
async fn handle_delete_non_school_day(
    AxumState(app_state): AxumState<AppState>,
    Path(non_school_day_id): Path<i64>,
) -> Result<Json<DeleteNonSchoolDayResponse>, HttpError> {
    info!(
        non_school_day_id = non_school_day_id,
        "Handling delete_non_school_day request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteNonSchoolDayResponse =
        delete_non_school_day(&mut persistence, non_school_day_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/api/matches` endpoint.
///
/// Generates the full double round-robin schedule for a league.
async fn handle_generate_schedule(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<GenerateScheduleRequest>,
) -> Result<Json<GenerateScheduleResponse>, HttpError> {
    info!(
        league_id = req.league_id,
        start_date = %req.start_date,
        "Handling generate_schedule request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: GenerateScheduleResponse = generate_schedule(&mut persistence, &req)?;
    drop(persistence);

    info!(
        league_id = req.league_id,
        total_matches = response.summary.total_matches,
        total_cycles = response.summary.total_cycles,
        "Successfully generated schedule"
    );

    Ok(Json(response))
}

/// Handler for GET `/api/matches` endpoint.
///
/// Lists a league's matches in kickoff order.
async fn handle_list_matches(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<MatchesQuery>,
) -> Result<Json<ListMatchesResponse>, HttpError> {
    info!(league_id = query.league_id, "Handling list_matches request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListMatchesResponse = list_matches(&mut persistence, query.league_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PUT `/api/matches/{match_id}` endpoint.
///
/// Records or replaces a match result with its goal attributions.
async fn handle_record_result(
    AxumState(app_state): AxumState<AppState>,
    Path(match_id): Path<i64>,
    Json(req): Json<RecordResultRequest>,
) -> Result<Json<RecordResultResponse>, HttpError> {
    info!(
        match_id = match_id,
        home_score = req.home_score,
        away_score = req.away_score,
        "Handling record_result request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: RecordResultResponse = record_result(&mut persistence, match_id, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/api/matches/{match_id}` endpoint.
///
/// Removes a single match.
async fn handle_delete_match(
    AxumState(app_state): AxumState<AppState>,
    Path(match_id): Path<i64>,
) -> Result<Json<DeleteMatchResponse>, HttpError> {
    info!(match_id = match_id, "Handling delete_match request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteMatchResponse = delete_match(&mut persistence, match_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/api/matches/league/{league_id}` endpoint.
///
/// Clears a league's fixtures so the schedule can be regenerated.
async fn handle_delete_league_matches(
    AxumState(app_state): AxumState<AppState>,
    Path(league_id): Path<i64>,
) -> Result<Json<DeleteLeagueMatchesResponse>, HttpError> {
    info!(
        league_id = league_id,
        "Handling delete_league_matches request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteLeagueMatchesResponse =
        delete_league_matches(&mut persistence, league_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/standings` endpoint.
///
/// Returns tables and top scorers for every category of a sport in the
/// active season.
async fn handle_standings(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<StandingsQuery>,
) -> Result<Json<StandingsResponse>, HttpError> {
    info!(sport = %query.sport, "Handling standings request");

    let mut persistence = app_state.persistence.lock().await;
    let response: StandingsResponse = standings(&mut persistence, &query.sport)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/api/reset` endpoint.
///
/// Wipes all stored data. Refused unless the server was started with
/// `--allow-reset`.
async fn handle_reset(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ResetResponse>, HttpError> {
    info!("Handling reset request");

    if !app_state.allow_reset {
        return Err(HttpError {
            status: StatusCode::FORBIDDEN,
            message: String::from(
                "Reset is disabled. Start the server with --allow-reset to enable it",
            ),
        });
    }

    let mut persistence = app_state.persistence.lock().await;
    let response: ResetResponse = reset(&mut persistence)?;
    drop(persistence);

    info!(
        seasons_deleted = response.seasons_deleted,
        matches_deleted = response.matches_deleted,
        "Successfully reset all data"
    );

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handle_health))
        .route("/api/seasons", post(handle_create_season))
        .route("/api/seasons", get(handle_list_seasons))
        .route("/api/seasons/{season_id}", get(handle_get_season))
        .route("/api/seasons/{season_id}", delete(handle_delete_season))
        .route(
            "/api/seasons/{season_id}/activate",
            post(handle_activate_season),
        )
        .route("/api/leagues", post(handle_create_league))
        .route("/api/leagues", get(handle_list_leagues))
        .route("/api/leagues", delete(handle_delete_all_leagues))
        .route("/api/teams", post(handle_create_team))
        .route("/api/teams/{team_id}", put(handle_update_team))
        .route("/api/teams/{team_id}", delete(handle_delete_team))
        .route("/api/players", post(handle_create_player))
        .route("/api/players/{player_id}", put(handle_update_player))
        .route("/api/players/{player_id}", delete(handle_delete_player))
        .route("/api/non-school-days", post(handle_create_non_school_day))
        .route("/api/non-school-days", get(handle_list_non_school_days))
        .route(
            "/api/non-school-days/{non_school_day_id}",
            put(handle_update_non_school_day),
        )
        .route(
            "/api/non-school-days/{non_school_day_id}",
            delete(handle_delete_non_school_day),
        )
        .route("/api/matches", post(handle_generate_schedule))
        .route("/api/matches", get(handle_list_matches))
        .route("/api/matches/{match_id}", put(handle_record_result))
        .route("/api/matches/{match_id}", delete(handle_delete_match))
        .route(
            "/api/matches/league/{league_id}",
            delete(handle_delete_league_matches),
        )
        .route("/api/standings", get(handle_standings))
        .route("/api/reset", delete(handle_reset))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Liga Escolar Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if args.allow_reset {
        info!("Destructive reset endpoint is enabled");
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        allow_reset: args.allow_reset,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
