//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use dugout_domain::{
    Base, DomainError, Game, GameId, Half, PitchLocation, PitchResolution, PlayerName, TeamName,
    Winner,
};

use crate::app::App;
use crate::use_cases::game::{LineupRequest, PitchReport, RunnersAdvanced};
use crate::use_cases::GameError;

const DEFAULT_MAX_INNINGS: u32 = 9;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/games", post(create_game))
        .route("/api/games/{id}", get(get_game).delete(delete_game))
        .route("/api/games/{id}/lineup", post(submit_lineup))
        .route("/api/games/{id}/batter", post(batter_action))
        .route("/api/games/{id}/pitcher", post(pitcher_action))
        .route("/api/games/{id}/next-inning", post(next_inning))
        .route("/api/games/{id}/end", post(end_game))
        .route("/api/games/{id}/advance-runners", post(advance_runners))
        .route("/api/games/{id}/stats", get(game_stats))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Request / response bodies
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub home_team: String,
    pub away_team: String,
    #[serde(default = "default_max_innings")]
    pub max_innings: u32,
}

fn default_max_innings() -> u32 {
    DEFAULT_MAX_INNINGS
}

#[derive(Debug, Deserialize)]
pub struct BatterActionRequest {
    pub swung: bool,
    pub timing: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct PitcherActionRequest {
    pub intent: PitchLocation,
}

#[derive(Debug, Deserialize)]
pub struct AdvanceRunnersRequest {
    pub bases: u8,
}

#[derive(Debug, Serialize)]
pub struct BasesView {
    pub first: Option<PlayerName>,
    pub second: Option<PlayerName>,
    pub third: Option<PlayerName>,
}

/// Game state as sent to clients.
#[derive(Debug, Serialize)]
pub struct GameView {
    pub id: GameId,
    pub home_team: TeamName,
    pub away_team: TeamName,
    pub max_innings: u32,
    pub inning: u32,
    pub half: Half,
    pub outs: u8,
    pub strikes: u8,
    pub balls: u8,
    pub home_score: u32,
    pub away_score: u32,
    pub bases: BasesView,
    pub current_batter: Option<PlayerName>,
    pub current_pitcher: Option<PlayerName>,
    pub current_batter_index: usize,
    pub is_game_over: bool,
    pub winner: Option<Winner>,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        let runner = |base| game.bases().runner(base).cloned();
        let count = game.count();
        Self {
            id: game.id(),
            home_team: game.home_team().clone(),
            away_team: game.away_team().clone(),
            max_innings: game.max_innings(),
            inning: game.inning(),
            half: game.half(),
            outs: count.outs,
            strikes: count.strikes,
            balls: count.balls,
            home_score: game.home_score(),
            away_score: game.away_score(),
            bases: BasesView {
                first: runner(Base::First),
                second: runner(Base::Second),
                third: runner(Base::Third),
            },
            current_batter: game.current_batter().map(|b| b.name.clone()),
            current_pitcher: game.current_pitcher().map(|p| p.name.clone()),
            current_batter_index: game.current_batter_index(),
            is_game_over: game.is_game_over(),
            winner: game.winner().cloned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PitchResponse {
    pub resolution: PitchResolution,
    pub game: GameView,
}

impl From<PitchReport> for PitchResponse {
    fn from(report: PitchReport) -> Self {
        Self {
            resolution: report.resolution,
            game: GameView::from(&report.game),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdvanceRunnersResponse {
    pub runs_scored: u32,
    pub game: GameView,
}

impl From<RunnersAdvanced> for AdvanceRunnersResponse {
    fn from(moved: RunnersAdvanced) -> Self {
        Self {
            runs_scored: moved.runs_scored,
            game: GameView::from(&moved.game),
        }
    }
}

// =============================================================================
// Games
// =============================================================================

async fn create_game(
    State(app): State<Arc<App>>,
    body: Result<Json<CreateGameRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<GameView>), ApiError> {
    let Json(req) = body?;
    let game = app
        .use_cases
        .game
        .create
        .execute(&req.home_team, &req.away_team, req.max_innings)
        .await?;
    Ok((StatusCode::CREATED, Json(GameView::from(&game))))
}

async fn get_game(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GameView>, ApiError> {
    let game = app.use_cases.game.get.execute(GameId::from_uuid(id)).await?;
    Ok(Json(GameView::from(&game)))
}

async fn delete_game(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .game
        .delete
        .execute(GameId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn submit_lineup(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    body: Result<Json<LineupRequest>, JsonRejection>,
) -> Result<Json<GameView>, ApiError> {
    let Json(req) = body?;
    let game = app
        .use_cases
        .game
        .submit_lineup
        .execute(GameId::from_uuid(id), req)
        .await?;
    Ok(Json(GameView::from(&game)))
}

async fn game_stats(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<String, ApiError> {
    let stats = app
        .use_cases
        .game
        .stats
        .execute(GameId::from_uuid(id))
        .await?;
    Ok(stats)
}

// =============================================================================
// Play
// =============================================================================

async fn batter_action(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    body: Result<Json<BatterActionRequest>, JsonRejection>,
) -> Result<Json<PitchResponse>, ApiError> {
    let Json(req) = body?;
    let report = app
        .use_cases
        .game
        .pitch
        .execute(GameId::from_uuid(id), req.swung, req.timing)
        .await?;
    Ok(Json(report.into()))
}

async fn pitcher_action(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    body: Result<Json<PitcherActionRequest>, JsonRejection>,
) -> Result<Json<PitchResponse>, ApiError> {
    let Json(req) = body?;
    let report = app
        .use_cases
        .game
        .throw_pitch
        .execute(GameId::from_uuid(id), req.intent)
        .await?;
    Ok(Json(report.into()))
}

async fn advance_runners(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    body: Result<Json<AdvanceRunnersRequest>, JsonRejection>,
) -> Result<Json<AdvanceRunnersResponse>, ApiError> {
    let Json(req) = body?;
    let moved = app
        .use_cases
        .game
        .advance_runners
        .execute(GameId::from_uuid(id), req.bases)
        .await?;
    Ok(Json(moved.into()))
}

// =============================================================================
// Lifecycle
// =============================================================================

async fn next_inning(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GameView>, ApiError> {
    let game = app
        .use_cases
        .game
        .advance_half_inning
        .execute(GameId::from_uuid(id))
        .await?;
    Ok(Json(GameView::from(&game)))
}

async fn end_game(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GameView>, ApiError> {
    let game = app
        .use_cases
        .game
        .end_game
        .execute(GameId::from_uuid(id))
        .await?;
    Ok(Json(GameView::from(&game)))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg).into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<GameError> for ApiError {
    fn from(e: GameError) -> Self {
        let msg = e.to_string();
        match e {
            GameError::GameNotFound(_) => ApiError::NotFound(msg),
            GameError::Domain(DomainError::Validation(_)) => ApiError::BadRequest(msg),
            GameError::Domain(DomainError::InvalidState(_)) => ApiError::Conflict(msg),
            GameError::Repo(_) => ApiError::Internal(msg),
        }
    }
}
