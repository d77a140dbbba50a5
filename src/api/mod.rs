use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{Config, ModelConfig};
use crate::error::AnalyticsError;
use crate::models::{ApiResponse, HeadToHeadStats, MatchPrediction, MatchRecord, TeamStats};
use crate::services::PredictionEngine;

#[derive(Clone)]
pub struct AppState {
    pub model: ModelConfig,
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = create_router(config.model);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("footstats API server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

pub fn create_router(model: ModelConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/analyze-team", post(analyze_team_handler))
        .route("/api/predict-match", post(predict_match_handler))
        .route("/api/head-to-head", post(head_to_head_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(AppState { model })
}

// Health check endpoint
async fn health_check() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("footstats API is running"))
}

// POST /api/analyze-team - Aggregate a team's history into summary stats
#[derive(Deserialize)]
struct AnalyzeTeamRequest {
    team_name: String,
    matches: Vec<MatchRecord>,
}

async fn analyze_team_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTeamRequest>,
) -> (StatusCode, Json<ApiResponse<TeamStats>>) {
    let engine = PredictionEngine::new(&state.model);
    respond(engine.analyze_team(&request.team_name, &request.matches))
}

// POST /api/predict-match - Predict an upcoming fixture from two histories
#[derive(Deserialize)]
struct PredictMatchRequest {
    home_team: String,
    away_team: String,
    home_matches: Vec<MatchRecord>,
    away_matches: Vec<MatchRecord>,
}

async fn predict_match_handler(
    State(state): State<AppState>,
    Json(request): Json<PredictMatchRequest>,
) -> (StatusCode, Json<ApiResponse<MatchPrediction>>) {
    let engine = PredictionEngine::new(&state.model);
    respond(engine.predict_match(
        &request.home_team,
        &request.away_team,
        &request.home_matches,
        &request.away_matches,
    ))
}

// POST /api/head-to-head - Summarize direct meetings between two teams
#[derive(Deserialize)]
struct HeadToHeadRequest {
    team1: String,
    team2: String,
    matches: Vec<MatchRecord>,
}

async fn head_to_head_handler(
    State(state): State<AppState>,
    Json(request): Json<HeadToHeadRequest>,
) -> (StatusCode, Json<ApiResponse<HeadToHeadStats>>) {
    let engine = PredictionEngine::new(&state.model);
    respond(engine.head_to_head(&request.team1, &request.team2, &request.matches))
}

fn respond<T>(result: Result<T, AnalyticsError>) -> (StatusCode, Json<ApiResponse<T>>) {
    match result {
        Ok(data) => (StatusCode::OK, Json(ApiResponse::success(data))),
        Err(err) => {
            let status = error_status(&err);
            if status.is_server_error() {
                tracing::error!("request failed: {}", err);
            } else {
                tracing::warn!("request rejected: {}", err);
            }
            (status, Json(ApiResponse::error(err.to_string())))
        }
    }
}

fn error_status(err: &AnalyticsError) -> StatusCode {
    match err {
        AnalyticsError::Validation { .. } => StatusCode::BAD_REQUEST,
        AnalyticsError::InsufficientData => StatusCode::UNPROCESSABLE_ENTITY,
        AnalyticsError::InvalidRate { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
