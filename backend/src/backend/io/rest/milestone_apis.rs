//! # REST API for Milestones

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::{error, info};

use super::mappers::milestone_mapper::MilestoneMapper;
use super::ApiError;
use crate::backend::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/milestones", get(get_milestone_board))
}

/// Milestone catalog in display order with badges, captions and the summary
pub async fn get_milestone_board(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/milestones");

    match state.milestone_service.milestone_board().await {
        Ok(board) => (StatusCode::OK, Json(MilestoneMapper::to_board_dto(board))).into_response(),
        Err(e) => {
            error!("Failed to load milestones: {}", e);
            ApiError::from(e).into_response()
        }
    }
}
