//! # REST API for the Dashboard

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::{error, info};

use super::mappers::dashboard_mapper::DashboardMapper;
use super::ApiError;
use crate::backend::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/children/:id/dashboard", get(get_dashboard))
}

/// Stats, milestones and timeline for one child
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/children/{}/dashboard", child_id);

    match state.dashboard_service.get_dashboard_data(&child_id).await {
        Ok(dashboard) => (StatusCode::OK, Json(DashboardMapper::to_dto(dashboard))).into_response(),
        Err(e) => {
            error!("Failed to build dashboard for child {}: {}", child_id, e);
            ApiError::from(e).into_response()
        }
    }
}
