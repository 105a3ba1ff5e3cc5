//! # REST API for Postcards

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::{error, info};

use super::mappers::postcard_mapper::PostcardMapper;
use super::{error_body, ApiError};
use crate::backend::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/children/:id/postcards", get(list_postcards_by_child))
        .route("/postcard-contents/:id", get(get_postcard_content))
}

/// All postcards of a child
pub async fn list_postcards_by_child(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/children/{}/postcards", child_id);

    match state.postcard_service.fetch_postcards_by_child(&child_id).await {
        Ok(postcards) => (StatusCode::OK, Json(PostcardMapper::to_list_dto(postcards))).into_response(),
        Err(e) => {
            error!("Failed to list postcards of child {}: {}", child_id, e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn get_postcard_content(
    State(state): State<AppState>,
    Path(content_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/postcard-contents/{}", content_id);

    match state.postcard_service.fetch_postcard_content(&content_id).await {
        Ok(Some(content)) => (StatusCode::OK, Json(PostcardMapper::to_content_dto(content))).into_response(),
        Ok(None) => error_body(StatusCode::NOT_FOUND, format!("postcard content not found: {}", content_id)),
        Err(e) => {
            error!("Failed to get postcard content {}: {}", content_id, e);
            ApiError::from(e).into_response()
        }
    }
}
