//! # REST API for Children
//!
//! Endpoints for looking up a child, its profile header and a parent's children.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::{error, info};

use super::mappers::child_mapper::ChildMapper;
use super::ApiError;
use crate::backend::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/children/:id", get(get_child))
        .route("/children/:id/profile", get(get_child_profile))
        .route("/parents/:parent_id/children", get(list_children_by_parent))
}

/// Get a child by ID
pub async fn get_child(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/children/{}", child_id);

    match state.child_service.get_child(&child_id).await {
        Ok(child) => (StatusCode::OK, Json(ChildMapper::to_dto(child))).into_response(),
        Err(e) => {
            error!("Failed to get child {}: {}", child_id, e);
            ApiError::from(e).into_response()
        }
    }
}

/// Child with age label and theme emoji
pub async fn get_child_profile(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/children/{}/profile", child_id);

    match state.child_service.child_profile(&child_id).await {
        Ok(profile) => (StatusCode::OK, Json(ChildMapper::to_profile_dto(profile))).into_response(),
        Err(e) => {
            error!("Failed to get profile of child {}: {}", child_id, e);
            ApiError::from(e).into_response()
        }
    }
}

/// List the children of a parent. Unknown parents have no children.
pub async fn list_children_by_parent(
    State(state): State<AppState>,
    Path(parent_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/parents/{}/children", parent_id);

    match state.child_service.fetch_children_by_parent(&parent_id).await {
        Ok(children) => (StatusCode::OK, Json(ChildMapper::to_child_list_dto(children))).into_response(),
        Err(e) => {
            error!("Failed to list children of parent {}: {}", parent_id, e);
            ApiError::from(e).into_response()
        }
    }
}
