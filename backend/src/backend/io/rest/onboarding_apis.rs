//! # REST API for Onboarding

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use tracing::{info, warn};

use super::mappers::child_mapper::ChildMapper;
use super::mappers::user_mapper::UserMapper;
use super::ApiError;
use crate::backend::AppState;
use shared::{OnboardingRequest, OnboardingResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/onboarding", post(submit_onboarding))
        .route("/onboarding/validate/:step", post(validate_step))
}

/// Validate one step of the signup form; 204 when the step is complete
pub async fn validate_step(
    State(state): State<AppState>,
    Path(step): Path<u8>,
    Json(request): Json<OnboardingRequest>,
) -> impl IntoResponse {
    info!("POST /api/onboarding/validate/{}", step);

    match state.onboarding_service.validate_step(step, &request) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            warn!("Onboarding step {} invalid: {}", step, e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn submit_onboarding(
    State(state): State<AppState>,
    Json(request): Json<OnboardingRequest>,
) -> impl IntoResponse {
    info!("POST /api/onboarding - email: {}", request.parent_email);

    match state.onboarding_service.submit(&request).await {
        Ok(result) => {
            let response = OnboardingResponse {
                user: UserMapper::to_dto(result.user),
                child: ChildMapper::to_dto(result.child),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            warn!("Onboarding rejected: {}", e);
            ApiError::from(e).into_response()
        }
    }
}
