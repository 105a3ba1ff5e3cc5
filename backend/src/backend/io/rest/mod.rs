//! # REST API Interface Layer
//!
//! HTTP endpoints of the letterbox backend, all under `/api`:
//!
//! - `GET /milestones`: milestone board
//! - `GET /children/:id`, `/children/:id/profile`, `/parents/:parent_id/children`
//! - `GET /children/:id/postcards`, `/children/:id/dashboard`, `/postcard-contents/:id`
//! - `POST /auth/login`, `/auth/register`
//! - `POST /onboarding/validate/:step`, `/onboarding`
//! - `POST /actions/:action`
//! - `GET /pages/dashboard/:id`, `/pages/profile/:id`, `/pages/postcard/:id`
//!
//! Domain errors map to 404 (not found), 422 (validation, with field
//! errors) and 503 (data unavailable). Page endpoints never fail: they
//! answer 404 with not-found props instead.

pub mod mappers;
pub mod child_apis;
pub mod milestone_apis;
pub mod postcard_apis;
pub mod dashboard_apis;
pub mod auth_apis;
pub mod onboarding_apis;
pub mod action_apis;
pub mod page_apis;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Router,
};
use tracing::error;

use crate::backend::domain::errors::DomainError;
use crate::backend::AppState;
use shared::{ErrorResponse, ValidationErrorResponse};

/// All API routes, relative to `/api`
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(milestone_apis::router())
        .merge(child_apis::router())
        .merge(postcard_apis::router())
        .merge(dashboard_apis::router())
        .merge(auth_apis::router())
        .merge(onboarding_apis::router())
        .merge(action_apis::router())
        .merge(page_apis::router())
}

/// HTTP rendering of a domain error
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError(error)
    }
}

pub(crate) fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            message: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            DomainError::NotFound { entity, id } => {
                error_body(StatusCode::NOT_FOUND, format!("{} not found: {}", entity, id))
            }
            DomainError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorResponse {
                    errors: errors.into_map(),
                }),
            )
                .into_response(),
            DomainError::DataUnavailable(source) => {
                error!("Data unavailable: {:#}", source);
                error_body(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Daten sind momentan nicht verfügbar",
                )
            }
        }
    }
}
