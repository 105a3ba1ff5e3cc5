//! # REST API for Authentication
//!
//! Demo login against the configured credentials and stateless registration.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use tracing::{error, info, warn};

use super::mappers::user_mapper::UserMapper;
use super::{error_body, ApiError};
use crate::backend::AppState;
use shared::{LoginRequest, RegisterRequest};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    // Never log the password
    info!("POST /api/auth/login - email: {}", request.email);

    match state.auth_service.authenticate_user(&request.email, &request.password).await {
        Ok(Some(user)) => (StatusCode::OK, Json(UserMapper::to_login_response(user))).into_response(),
        Ok(None) => {
            warn!("Invalid credentials for {}", request.email);
            error_body(StatusCode::UNAUTHORIZED, "Ungültige E-Mail oder Passwort")
        }
        Err(e) => {
            error!("Login failed: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> impl IntoResponse {
    info!("POST /api/auth/register - email: {}", request.email);

    match state.auth_service.register_user(&request.email).await {
        Ok(user) => (StatusCode::CREATED, Json(UserMapper::to_dto(user))).into_response(),
        Err(e) => {
            error!("Registration failed: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{post_json, seeded_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_login() {
        let (status, body) = post_json(
            seeded_app(),
            "/api/auth/login",
            json!({ "email": "mama@example.de", "password": "test123" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["id"], "user1");
        assert_eq!(body["user"]["isVerified"], true);

        let (status, body) = post_json(
            seeded_app(),
            "/api/auth/login",
            json!({ "email": "mama@example.de", "password": "falsch" }),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Ungültige E-Mail oder Passwort");
    }

    #[tokio::test]
    async fn test_register() {
        let (status, body) = post_json(
            seeded_app(),
            "/api/auth/register",
            json!({ "email": "neu@example.de" }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["email"], "neu@example.de");
        assert_eq!(body["isVerified"], false);

        let (status, body) = post_json(
            seeded_app(),
            "/api/auth/register",
            json!({ "email": "keine-adresse" }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"]["email"], "Ungültige E-Mail-Adresse");
    }
}
