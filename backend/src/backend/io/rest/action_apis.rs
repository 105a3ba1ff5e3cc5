//! # REST API for Quick Actions

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use tracing::{info, warn};

use super::error_body;
use crate::backend::domain::quick_actions::QuickAction;
use crate::backend::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/actions/:action", post(trigger_action))
}

/// Notification to show for a quick action
pub async fn trigger_action(Path(action): Path<String>) -> impl IntoResponse {
    info!("POST /api/actions/{}", action);

    match action.parse::<QuickAction>() {
        Ok(action) => (StatusCode::OK, Json(action.notification())).into_response(),
        Err(e) => {
            warn!("{}", e);
            error_body(StatusCode::NOT_FOUND, e.to_string())
        }
    }
}
