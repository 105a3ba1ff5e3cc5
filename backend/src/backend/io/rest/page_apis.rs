//! # REST API for Page Props
//!
//! Found pages answer 200 with their props; missing children or postcards,
//! and failed loads, answer 404 with the not-found title and description.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use tracing::info;

use super::mappers::page_mapper::PageMapper;
use crate::backend::AppState;
use shared::Page;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pages/dashboard/:id", get(get_dashboard_page))
        .route("/pages/profile/:id", get(get_profile_page))
        .route("/pages/postcard/:id", get(get_postcard_page))
}

fn page_response<T: Serialize>(page: Page<T>) -> Response {
    let status = if page.is_found() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (status, Json(page)).into_response()
}

pub async fn get_dashboard_page(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/pages/dashboard/{}", child_id);

    let page = state.page_service.dashboard_page(&child_id).await;
    page_response(PageMapper::map_page(page, PageMapper::to_dashboard_props))
}

pub async fn get_profile_page(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/pages/profile/{}", child_id);

    let page = state.page_service.profile_page(&child_id).await;
    page_response(PageMapper::map_page(page, PageMapper::to_profile_props))
}

pub async fn get_postcard_page(
    State(state): State<AppState>,
    Path(content_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/pages/postcard/{}", content_id);

    let page = state.page_service.postcard_page(&content_id).await;
    page_response(PageMapper::map_page(page, PageMapper::to_postcard_props))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{failing_app, get, seeded_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_dashboard_page() {
        let (status, body) = get(seeded_app(), "/api/pages/dashboard/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "found");

        let props = &body["props"];
        assert_eq!(props["child"]["child"]["name"], "Emma");
        assert_eq!(props["statCards"][0]["label"], "Gesamt Postkarten");
        assert_eq!(props["statCards"][0]["fillPercent"], 50.0);
        assert_eq!(props["statCards"][3]["display"], "7 Tage");
        assert_eq!(props["milestoneSummary"]["total"], 5);
        assert_eq!(props["dashboard"]["stats"]["currentStreak"], 7);
    }

    #[tokio::test]
    async fn test_profile_page() {
        let (status, body) = get(seeded_app(), "/api/pages/profile/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["props"]["memberSince"], "15. Januar 2024");

        let (status, body) = get(seeded_app(), "/api/pages/profile/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["kind"], "notFound");
        assert_eq!(body["title"], "Kind nicht gefunden");
    }

    #[tokio::test]
    async fn test_postcard_page() {
        let (status, body) = get(seeded_app(), "/api/pages/postcard/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["props"]["postcard"]["statusLabel"], "Vorschau");
        assert_eq!(body["props"]["postcard"]["child"]["name"], "Emma");

        let (status, body) = get(seeded_app(), "/api/pages/postcard/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["title"], "Postkarte nicht gefunden");
    }

    #[tokio::test]
    async fn test_storage_failure_is_not_found() {
        let (status, body) = get(failing_app(), "/api/pages/dashboard/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["kind"], "notFound");
    }
}
