//! # Backend Module
//!
//! Everything behind the HTTP port of the letterbox dashboard:
//! - **Domain**: Milestones, postcards, timeline and the read models built from them
//! - **Storage**: Read-only fixture data with simulated latency
//! - **IO**: REST handlers and DTO mappers
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API, handlers, mappers)
//!     ↓
//! Domain Layer (services, calculators)
//!     ↓
//! Storage Layer (fixture store, CSV loader)
//! ```

pub mod storage;
pub mod domain;
pub mod io;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use domain::{
    AuthService, ChildService, Clock, DashboardService, FixedClock, MilestoneService,
    OnboardingService, PageService, PostcardService, SystemClock,
};
use storage::csv::load_fixture_dir;
use storage::{DataStore, FixtureStore, SimulatedLatency};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub child_service: ChildService,
    pub milestone_service: MilestoneService,
    pub postcard_service: PostcardService,
    pub dashboard_service: DashboardService,
    pub auth_service: AuthService,
    pub onboarding_service: OnboardingService,
    pub page_service: PageService,
}

impl AppState {
    /// Wire every service to one store and one clock
    pub fn from_parts(store: Arc<dyn DataStore>, clock: Arc<dyn Clock>, config: &AppConfig) -> Self {
        let latency = SimulatedLatency::from_flag(config.data.simulate_latency);

        let child_service = ChildService::new(store.clone(), clock.clone());
        let milestone_service = MilestoneService::new(store.clone());
        let postcard_service = PostcardService::new(store.clone());
        let dashboard_service = DashboardService::new(store.clone(), clock.clone());
        let auth_service = AuthService::new(store, clock.clone(), config.auth.clone(), latency);
        let onboarding_service = OnboardingService::new(clock, latency);
        let page_service = PageService::new(
            child_service.clone(),
            dashboard_service.clone(),
            postcard_service.clone(),
        );

        Self {
            child_service,
            milestone_service,
            postcard_service,
            dashboard_service,
            auth_service,
            onboarding_service,
            page_service,
        }
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    let latency = SimulatedLatency::from_flag(config.data.simulate_latency);

    info!("Setting up fixture store");
    let fixtures = match &config.data.fixture_dir {
        Some(dir) => load_fixture_dir(dir)?,
        None => {
            info!("Using built-in seed data");
            storage::csv::seed::seed_fixtures().context("Built-in seed data is invalid")?
        }
    };
    let store: Arc<dyn DataStore> = Arc::new(FixtureStore::new(fixtures, latency)?);

    let clock: Arc<dyn Clock> = match config.clock.today {
        Some(today) => {
            info!("Clock pinned to {}", today);
            Arc::new(FixedClock::new(today))
        }
        None => Arc::new(SystemClock),
    };

    info!("Setting up application state");
    Ok(AppState::from_parts(store, clock, config))
}

fn cors_layer(config: &AppConfig) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Ok(match &config.server.cors_origin {
        Some(origin) => cors.allow_origin(
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin {:?}", origin))?,
        ),
        None => cors.allow_origin(Any),
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Result<Router> {
    let cors = cors_layer(config)?;

    Ok(Router::new()
        .route("/health", get(health))
        .nest("/api", io::rest::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state))
}

async fn health() -> &'static str {
    "ok"
}
