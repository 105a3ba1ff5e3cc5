//! # Page Service
//!
//! Data hooks for the dashboard, profile and postcard pages. Each hook
//! resolves to `Page::Found` with the page's props or to `Page::NotFound`
//! with a German title and description. Errors never escape: a failing
//! store is logged and rendered as the not-found page.

use shared::{MilestoneSummary, Page, StatCard};
use tracing::{error, warn};

use super::child_service::{ChildProfile, ChildService};
use super::dashboard_service::DashboardService;
use super::errors::{DomainError, DomainResult};
use super::formatting::format_date_long;
use super::milestone_service::summarize;
use super::models::dashboard::{DashboardData, DashboardStats};
use super::postcard_service::{PostcardService, PostcardView};

/// Stat cards never fill up faster than against a total of ten
const MIN_FILL_TOTAL: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPage {
    pub profile: ChildProfile,
    pub dashboard: DashboardData,
    pub stat_cards: Vec<StatCard>,
    pub milestone_summary: MilestoneSummary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePage {
    pub profile: ChildProfile,
    pub dashboard: DashboardData,
    pub member_since: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostcardPage {
    pub postcard: PostcardView,
}

/// `min(100, value / max(total, 10) * 100)`
pub fn fill_percent(value: u32, total: u32) -> f64 {
    let denominator = total.max(MIN_FILL_TOTAL) as f64;
    (value as f64 * 100.0 / denominator).min(100.0)
}

pub fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    let total = stats.total_postcards;
    let card = |label: &str, value: u32, display: String, icon: &str| StatCard {
        label: label.to_string(),
        value,
        icon: icon.to_string(),
        display,
        fill_percent: fill_percent(value, total),
    };
    vec![
        card("Gesamt Postkarten", stats.total_postcards, stats.total_postcards.to_string(), "📮"),
        card("Zugestellt", stats.delivered_postcards, stats.delivered_postcards.to_string(), "✅"),
        card("Unterwegs", stats.upcoming_postcards, stats.upcoming_postcards.to_string(), "🚚"),
        card("Tage-Streak", stats.current_streak, format!("{} Tage", stats.current_streak), "🔥"),
    ]
}

fn child_not_found<T>() -> Page<T> {
    Page::NotFound {
        title: "Kind nicht gefunden".to_string(),
        description: "Das angeforderte Kinderprofil konnte nicht gefunden werden.".to_string(),
    }
}

fn postcard_not_found<T>() -> Page<T> {
    Page::NotFound {
        title: "Postkarte nicht gefunden".to_string(),
        description: "Die angeforderte Postkarte konnte nicht gefunden werden.".to_string(),
    }
}

/// Turn a service result into a page, logging whatever went wrong
fn into_page<T>(page: &str, result: DomainResult<T>, not_found: fn() -> Page<T>) -> Page<T> {
    match result {
        Ok(props) => Page::Found { props },
        Err(DomainError::NotFound { entity, id }) => {
            warn!("{} page: {} {} not found", page, entity, id);
            not_found()
        }
        Err(err) => {
            error!("{} page: {}", page, err);
            not_found()
        }
    }
}

#[derive(Clone)]
pub struct PageService {
    children: ChildService,
    dashboards: DashboardService,
    postcards: PostcardService,
}

impl PageService {
    pub fn new(children: ChildService, dashboards: DashboardService, postcards: PostcardService) -> Self {
        Self {
            children,
            dashboards,
            postcards,
        }
    }

    pub async fn dashboard_page(&self, child_id: &str) -> Page<DashboardPage> {
        let result = async {
            let child = self.children.get_child(child_id).await?;
            let dashboard = self.dashboards.dashboard_for(&child).await?;
            let profile = self.children.profile_of(child);
            Ok::<_, DomainError>(DashboardPage {
                stat_cards: stat_cards(&dashboard.stats),
                milestone_summary: summarize(&dashboard.milestones),
                profile,
                dashboard,
            })
        }
        .await;
        into_page("dashboard", result, child_not_found)
    }

    pub async fn profile_page(&self, child_id: &str) -> Page<ProfilePage> {
        let result = async {
            let child = self.children.get_child(child_id).await?;
            let dashboard = self.dashboards.dashboard_for(&child).await?;
            let profile = self.children.profile_of(child);
            Ok::<_, DomainError>(ProfilePage {
                member_since: format_date_long(profile.child.created_at.date_naive()),
                profile,
                dashboard,
            })
        }
        .await;
        into_page("profile", result, child_not_found)
    }

    pub async fn postcard_page(&self, content_id: &str) -> Page<PostcardPage> {
        let result = self
            .postcards
            .postcard_view(content_id)
            .await
            .map(|postcard| PostcardPage { postcard });
        into_page("postcard", result, postcard_not_found)
    }
}
