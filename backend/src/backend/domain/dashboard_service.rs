use std::sync::Arc;
use tracing::info;

use super::clock::Clock;
use super::errors::{DomainError, DomainResult};
use super::milestone_service::display_order;
use super::models::child::Child;
use super::models::dashboard::{DashboardData, DashboardStats};
use super::streak::current_streak;
use crate::backend::storage::DataStore;

/// Builds the dashboard read model for one child
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn DataStore>,
    clock: Arc<dyn Clock>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn DataStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Stats, ordered milestones and newest-first timeline for a child.
    ///
    /// Fails with `NotFound` for an unknown child.
    pub async fn get_dashboard_data(&self, child_id: &str) -> DomainResult<DashboardData> {
        info!("Building dashboard for child: {}", child_id);

        let child = self
            .store
            .get_child(child_id)
            .await?
            .ok_or_else(|| DomainError::not_found("child", child_id))?;
        self.dashboard_for(&child).await
    }

    /// Dashboard for a child that has already been looked up. Postcards,
    /// milestones and timeline are fetched concurrently.
    pub async fn dashboard_for(&self, child: &Child) -> DomainResult<DashboardData> {
        let child_id = child.id.as_str();
        let (postcards, milestones, timeline) = tokio::join!(
            self.store.list_postcards_by_child(child_id),
            self.store.list_milestones(),
            self.store.list_timeline(child_id),
        );
        let postcards = postcards?;
        let milestones = milestones?;
        let mut timeline = timeline?;

        let streak = current_streak(&timeline, self.clock.today());
        let stats = DashboardStats::from_postcards(&postcards, streak);

        timeline.sort_by(|a, b| b.date.cmp(&a.date));

        info!(
            "Dashboard for child {}: {} postcards ({} delivered), streak {}",
            child_id, stats.total_postcards, stats.delivered_postcards, stats.current_streak
        );

        Ok(DashboardData {
            stats,
            milestones: display_order(milestones),
            timeline,
        })
    }

    /// Same as [`DashboardService::get_dashboard_data`]
    pub async fn fetch_dashboard_data(&self, child_id: &str) -> DomainResult<DashboardData> {
        self.get_dashboard_data(child_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::clock::FixedClock;
    use crate::backend::domain::test_support::{failing_store, seed_clock, seeded_store};
    use crate::backend::storage::csv::seed::seed_fixtures;
    use crate::backend::storage::{FixtureStore, SimulatedLatency};
    use chrono::{NaiveDate, TimeZone, Utc};
    use shared::MilestoneCategory;

    fn setup_test() -> DashboardService {
        DashboardService::new(seeded_store(), seed_clock())
    }

    #[tokio::test]
    async fn test_seed_dashboard() {
        let service = setup_test();

        let dashboard = service.get_dashboard_data("1").await.unwrap();
        assert_eq!(dashboard.stats.total_postcards, 5);
        assert_eq!(dashboard.stats.delivered_postcards, 3);
        assert_eq!(dashboard.stats.upcoming_postcards, 2);
        assert_eq!(dashboard.stats.current_streak, 7);
        assert_eq!(dashboard.milestones.len(), 5);
        assert_eq!(dashboard.timeline.len(), 8);
    }

    #[tokio::test]
    async fn test_ordering() {
        let service = setup_test();
        let dashboard = service.get_dashboard_data("1").await.unwrap();

        for pair in dashboard.timeline.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
        for pair in dashboard.milestones.windows(2) {
            assert!(pair[0].category.rank() <= pair[1].category.rank());
        }
    }

    #[tokio::test]
    async fn test_unordered_fixtures_are_sorted() {
        let mut fixtures = seed_fixtures().unwrap();
        fixtures.milestones.reverse();
        fixtures.timeline.reverse();
        let store = FixtureStore::new(fixtures, SimulatedLatency::disabled()).unwrap();
        let service = DashboardService::new(Arc::new(store), seed_clock());

        let dashboard = service.get_dashboard_data("1").await.unwrap();
        assert_eq!(dashboard.milestones[0].category, MilestoneCategory::Basic);
        // Within a category the fixture order is kept
        assert_eq!(dashboard.milestones[0].id, "2");
        assert_eq!(dashboard.milestones[1].id, "1");
        assert_eq!(dashboard.milestones[4].category, MilestoneCategory::Special);
        assert_eq!(
            dashboard.timeline[0].date,
            Utc.with_ymd_and_hms(2024, 1, 25, 18, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn test_child_without_postcards() {
        let service = setup_test();

        let dashboard = service.fetch_dashboard_data("2").await.unwrap();
        assert_eq!(dashboard.stats, DashboardStats::default());
        assert!(dashboard.timeline.is_empty());
        // The catalog is shared by all children
        assert_eq!(dashboard.milestones.len(), 5);
    }

    #[tokio::test]
    async fn test_streak_follows_clock() {
        let clock = Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()));
        let service = DashboardService::new(seeded_store(), clock);

        let dashboard = service.get_dashboard_data("1").await.unwrap();
        assert_eq!(dashboard.stats.current_streak, 0);
    }

    #[tokio::test]
    async fn test_unknown_child() {
        let service = setup_test();

        let error = service.get_dashboard_data("999").await.unwrap_err();
        assert!(matches!(error, DomainError::NotFound { entity: "child", .. }));
    }

    #[tokio::test]
    async fn test_storage_failure() {
        let service = DashboardService::new(failing_store(), seed_clock());

        let error = service.get_dashboard_data("1").await.unwrap_err();
        assert!(matches!(error, DomainError::DataUnavailable(_)));
    }

    #[tokio::test]
    async fn test_fetches_run_concurrently() {
        let store = FixtureStore::seeded(SimulatedLatency::enabled()).unwrap();
        let service = DashboardService::new(Arc::new(store), seed_clock());

        let start = std::time::Instant::now();
        service.get_dashboard_data("1").await.unwrap();
        // child (300) then max(postcards 400, milestones 300, timeline 200)
        assert!(start.elapsed() < std::time::Duration::from_millis(1100));
    }
}
