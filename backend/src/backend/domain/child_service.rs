use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

use super::age::calculate_age;
use super::clock::Clock;
use super::errors::{DomainError, DomainResult};
use super::models::child::Child;
use crate::backend::storage::DataStore;

/// Header data for a child's pages: the child, a German age label and the
/// emoji of the favorite theme
#[derive(Debug, Clone, PartialEq)]
pub struct ChildProfile {
    pub child: Child,
    pub age_label: String,
    pub theme_emoji: &'static str,
}

impl ChildProfile {
    pub fn new(child: Child, today: NaiveDate) -> Self {
        let age_label = calculate_age(child.birth_date, today);
        let theme_emoji = child.theme_emoji();
        Self {
            child,
            age_label,
            theme_emoji,
        }
    }
}

/// Service for looking up children
#[derive(Clone)]
pub struct ChildService {
    store: Arc<dyn DataStore>,
    clock: Arc<dyn Clock>,
}

impl ChildService {
    pub fn new(store: Arc<dyn DataStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Get a child by ID, `None` when there is no such child
    pub async fn fetch_child_by_id(&self, child_id: &str) -> DomainResult<Option<Child>> {
        info!("Getting child: {}", child_id);

        let child = self.store.get_child(child_id).await?;

        if child.is_none() {
            warn!("Child not found: {}", child_id);
        }

        Ok(child)
    }

    /// Get a child by ID, failing with `NotFound` when there is no such child
    pub async fn get_child(&self, child_id: &str) -> DomainResult<Child> {
        self.fetch_child_by_id(child_id)
            .await?
            .ok_or_else(|| DomainError::not_found("child", child_id))
    }

    pub async fn fetch_children_by_parent(&self, parent_id: &str) -> DomainResult<Vec<Child>> {
        info!("Listing children of parent: {}", parent_id);

        let children = self.store.list_children_by_parent(parent_id).await?;

        info!("Found {} children", children.len());

        Ok(children)
    }

    pub async fn child_profile(&self, child_id: &str) -> DomainResult<ChildProfile> {
        let child = self.get_child(child_id).await?;
        Ok(self.profile_of(child))
    }

    /// Profile of an already loaded child, aged against today's date
    pub fn profile_of(&self, child: Child) -> ChildProfile {
        ChildProfile::new(child, self.clock.today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::test_support::{seed_clock, seeded_store};

    fn setup_test() -> ChildService {
        ChildService::new(seeded_store(), seed_clock())
    }

    #[tokio::test]
    async fn test_fetch_child_by_id() {
        let service = setup_test();

        let child = service.fetch_child_by_id("1").await.unwrap().expect("Emma exists");
        assert_eq!(child.name, "Emma");
        assert!(service.fetch_child_by_id("999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_child_not_found() {
        let service = setup_test();

        let error = service.get_child("999").await.unwrap_err();
        assert!(matches!(error, DomainError::NotFound { entity: "child", .. }));
    }

    #[tokio::test]
    async fn test_children_by_parent() {
        let service = setup_test();

        let children = service.fetch_children_by_parent("user2").await.unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "Max");
        assert!(service.fetch_children_by_parent("user9").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_child_profile() {
        let service = setup_test();

        let profile = service.child_profile("1").await.unwrap();
        assert_eq!(profile.age_label, "2 Jahre, 10 Monate");
        assert_eq!(profile.theme_emoji, "👑");

        let profile = service.child_profile("2").await.unwrap();
        assert_eq!(profile.theme_emoji, "🦕");
    }
}
