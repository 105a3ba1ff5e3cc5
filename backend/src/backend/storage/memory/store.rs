//! # Fixture Store
//!
//! In-memory implementation of every storage trait. The tables sit behind an
//! `Arc` and are shared by all requests; each lookup sleeps for the
//! operation's simulated latency before answering.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::fixtures::FixtureSet;
use crate::backend::domain::models::child::Child;
use crate::backend::domain::models::milestone::Milestone;
use crate::backend::domain::models::postcard::{Postcard, PostcardContent};
use crate::backend::domain::models::timeline::TimelineEntry;
use crate::backend::domain::models::user::User;
use crate::backend::storage::csv::seed::seed_fixtures;
use crate::backend::storage::latency::{Operation, SimulatedLatency};
use crate::backend::storage::traits::{
    ChildStorage, MilestoneStorage, PostcardStorage, TimelineStorage, UserStorage,
};

#[derive(Clone)]
pub struct FixtureStore {
    fixtures: Arc<FixtureSet>,
    latency: SimulatedLatency,
}

impl FixtureStore {
    /// Wrap a fixture set after validating it
    pub fn new(fixtures: FixtureSet, latency: SimulatedLatency) -> Result<Self> {
        fixtures.validate()?;
        Ok(Self {
            fixtures: Arc::new(fixtures),
            latency,
        })
    }

    /// Store backed by the built-in seed data
    pub fn seeded(latency: SimulatedLatency) -> Result<Self> {
        Self::new(seed_fixtures()?, latency)
    }
}

#[async_trait]
impl UserStorage for FixtureStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let email = email.trim().to_lowercase();
        Ok(self
            .fixtures
            .users
            .iter()
            .find(|user| user.email.to_lowercase() == email)
            .cloned())
    }
}

#[async_trait]
impl ChildStorage for FixtureStore {
    async fn get_child(&self, child_id: &str) -> Result<Option<Child>> {
        self.latency.wait(Operation::Child).await;
        let child = self
            .fixtures
            .children
            .iter()
            .find(|child| child.id == child_id)
            .cloned();
        debug!(child_id, found = child.is_some(), "child lookup");
        Ok(child)
    }

    async fn list_children_by_parent(&self, parent_id: &str) -> Result<Vec<Child>> {
        self.latency.wait(Operation::Children).await;
        Ok(self
            .fixtures
            .children
            .iter()
            .filter(|child| child.parent_id == parent_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MilestoneStorage for FixtureStore {
    async fn list_milestones(&self) -> Result<Vec<Milestone>> {
        self.latency.wait(Operation::Milestones).await;
        Ok(self.fixtures.milestones.clone())
    }
}

#[async_trait]
impl PostcardStorage for FixtureStore {
    async fn list_postcards_by_child(&self, child_id: &str) -> Result<Vec<Postcard>> {
        self.latency.wait(Operation::Postcards).await;
        Ok(self
            .fixtures
            .postcards
            .iter()
            .filter(|postcard| postcard.child_id == child_id)
            .cloned()
            .collect())
    }

    async fn get_postcard_content(&self, content_id: &str) -> Result<Option<PostcardContent>> {
        self.latency.wait(Operation::PostcardContent).await;
        Ok(self
            .fixtures
            .postcard_contents
            .iter()
            .find(|content| content.id == content_id)
            .cloned())
    }
}

#[async_trait]
impl TimelineStorage for FixtureStore {
    async fn list_timeline(&self, child_id: &str) -> Result<Vec<TimelineEntry>> {
        self.latency.wait(Operation::Timeline).await;
        Ok(self
            .fixtures
            .timeline
            .iter()
            .filter(|entry| entry.child_id == child_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> FixtureStore {
        FixtureStore::seeded(SimulatedLatency::disabled()).expect("seed store")
    }

    #[tokio::test]
    async fn test_child_lookups() {
        let store = store();

        let emma = store.get_child("1").await.unwrap().expect("Emma exists");
        assert_eq!(emma.name, "Emma");
        assert!(store.get_child("404").await.unwrap().is_none());

        let children = store.list_children_by_parent("user1").await.unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].id, "1");
        assert!(store.list_children_by_parent("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_postcards_filtered_by_child() {
        let store = store();

        let postcards = store.list_postcards_by_child("1").await.unwrap();
        assert_eq!(postcards.len(), 5);
        assert!(postcards.iter().all(|p| p.child_id == "1"));
        assert!(store.list_postcards_by_child("2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_content_lookup() {
        let store = store();

        let content = store.get_postcard_content("1").await.unwrap().unwrap();
        assert_eq!(content.milestone_id, "1");
        assert!(store.get_postcard_content("99").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_user_lookup_ignores_case() {
        let store = store();

        let user = store.find_user_by_email("Mama@Example.de").await.unwrap();
        assert_eq!(user.map(|u| u.id), Some("user1".to_string()));
    }

    #[tokio::test]
    async fn test_rejects_invalid_fixtures() {
        let mut fixtures = seed_fixtures().unwrap();
        fixtures.milestones[2].is_completed = true;
        assert!(FixtureStore::new(fixtures, SimulatedLatency::disabled()).is_err());
    }
}
