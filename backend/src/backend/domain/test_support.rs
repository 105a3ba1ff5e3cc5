//! Stores and clocks shared by the service tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::clock::{Clock, FixedClock};
use super::models::child::Child;
use super::models::milestone::Milestone;
use super::models::postcard::{Postcard, PostcardContent};
use super::models::timeline::TimelineEntry;
use super::models::user::User;
use crate::backend::storage::{
    ChildStorage, DataStore, FixtureStore, MilestoneStorage, PostcardStorage, SimulatedLatency,
    TimelineStorage, UserStorage,
};

pub fn seeded_store() -> Arc<dyn DataStore> {
    Arc::new(FixtureStore::seeded(SimulatedLatency::disabled()).expect("seed store"))
}

/// The day the seed data was recorded
pub fn seed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 25).unwrap()
}

pub fn seed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(seed_today()))
}

/// Store whose every call fails, as if the backing service were down
pub struct FailingStore;

fn unavailable<T>() -> Result<T> {
    Err(anyhow!("fixture backend offline"))
}

#[async_trait]
impl UserStorage for FailingStore {
    async fn find_user_by_email(&self, _email: &str) -> Result<Option<User>> {
        unavailable()
    }
}

#[async_trait]
impl ChildStorage for FailingStore {
    async fn get_child(&self, _child_id: &str) -> Result<Option<Child>> {
        unavailable()
    }

    async fn list_children_by_parent(&self, _parent_id: &str) -> Result<Vec<Child>> {
        unavailable()
    }
}

#[async_trait]
impl MilestoneStorage for FailingStore {
    async fn list_milestones(&self) -> Result<Vec<Milestone>> {
        unavailable()
    }
}

#[async_trait]
impl PostcardStorage for FailingStore {
    async fn list_postcards_by_child(&self, _child_id: &str) -> Result<Vec<Postcard>> {
        unavailable()
    }

    async fn get_postcard_content(&self, _content_id: &str) -> Result<Option<PostcardContent>> {
        unavailable()
    }
}

#[async_trait]
impl TimelineStorage for FailingStore {
    async fn list_timeline(&self, _child_id: &str) -> Result<Vec<TimelineEntry>> {
        unavailable()
    }
}

pub fn failing_store() -> Arc<dyn DataStore> {
    Arc::new(FailingStore)
}

/// Seeded store that counts how often a child is looked up
pub struct CountingStore {
    inner: Arc<dyn DataStore>,
    child_lookups: AtomicUsize,
}

impl CountingStore {
    pub fn seeded() -> Arc<Self> {
        Arc::new(Self {
            inner: seeded_store(),
            child_lookups: AtomicUsize::new(0),
        })
    }

    pub fn child_lookups(&self) -> usize {
        self.child_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStorage for CountingStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.inner.find_user_by_email(email).await
    }
}

#[async_trait]
impl ChildStorage for CountingStore {
    async fn get_child(&self, child_id: &str) -> Result<Option<Child>> {
        self.child_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.get_child(child_id).await
    }

    async fn list_children_by_parent(&self, parent_id: &str) -> Result<Vec<Child>> {
        self.inner.list_children_by_parent(parent_id).await
    }
}

#[async_trait]
impl MilestoneStorage for CountingStore {
    async fn list_milestones(&self) -> Result<Vec<Milestone>> {
        self.inner.list_milestones().await
    }
}

#[async_trait]
impl PostcardStorage for CountingStore {
    async fn list_postcards_by_child(&self, child_id: &str) -> Result<Vec<Postcard>> {
        self.inner.list_postcards_by_child(child_id).await
    }

    async fn get_postcard_content(&self, content_id: &str) -> Result<Option<PostcardContent>> {
        self.inner.get_postcard_content(content_id).await
    }
}

#[async_trait]
impl TimelineStorage for CountingStore {
    async fn list_timeline(&self, child_id: &str) -> Result<Vec<TimelineEntry>> {
        self.inner.list_timeline(child_id).await
    }
}
