//! # Storage Traits
//!
//! Lookups the domain layer needs. "Not found" is `Ok(None)` or an empty
//! vector; `Err` is reserved for the store itself failing.

use anyhow::Result;
use async_trait::async_trait;

use crate::backend::domain::models::child::Child;
use crate::backend::domain::models::milestone::Milestone;
use crate::backend::domain::models::postcard::{Postcard, PostcardContent};
use crate::backend::domain::models::timeline::TimelineEntry;
use crate::backend::domain::models::user::User;

#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Look up a parent account by email (case-insensitive)
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;
}

#[async_trait]
pub trait ChildStorage: Send + Sync {
    async fn get_child(&self, child_id: &str) -> Result<Option<Child>>;

    /// Children of one parent, in fixture order
    async fn list_children_by_parent(&self, parent_id: &str) -> Result<Vec<Child>>;
}

#[async_trait]
pub trait MilestoneStorage: Send + Sync {
    /// The shared milestone catalog, in creation order
    async fn list_milestones(&self) -> Result<Vec<Milestone>>;
}

#[async_trait]
pub trait PostcardStorage: Send + Sync {
    async fn list_postcards_by_child(&self, child_id: &str) -> Result<Vec<Postcard>>;

    async fn get_postcard_content(&self, content_id: &str) -> Result<Option<PostcardContent>>;
}

#[async_trait]
pub trait TimelineStorage: Send + Sync {
    /// Timeline entries for one child, in no particular order
    async fn list_timeline(&self, child_id: &str) -> Result<Vec<TimelineEntry>>;
}

/// Everything the services read from, bundled so one handle can be shared.
pub trait DataStore:
    UserStorage + ChildStorage + MilestoneStorage + PostcardStorage + TimelineStorage
{
}

impl<T> DataStore for T where
    T: UserStorage + ChildStorage + MilestoneStorage + PostcardStorage + TimelineStorage
{
}
