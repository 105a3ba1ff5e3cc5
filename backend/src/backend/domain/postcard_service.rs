use std::sync::Arc;
use tracing::{info, warn};

use super::errors::{DomainError, DomainResult};
use super::models::child::Child;
use super::models::postcard::{Postcard, PostcardContent};
use crate::backend::storage::DataStore;

/// A postcard's content together with the child it was written for
#[derive(Debug, Clone, PartialEq)]
pub struct PostcardView {
    pub content: PostcardContent,
    pub child: Child,
    pub status_label: &'static str,
}

/// Service for postcards and their personalized contents
#[derive(Clone)]
pub struct PostcardService {
    store: Arc<dyn DataStore>,
}

impl PostcardService {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    /// All postcards of a child, empty for unknown children
    pub async fn fetch_postcards_by_child(&self, child_id: &str) -> DomainResult<Vec<Postcard>> {
        info!("Listing postcards for child: {}", child_id);

        let postcards = self.store.list_postcards_by_child(child_id).await?;

        info!("Found {} postcards", postcards.len());

        Ok(postcards)
    }

    pub async fn fetch_postcard_content(&self, content_id: &str) -> DomainResult<Option<PostcardContent>> {
        let content = self.store.get_postcard_content(content_id).await?;

        if content.is_none() {
            warn!("Postcard content not found: {}", content_id);
        }

        Ok(content)
    }

    /// Content, owning child and German status label for the postcard page
    pub async fn postcard_view(&self, content_id: &str) -> DomainResult<PostcardView> {
        let content = self
            .fetch_postcard_content(content_id)
            .await?
            .ok_or_else(|| DomainError::not_found("postcard content", content_id))?;

        let child = self
            .store
            .get_child(&content.child_id)
            .await?
            .ok_or_else(|| DomainError::not_found("child", content.child_id.as_str()))?;

        Ok(PostcardView {
            status_label: content.status.label(),
            content,
            child,
        })
    }
}
