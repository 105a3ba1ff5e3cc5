use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{ContentStatus, PostcardStatus};

/// The personalized text and illustration printed on a postcard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostcardContent {
    pub id: String,
    pub milestone_id: String,
    pub child_id: String,
    pub title: String,
    pub message: String,
    pub illustration: String,
    pub is_personalized: bool,
    pub status: ContentStatus,
    #[serde(default)]
    pub parent_feedback: Option<String>,
}

/// A physical postcard moving through the shipping lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Postcard {
    pub id: String,
    pub child_id: String,
    pub content_id: String,
    pub status: PostcardStatus,
    pub planned_shipping_date: NaiveDate,
    #[serde(default)]
    pub actual_shipping_date: Option<NaiveDate>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub estimated_delivery: Option<NaiveDate>,
    #[serde(default)]
    pub parent_reaction: Option<String>,
    #[serde(default)]
    pub child_reaction: Option<String>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PostcardValidationError {
    #[error("postcard {id}: cannot have a shipping date while {status}")]
    ShippedBeforePrinting { id: String, status: PostcardStatus },
    #[error("postcard {id}: cannot move from {from} to {to}")]
    BackwardTransition {
        id: String,
        from: PostcardStatus,
        to: PostcardStatus,
    },
}

impl Postcard {
    pub fn validate(&self) -> Result<(), PostcardValidationError> {
        if self.actual_shipping_date.is_some() && self.status < PostcardStatus::Printed {
            return Err(PostcardValidationError::ShippedBeforePrinting {
                id: self.id.clone(),
                status: self.status,
            });
        }
        Ok(())
    }

    /// Move the postcard to a later lifecycle stage.
    pub fn transition_to(&self, target: PostcardStatus) -> Result<Postcard, PostcardValidationError> {
        if !self.status.can_transition_to(target) {
            return Err(PostcardValidationError::BackwardTransition {
                id: self.id.clone(),
                from: self.status,
                to: target,
            });
        }
        Ok(Postcard {
            status: target,
            ..self.clone()
        })
    }
}
