use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::MilestoneCategory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: MilestoneCategory,
    pub icon: String,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub next_postcard_date: NaiveDate,
    pub progress: u8,
}

/// Which bucket of the overview panel a milestone is counted in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneStage {
    Completed,
    InProgress,
    Planned,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum MilestoneValidationError {
    #[error("milestone {0}: progress must be between 0 and 100")]
    ProgressOutOfRange(String),
    #[error("milestone {0}: completed milestones need a completion date")]
    MissingCompletionDate(String),
    #[error("milestone {0}: completed milestones must be at 100% progress")]
    CompletedBelowFullProgress(String),
    #[error("milestone {0}: open milestones cannot have a completion date")]
    UnexpectedCompletionDate(String),
}

impl Milestone {
    /// Check the completion invariants:
    /// completed ⇒ completion date set and progress 100,
    /// open ⇒ no completion date.
    pub fn validate(&self) -> Result<(), MilestoneValidationError> {
        if self.progress > 100 {
            return Err(MilestoneValidationError::ProgressOutOfRange(self.id.clone()));
        }
        if self.is_completed {
            if self.completed_at.is_none() {
                return Err(MilestoneValidationError::MissingCompletionDate(self.id.clone()));
            }
            if self.progress != 100 {
                return Err(MilestoneValidationError::CompletedBelowFullProgress(self.id.clone()));
            }
        } else if self.completed_at.is_some() {
            return Err(MilestoneValidationError::UnexpectedCompletionDate(self.id.clone()));
        }
        Ok(())
    }

    pub fn stage(&self) -> MilestoneStage {
        if self.is_completed {
            MilestoneStage::Completed
        } else if self.progress > 0 {
            MilestoneStage::InProgress
        } else {
            MilestoneStage::Planned
        }
    }
}
