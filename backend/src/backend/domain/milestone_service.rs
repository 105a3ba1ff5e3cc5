//! Milestone progress: category badges, the completed / in progress /
//! planned summary and the milestone board shown on the dashboard.

use std::sync::Arc;
use tracing::info;

use shared::{CategoryColor, MilestoneCategory, MilestoneSummary};

use super::errors::DomainResult;
use super::formatting::format_date_short;
use super::models::milestone::{Milestone, MilestoneStage};
use crate::backend::storage::DataStore;

/// Badge color for a raw category name. Unknown names get the neutral gray.
pub fn category_color(raw: &str) -> CategoryColor {
    MilestoneCategory::parse(raw)
        .map(|category| category.color())
        .unwrap_or(CategoryColor::Neutral)
}

/// German badge label for a raw category name
pub fn category_label(raw: &str) -> &'static str {
    MilestoneCategory::parse(raw)
        .map(|category| category.label())
        .unwrap_or("Unbekannt")
}

/// Basic first, then advanced, then special. Catalog order is kept within a category.
pub fn display_order(mut milestones: Vec<Milestone>) -> Vec<Milestone> {
    milestones.sort_by_key(|m| m.category.rank());
    milestones
}

pub fn summarize(milestones: &[Milestone]) -> MilestoneSummary {
    let mut summary = MilestoneSummary {
        completed: 0,
        in_progress: 0,
        planned: 0,
        total: milestones.len() as u32,
        completion_percent: 0,
    };
    for milestone in milestones {
        match milestone.stage() {
            MilestoneStage::Completed => summary.completed += 1,
            MilestoneStage::InProgress => summary.in_progress += 1,
            MilestoneStage::Planned => summary.planned += 1,
        }
    }
    if summary.total > 0 {
        summary.completion_percent =
            (summary.completed as f64 / summary.total as f64 * 100.0).round() as u32;
    }
    summary
}

/// "Erreicht am ..." for completed milestones, the next postcard date otherwise
pub fn caption(milestone: &Milestone) -> String {
    match milestone.completed_at {
        Some(completed_at) if milestone.is_completed => {
            format!("Erreicht am {}", format_date_short(completed_at.date_naive()))
        }
        _ => format!(
            "Nächste Postkarte: {}",
            format_date_short(milestone.next_postcard_date)
        ),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneCard {
    pub milestone: Milestone,
    pub color: CategoryColor,
    pub label: &'static str,
    pub caption: String,
}

impl MilestoneCard {
    pub fn new(milestone: Milestone) -> Self {
        Self {
            color: milestone.category.color(),
            label: milestone.category.label(),
            caption: caption(&milestone),
            milestone,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneBoard {
    pub cards: Vec<MilestoneCard>,
    pub summary: MilestoneSummary,
}

impl MilestoneBoard {
    pub fn new(milestones: Vec<Milestone>) -> Self {
        let summary = summarize(&milestones);
        let cards = display_order(milestones)
            .into_iter()
            .map(MilestoneCard::new)
            .collect();
        Self { cards, summary }
    }
}

/// Service for the shared milestone catalog
#[derive(Clone)]
pub struct MilestoneService {
    store: Arc<dyn DataStore>,
}

impl MilestoneService {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    /// The whole catalog in creation order
    pub async fn fetch_milestones(&self) -> DomainResult<Vec<Milestone>> {
        let milestones = self.store.list_milestones().await?;
        info!("Found {} milestones", milestones.len());
        Ok(milestones)
    }

    pub async fn milestone_board(&self) -> DomainResult<MilestoneBoard> {
        Ok(MilestoneBoard::new(self.fetch_milestones().await?))
    }
}
