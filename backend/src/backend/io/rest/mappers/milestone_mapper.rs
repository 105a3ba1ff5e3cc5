use super::{date_to_wire, timestamp_to_wire};
use crate::backend::domain::milestone_service::{
    MilestoneBoard as DomainMilestoneBoard, MilestoneCard as DomainMilestoneCard,
};
use crate::backend::domain::models::milestone::Milestone as DomainMilestone;
use shared::{
    CategoryBadge, Milestone as SharedMilestone, MilestoneBoard as SharedMilestoneBoard,
    MilestoneCard as SharedMilestoneCard,
};

pub struct MilestoneMapper;

impl MilestoneMapper {
    pub fn to_dto(domain: DomainMilestone) -> SharedMilestone {
        SharedMilestone {
            id: domain.id,
            title: domain.title,
            description: domain.description,
            category: domain.category,
            icon: domain.icon,
            is_completed: domain.is_completed,
            completed_at: domain.completed_at.map(timestamp_to_wire),
            next_postcard_date: date_to_wire(domain.next_postcard_date),
            progress: domain.progress,
        }
    }

    pub fn to_card_dto(domain: DomainMilestoneCard) -> SharedMilestoneCard {
        SharedMilestoneCard {
            badge: CategoryBadge {
                color: domain.color,
                label: domain.label.to_string(),
            },
            caption: domain.caption,
            milestone: Self::to_dto(domain.milestone),
        }
    }

    pub fn to_board_dto(domain: DomainMilestoneBoard) -> SharedMilestoneBoard {
        SharedMilestoneBoard {
            milestones: domain.cards.into_iter().map(Self::to_card_dto).collect(),
            summary: domain.summary,
        }
    }
}
