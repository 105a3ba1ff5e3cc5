use super::milestone_mapper::MilestoneMapper;
use super::timeline_mapper::TimelineMapper;
use crate::backend::domain::models::dashboard::{
    DashboardData as DomainDashboardData, DashboardStats as DomainDashboardStats,
};
use shared::{DashboardData as SharedDashboardData, DashboardStats as SharedDashboardStats};

pub struct DashboardMapper;

impl DashboardMapper {
    pub fn to_stats_dto(domain: DomainDashboardStats) -> SharedDashboardStats {
        SharedDashboardStats {
            total_postcards: domain.total_postcards,
            delivered_postcards: domain.delivered_postcards,
            upcoming_postcards: domain.upcoming_postcards,
            current_streak: domain.current_streak,
        }
    }

    pub fn to_dto(domain: DomainDashboardData) -> SharedDashboardData {
        SharedDashboardData {
            stats: Self::to_stats_dto(domain.stats),
            milestones: domain.milestones.into_iter().map(MilestoneMapper::to_dto).collect(),
            timeline: domain.timeline.into_iter().map(TimelineMapper::to_dto).collect(),
        }
    }
}
