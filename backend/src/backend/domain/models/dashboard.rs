use shared::PostcardStatus;

use super::milestone::Milestone;
use super::postcard::Postcard;
use super::timeline::TimelineEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_postcards: u32,
    pub delivered_postcards: u32,
    pub upcoming_postcards: u32,
    pub current_streak: u32,
}

impl DashboardStats {
    /// Postcard counts for one child. Every postcard is either delivered or upcoming.
    pub fn from_postcards(postcards: &[Postcard], current_streak: u32) -> Self {
        let delivered = postcards
            .iter()
            .filter(|p| p.status == PostcardStatus::Delivered)
            .count() as u32;
        let upcoming = postcards.iter().filter(|p| p.status.is_upcoming()).count() as u32;
        Self {
            total_postcards: postcards.len() as u32,
            delivered_postcards: delivered,
            upcoming_postcards: upcoming,
            current_streak,
        }
    }
}

/// Read model for one child's dashboard. Computed on every load, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub milestones: Vec<Milestone>,
    pub timeline: Vec<TimelineEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn postcard(id: &str, status: PostcardStatus) -> Postcard {
        Postcard {
            id: id.to_string(),
            child_id: "1".to_string(),
            content_id: id.to_string(),
            status,
            planned_shipping_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            actual_shipping_date: None,
            tracking_number: None,
            estimated_delivery: None,
            parent_reaction: None,
            child_reaction: None,
        }
    }

    #[test]
    fn test_counts_partition_postcards() {
        let postcards = vec![
            postcard("1", PostcardStatus::Delivered),
            postcard("2", PostcardStatus::Planned),
            postcard("3", PostcardStatus::Approved),
            postcard("4", PostcardStatus::Shipped),
            postcard("5", PostcardStatus::Delivered),
        ];
        let stats = DashboardStats::from_postcards(&postcards, 4);

        assert_eq!(stats.total_postcards, 5);
        assert_eq!(stats.delivered_postcards, 2);
        assert_eq!(stats.upcoming_postcards, 3);
        assert_eq!(stats.current_streak, 4);
    }

    #[test]
    fn test_no_postcards() {
        assert_eq!(DashboardStats::from_postcards(&[], 0), DashboardStats::default());
    }

    fn arb_status() -> impl Strategy<Value = PostcardStatus> {
        prop_oneof![
            Just(PostcardStatus::Planned),
            Just(PostcardStatus::Approved),
            Just(PostcardStatus::Printed),
            Just(PostcardStatus::Shipped),
            Just(PostcardStatus::Delivered),
        ]
    }

    proptest! {
        #[test]
        fn prop_delivered_and_upcoming_cover_total(
            statuses in prop::collection::vec(arb_status(), 0..40),
            streak in 0u32..60,
        ) {
            let postcards: Vec<Postcard> = statuses
                .iter()
                .enumerate()
                .map(|(i, status)| postcard(&i.to_string(), *status))
                .collect();
            let stats = DashboardStats::from_postcards(&postcards, streak);

            prop_assert!(stats.delivered_postcards + stats.upcoming_postcards <= stats.total_postcards);
            prop_assert_eq!(stats.delivered_postcards + stats.upcoming_postcards, stats.total_postcards);
            prop_assert_eq!(stats.total_postcards as usize, statuses.len());
            prop_assert_eq!(stats.current_streak, streak);
        }
    }
}
