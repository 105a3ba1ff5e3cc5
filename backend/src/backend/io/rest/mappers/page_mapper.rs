use super::child_mapper::ChildMapper;
use super::dashboard_mapper::DashboardMapper;
use super::postcard_mapper::PostcardMapper;
use crate::backend::domain::page_service::{DashboardPage, PostcardPage, ProfilePage};
use shared::{DashboardPageProps, Page, PostcardPageProps, ProfilePageProps};

pub struct PageMapper;

impl PageMapper {
    /// Map the props of a found page; not-found pages pass through unchanged
    pub fn map_page<T, U>(page: Page<T>, map: impl FnOnce(T) -> U) -> Page<U> {
        match page {
            Page::Found { props } => Page::Found { props: map(props) },
            Page::NotFound { title, description } => Page::NotFound { title, description },
        }
    }

    pub fn to_dashboard_props(domain: DashboardPage) -> DashboardPageProps {
        DashboardPageProps {
            child: ChildMapper::to_profile_dto(domain.profile),
            dashboard: DashboardMapper::to_dto(domain.dashboard),
            stat_cards: domain.stat_cards,
            milestone_summary: domain.milestone_summary,
        }
    }

    pub fn to_profile_props(domain: ProfilePage) -> ProfilePageProps {
        ProfilePageProps {
            child: ChildMapper::to_profile_dto(domain.profile),
            dashboard: DashboardMapper::to_dto(domain.dashboard),
            member_since: domain.member_since,
        }
    }

    pub fn to_postcard_props(domain: PostcardPage) -> PostcardPageProps {
        PostcardPageProps {
            postcard: PostcardMapper::to_view_dto(domain.postcard),
        }
    }
}
