use super::{date_to_wire, timestamp_to_wire};
use crate::backend::domain::child_service::ChildProfile as DomainChildProfile;
use crate::backend::domain::models::child::Child as DomainChild;
use shared::{Child as SharedChild, ChildListResponse, ChildProfile as SharedChildProfile};

/// Mapper to convert domain children to shared Child DTOs.
pub struct ChildMapper;

impl ChildMapper {
    pub fn to_dto(domain: DomainChild) -> SharedChild {
        SharedChild {
            id: domain.id,
            parent_id: domain.parent_id,
            name: domain.name,
            birth_date: date_to_wire(domain.birth_date),
            gender: domain.gender,
            favorite_color: domain.favorite_color,
            favorite_theme: domain.favorite_theme,
            created_at: timestamp_to_wire(domain.created_at),
            updated_at: timestamp_to_wire(domain.updated_at),
        }
    }

    pub fn to_child_list_dto(domain_children: Vec<DomainChild>) -> ChildListResponse {
        ChildListResponse {
            children: domain_children.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_profile_dto(domain: DomainChildProfile) -> SharedChildProfile {
        SharedChildProfile {
            child: Self::to_dto(domain.child),
            age_label: domain.age_label,
            theme_emoji: domain.theme_emoji.to_string(),
        }
    }
}
