use super::child_mapper::ChildMapper;
use super::date_to_wire;
use crate::backend::domain::models::postcard::{
    Postcard as DomainPostcard, PostcardContent as DomainPostcardContent,
};
use crate::backend::domain::postcard_service::PostcardView as DomainPostcardView;
use shared::{
    Postcard as SharedPostcard, PostcardContent as SharedPostcardContent, PostcardListResponse,
    PostcardView as SharedPostcardView,
};

pub struct PostcardMapper;

impl PostcardMapper {
    pub fn to_dto(domain: DomainPostcard) -> SharedPostcard {
        SharedPostcard {
            id: domain.id,
            child_id: domain.child_id,
            content_id: domain.content_id,
            status: domain.status,
            planned_shipping_date: date_to_wire(domain.planned_shipping_date),
            actual_shipping_date: domain.actual_shipping_date.map(date_to_wire),
            tracking_number: domain.tracking_number,
            estimated_delivery: domain.estimated_delivery.map(date_to_wire),
            parent_reaction: domain.parent_reaction,
            child_reaction: domain.child_reaction,
        }
    }

    pub fn to_list_dto(domain_postcards: Vec<DomainPostcard>) -> PostcardListResponse {
        PostcardListResponse {
            postcards: domain_postcards.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_content_dto(domain: DomainPostcardContent) -> SharedPostcardContent {
        SharedPostcardContent {
            id: domain.id,
            milestone_id: domain.milestone_id,
            child_id: domain.child_id,
            title: domain.title,
            message: domain.message,
            illustration: domain.illustration,
            is_personalized: domain.is_personalized,
            status: domain.status,
            parent_feedback: domain.parent_feedback,
        }
    }

    pub fn to_view_dto(domain: DomainPostcardView) -> SharedPostcardView {
        SharedPostcardView {
            content: Self::to_content_dto(domain.content),
            child: ChildMapper::to_dto(domain.child),
            status_label: domain.status_label.to_string(),
        }
    }
}
