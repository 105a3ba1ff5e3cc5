use super::timestamp_to_wire;
use crate::backend::domain::models::timeline::TimelineEntry as DomainTimelineEntry;
use shared::TimelineEntry as SharedTimelineEntry;

pub struct TimelineMapper;

impl TimelineMapper {
    /// The child id is a storage key and stays off the wire
    pub fn to_dto(domain: DomainTimelineEntry) -> SharedTimelineEntry {
        SharedTimelineEntry {
            id: domain.id,
            date: timestamp_to_wire(domain.date),
            entry_type: domain.entry_type,
            title: domain.title,
            description: domain.description,
            icon: domain.icon,
            postcard_id: domain.postcard_id,
        }
    }
}
