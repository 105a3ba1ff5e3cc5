use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::TimelineEntryType;

/// Append-only record of something that happened for a child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: String,
    pub child_id: String,
    pub date: DateTime<Utc>,
    pub entry_type: TimelineEntryType,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub postcard_id: Option<String>,
}
