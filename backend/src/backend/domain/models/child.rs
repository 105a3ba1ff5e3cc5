use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{Gender, Theme};

/// A child owned by exactly one parent account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub parent_id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub favorite_color: String,
    /// German theme name, e.g. "Prinzessin"
    pub favorite_theme: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Child {
    /// Emoji for the child's favorite theme, a star for anything unknown
    pub fn theme_emoji(&self) -> &'static str {
        Theme::from_name(&self.favorite_theme)
            .map(|theme| theme.emoji())
            .unwrap_or("⭐")
    }
}
