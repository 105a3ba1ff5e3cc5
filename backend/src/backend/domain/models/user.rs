use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A parent account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_verified: bool,
}
