//! Dashboard quick actions. Each action only produces a notification for the
//! client to show; no data changes.

use serde::{Deserialize, Serialize};
use shared::Notification;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuickAction {
    MilestoneSelected,
    SuccessReported,
    PostcardOrdered,
}

impl QuickAction {
    pub fn id(&self) -> &'static str {
        match self {
            QuickAction::MilestoneSelected => "milestone-selected",
            QuickAction::SuccessReported => "success-reported",
            QuickAction::PostcardOrdered => "postcard-ordered",
        }
    }

    pub fn notification(&self) -> Notification {
        let (title, message) = match self {
            QuickAction::MilestoneSelected => (
                "Meilenstein ausgewählt!",
                "Du kannst hier später Fortschritte markieren.",
            ),
            QuickAction::SuccessReported => (
                "🎉 Erfolg gemeldet!",
                "Toll gemacht! Der Fortschritt wurde gespeichert.",
            ),
            QuickAction::PostcardOrdered => (
                "📮 Postkarte bestellt!",
                "Eine neue Überraschung ist unterwegs!",
            ),
        };
        Notification {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("unknown quick action: {0}")]
pub struct UnknownQuickAction(pub String);

impl FromStr for QuickAction {
    type Err = UnknownQuickAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            QuickAction::MilestoneSelected,
            QuickAction::SuccessReported,
            QuickAction::PostcardOrdered,
        ]
        .into_iter()
        .find(|action| action.id() == s)
        .ok_or_else(|| UnknownQuickAction(s.to_string()))
    }
}
