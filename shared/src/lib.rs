use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Category of a toilet-training milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneCategory {
    Basic,
    Advanced,
    Special,
}

/// Color token used to render a category badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
    Success,
    Primary,
    Warning,
    /// Fallback gray for anything that is not a known category
    Neutral,
}

/// Shipping lifecycle of a physical postcard.
///
/// Variants are declared in lifecycle order so the derived `Ord` follows
/// `planned < approved < printed < shipped < delivered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostcardStatus {
    Planned,
    Approved,
    Printed,
    Shipped,
    Delivered,
}

/// Review state of the personalized postcard text and illustration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Preview,
    Approved,
    Rejected,
}

/// Kind of event shown on the progress timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineEntryType {
    Milestone,
    Postcard,
    Reaction,
    Progress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[serde(rename = "mädchen")]
    Maedchen,
    Junge,
}

/// Postcard illustration themes a child can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Princess,
    Dinosaur,
    Space,
    Animals,
    Cars,
    Flowers,
}

impl MilestoneCategory {
    /// Position of the category in the milestone list
    pub fn rank(&self) -> u8 {
        match self {
            MilestoneCategory::Basic => 0,
            MilestoneCategory::Advanced => 1,
            MilestoneCategory::Special => 2,
        }
    }

    pub fn color(&self) -> CategoryColor {
        match self {
            MilestoneCategory::Basic => CategoryColor::Success,
            MilestoneCategory::Advanced => CategoryColor::Primary,
            MilestoneCategory::Special => CategoryColor::Warning,
        }
    }

    /// German display name
    pub fn label(&self) -> &'static str {
        match self {
            MilestoneCategory::Basic => "Grundlagen",
            MilestoneCategory::Advanced => "Fortgeschritten",
            MilestoneCategory::Special => "Besonders",
        }
    }

    /// Parse the wire name of a category. Returns `None` for anything unknown.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "basic" => Some(MilestoneCategory::Basic),
            "advanced" => Some(MilestoneCategory::Advanced),
            "special" => Some(MilestoneCategory::Special),
            _ => None,
        }
    }
}

impl PostcardStatus {
    /// Only forward moves are allowed; the lifecycle never goes back.
    pub fn can_transition_to(&self, target: PostcardStatus) -> bool {
        target > *self
    }

    /// Everything that has not reached the mailbox yet
    pub fn is_upcoming(&self) -> bool {
        *self != PostcardStatus::Delivered
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostcardStatus::Planned => "Geplant",
            PostcardStatus::Approved => "Freigegeben",
            PostcardStatus::Printed => "Gedruckt",
            PostcardStatus::Shipped => "Versendet",
            PostcardStatus::Delivered => "Zugestellt",
        }
    }
}

impl ContentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ContentStatus::Approved => "Freigegeben",
            ContentStatus::Preview => "Vorschau",
            ContentStatus::Rejected => "Abgelehnt",
            ContentStatus::Draft => "Entwurf",
        }
    }
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Princess,
        Theme::Dinosaur,
        Theme::Space,
        Theme::Animals,
        Theme::Cars,
        Theme::Flowers,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Theme::Princess => "princess",
            Theme::Dinosaur => "dinosaur",
            Theme::Space => "space",
            Theme::Animals => "animals",
            Theme::Cars => "cars",
            Theme::Flowers => "flowers",
        }
    }

    /// German name as stored on a child's profile
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Princess => "Prinzessin",
            Theme::Dinosaur => "Dinosaurier",
            Theme::Space => "Weltraum",
            Theme::Animals => "Tiere",
            Theme::Cars => "Autos",
            Theme::Flowers => "Blumen",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Theme::Princess => "👑",
            Theme::Dinosaur => "🦕",
            Theme::Space => "🚀",
            Theme::Animals => "🐻",
            Theme::Cars => "🚗",
            Theme::Flowers => "🌸",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|theme| theme.id() == id)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|theme| theme.name() == name)
    }
}

impl fmt::Display for PostcardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PostcardStatus::Planned => "planned",
            PostcardStatus::Approved => "approved",
            PostcardStatus::Printed => "printed",
            PostcardStatus::Shipped => "shipped",
            PostcardStatus::Delivered => "delivered",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// RFC 3339 timestamp
    pub created_at: String,
    pub is_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: String,
    pub parent_id: String,
    pub name: String,
    /// ISO date (YYYY-MM-DD)
    pub birth_date: String,
    pub gender: Gender,
    pub favorite_color: String,
    pub favorite_theme: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: MilestoneCategory,
    pub icon: String,
    pub is_completed: bool,
    /// RFC 3339, present exactly when the milestone is completed
    pub completed_at: Option<String>,
    pub next_postcard_date: String,
    /// Percentage in 0..=100
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostcardContent {
    pub id: String,
    pub milestone_id: String,
    pub child_id: String,
    pub title: String,
    pub message: String,
    pub illustration: String,
    pub is_personalized: bool,
    pub status: ContentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_feedback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Postcard {
    pub id: String,
    pub child_id: String,
    pub content_id: String,
    pub status: PostcardStatus,
    pub planned_shipping_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_shipping_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_reaction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_reaction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: String,
    /// RFC 3339
    pub date: String,
    #[serde(rename = "type")]
    pub entry_type: TimelineEntryType,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcard_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_postcards: u32,
    pub delivered_postcards: u32,
    pub upcoming_postcards: u32,
    pub current_streak: u32,
}

/// Aggregate read model behind one child's dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub milestones: Vec<Milestone>,
    pub timeline: Vec<TimelineEntry>,
}

/// Counts for the milestone overview panel (Erreicht / In Arbeit / Geplant)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneSummary {
    pub completed: u32,
    pub in_progress: u32,
    pub planned: u32,
    pub total: u32,
    pub completion_percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBadge {
    pub color: CategoryColor,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneCard {
    pub milestone: Milestone,
    pub badge: CategoryBadge,
    /// "Erreicht am ..." or "Nächste Postkarte: ..."
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneBoard {
    pub milestones: Vec<MilestoneCard>,
    pub summary: MilestoneSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildProfile {
    pub child: Child,
    /// e.g. "2 Jahre, 10 Monate"
    pub age_label: String,
    pub theme_emoji: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildListResponse {
    pub children: Vec<Child>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostcardListResponse {
    pub postcards: Vec<Postcard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostcardView {
    pub content: PostcardContent,
    pub child: Child,
    pub status_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailingAddress {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Everything collected by the four onboarding steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    pub parent_email: String,
    pub child_name: String,
    /// ISO date (YYYY-MM-DD), empty when not yet entered
    pub child_birth_date: String,
    pub child_gender: Gender,
    /// Theme id, e.g. "princess"
    pub selected_theme: String,
    pub mailing_address: MailingAddress,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingResponse {
    pub user: User,
    pub child: Child,
}

/// Field-level validation messages keyed by form field name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Feedback for a dashboard quick action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub label: String,
    pub value: u32,
    pub icon: String,
    /// The value as shown on the card, e.g. `7 Tage` for the streak
    pub display: String,
    /// Width of the card's progress bar in percent, 0.0..=100.0, unrounded
    pub fill_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPageProps {
    pub child: ChildProfile,
    pub dashboard: DashboardData,
    pub stat_cards: Vec<StatCard>,
    pub milestone_summary: MilestoneSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePageProps {
    pub child: ChildProfile,
    pub dashboard: DashboardData,
    /// Long German date the profile was created, e.g. "15. Januar 2024"
    pub member_since: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostcardPageProps {
    pub postcard: PostcardView,
}

/// Result of a page-level data hook: either props to render or a not-found page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Page<T> {
    Found { props: T },
    NotFound { title: String, description: String },
}

impl<T> Page<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Page::Found { .. })
    }
}
