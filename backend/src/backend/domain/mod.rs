//! # Domain Module
//!
//! Business logic of the letterbox dashboard: milestone progress, postcard
//! shipping, the progress timeline and the page-level read models built from
//! them. Services read through the storage traits and never write.
//!
//! ## Module Organization
//!
//! - **models**: Domain entities with real date types
//! - **errors**: `DomainError` and field-level `ValidationErrors`
//! - **age** / **formatting**: German age and date captions
//! - **streak**: Consecutive days with timeline activity
//! - **child_service**: Child lookups and profile headers
//! - **milestone_service**: Category badges, stage summary, milestone board
//! - **postcard_service**: Postcards, postcard contents and the postcard view
//! - **dashboard_service**: Aggregated dashboard for one child
//! - **auth_service**: Demo login and registration
//! - **onboarding_service**: Step-by-step signup validation
//! - **quick_actions**: Notifications for the dashboard quick actions
//! - **page_service**: Found/not-found props for the dashboard, profile and postcard pages
//!
//! ## Business Rules
//!
//! - A completed milestone has a completion date and 100% progress
//! - Postcards only move forward through planned, approved, printed, shipped, delivered
//! - Every postcard is either delivered or upcoming
//! - Milestones are listed basic first, then advanced, then special
//! - The timeline is shown newest first

pub mod models;
pub mod errors;
pub mod clock;
pub mod age;
pub mod formatting;
pub mod streak;
pub mod child_service;
pub mod milestone_service;
pub mod postcard_service;
pub mod dashboard_service;
pub mod auth_service;
pub mod onboarding_service;
pub mod quick_actions;
pub mod page_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth_service::{AuthService, DemoCredentials};
pub use child_service::ChildService;
pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard_service::DashboardService;
pub use errors::{DomainError, DomainResult, ValidationErrors};
pub use milestone_service::MilestoneService;
pub use onboarding_service::OnboardingService;
pub use page_service::PageService;
pub use postcard_service::PostcardService;
pub use quick_actions::QuickAction;
