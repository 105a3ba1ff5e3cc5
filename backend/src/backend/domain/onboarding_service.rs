//! Four-step signup: parent email, child, theme, mailing address.
//!
//! Each step reports field-level German messages keyed by the request's
//! camelCase field names (`mailingAddress.street` for nested fields).
//! Submitting validates every step and returns the account that would be
//! created; nothing is stored.

use chrono::NaiveDate;
use shared::{OnboardingRequest, Theme};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::auth_service::is_valid_email;
use super::clock::Clock;
use super::errors::{DomainResult, ValidationErrors};
use super::models::child::Child;
use super::models::user::User;
use crate::backend::storage::{Operation, SimulatedLatency};

pub const STEP_COUNT: u8 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingResult {
    pub user: User,
    pub child: Child,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Field errors for one step. Steps are numbered from 1.
pub fn validate_step(step: u8, request: &OnboardingRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    match step {
        1 => {
            if is_blank(&request.parent_email) {
                errors.add("parentEmail", "E-Mail ist erforderlich");
            } else if !is_valid_email(&request.parent_email) {
                errors.add("parentEmail", "Ungültige E-Mail-Adresse");
            }
        }
        2 => {
            if is_blank(&request.child_name) {
                errors.add("childName", "Name ist erforderlich");
            }
            if is_blank(&request.child_birth_date) {
                errors.add("childBirthDate", "Geburtsdatum ist erforderlich");
            } else if parse_birth_date(&request.child_birth_date).is_none() {
                errors.add("childBirthDate", "Ungültiges Geburtsdatum");
            }
        }
        3 => {
            if is_blank(&request.selected_theme) {
                errors.add("selectedTheme", "Bitte wähle ein Thema aus");
            } else if Theme::from_id(request.selected_theme.trim()).is_none() {
                errors.add("selectedTheme", "Unbekanntes Thema");
            }
        }
        4 => {
            let address = &request.mailing_address;
            if is_blank(&address.street) {
                errors.add("mailingAddress.street", "Straße ist erforderlich");
            }
            if is_blank(&address.city) {
                errors.add("mailingAddress.city", "Stadt ist erforderlich");
            }
            if is_blank(&address.postal_code) {
                errors.add("mailingAddress.postalCode", "PLZ ist erforderlich");
            }
        }
        _ => errors.add("step", "Unbekannter Schritt"),
    }

    errors.into_result()
}

/// Field errors of every step combined
pub fn validate_all(request: &OnboardingRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for step in 1..=STEP_COUNT {
        if let Err(step_errors) = validate_step(step, request) {
            errors.merge(step_errors);
        }
    }
    errors.into_result()
}

#[derive(Clone)]
pub struct OnboardingService {
    clock: Arc<dyn Clock>,
    latency: SimulatedLatency,
}

impl OnboardingService {
    pub fn new(clock: Arc<dyn Clock>, latency: SimulatedLatency) -> Self {
        Self { clock, latency }
    }

    pub fn validate_step(&self, step: u8, request: &OnboardingRequest) -> DomainResult<()> {
        validate_step(step, request)?;
        Ok(())
    }

    pub async fn submit(&self, request: &OnboardingRequest) -> DomainResult<OnboardingResult> {
        validate_all(request)?;
        self.latency.wait(Operation::Register).await;

        let birth_date = parse_birth_date(&request.child_birth_date)
            .ok_or_else(|| ValidationErrors::single("childBirthDate", "Ungültiges Geburtsdatum"))?;
        let theme = Theme::from_id(request.selected_theme.trim())
            .ok_or_else(|| ValidationErrors::single("selectedTheme", "Unbekanntes Thema"))?;

        let now = self.clock.now();
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: request.parent_email.clone(),
            name: None,
            created_at: now,
            is_verified: false,
        };
        let child = Child {
            id: Uuid::new_v4().to_string(),
            parent_id: user.id.clone(),
            name: request.child_name.trim().to_string(),
            birth_date,
            gender: request.child_gender,
            favorite_color: String::new(),
            favorite_theme: theme.name().to_string(),
            created_at: now,
            updated_at: now,
        };

        info!("Onboarding completed for {} with child {}", user.email, child.name);

        Ok(OnboardingResult { user, child })
    }
}
