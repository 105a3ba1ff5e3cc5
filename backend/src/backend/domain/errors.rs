//! Error taxonomy shared by all domain services.
//!
//! - `NotFound`: a referenced id has no matching record
//! - `DataUnavailable`: the storage layer itself failed
//! - `Validation`: input failed field-level checks

use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("data unavailable: {0}")]
    DataUnavailable(#[source] anyhow::Error),
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Storage errors surface as `DataUnavailable`
impl From<anyhow::Error> for DomainError {
    fn from(error: anyhow::Error) -> Self {
        DomainError::DataUnavailable(error)
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation(errors)
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Ordered map of form field name to a user-facing message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Record a message for a field. The first message per field wins.
    pub fn add(&mut self, field: &str, message: &str) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, message) in other.fields {
            self.fields.entry(field).or_insert(message);
        }
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.fields
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
