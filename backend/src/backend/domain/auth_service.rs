//! Demo authentication. One configured credential pair can log in;
//! registration returns a new unverified user without storing it.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use super::clock::Clock;
use super::errors::{DomainResult, ValidationErrors};
use super::models::user::User;
use crate::backend::storage::{DataStore, Operation, SimulatedLatency};

/// Email and password accepted by the demo login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoCredentials {
    pub email: String,
    pub password: String,
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self {
            email: "mama@example.de".to_string(),
            password: "test123".to_string(),
        }
    }
}

/// `local@domain.tld` shape: exactly one `@`, no whitespace, and a dot in the
/// domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let allowed = |part: &str| !part.is_empty() && !part.chars().any(|c| c == '@' || c.is_whitespace());
    if !allowed(local) || !allowed(domain) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn DataStore>,
    clock: Arc<dyn Clock>,
    credentials: DemoCredentials,
    latency: SimulatedLatency,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn DataStore>,
        clock: Arc<dyn Clock>,
        credentials: DemoCredentials,
        latency: SimulatedLatency,
    ) -> Self {
        Self {
            store,
            clock,
            credentials,
            latency,
        }
    }

    /// The user behind the demo credentials, `None` for any other pair
    pub async fn authenticate_user(&self, email: &str, password: &str) -> DomainResult<Option<User>> {
        self.latency.wait(Operation::Login).await;

        if email != self.credentials.email || password != self.credentials.password {
            warn!("Login rejected for {}", email);
            return Ok(None);
        }

        let user = self.store.find_user_by_email(email).await?;
        match &user {
            Some(user) => info!("Login succeeded for user {}", user.id),
            None => warn!("Demo credentials match but no user record exists for {}", email),
        }
        Ok(user)
    }

    /// A fresh unverified account for the email. Nothing is stored.
    pub async fn register_user(&self, email: &str) -> DomainResult<User> {
        self.latency.wait(Operation::Register).await;

        if !is_valid_email(email) {
            return Err(ValidationErrors::single("email", "Ungültige E-Mail-Adresse").into());
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: None,
            created_at: self.clock.now(),
            is_verified: false,
        };
        info!("Registered user {} for {}", user.id, user.email);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::errors::DomainError;
    use crate::backend::domain::test_support::{seed_clock, seeded_store};

    fn setup_test() -> AuthService {
        AuthService::new(
            seeded_store(),
            seed_clock(),
            DemoCredentials::default(),
            SimulatedLatency::disabled(),
        )
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("mama@example.de"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("a@.b.c"));
        assert!(!is_valid_email("mama"));
        assert!(!is_valid_email("mama@example"));
        assert!(!is_valid_email("mama@example."));
        assert!(!is_valid_email("@example.de"));
        assert!(!is_valid_email("ma ma@example.de"));
        assert!(!is_valid_email("mama@ex@ample.de"));
    }

    #[tokio::test]
    async fn test_login() {
        let service = setup_test();

        let user = service
            .authenticate_user("mama@example.de", "test123")
            .await
            .unwrap()
            .expect("demo login works");
        assert_eq!(user.id, "user1");

        assert!(service.authenticate_user("mama@example.de", "wrong").await.unwrap().is_none());
        assert!(service.authenticate_user("papa@example.de", "test123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_requires_exact_email() {
        let service = setup_test();

        assert!(service.authenticate_user("MAMA@EXAMPLE.DE", "test123").await.unwrap().is_none());
        assert!(service.authenticate_user("Mama@example.de", "test123").await.unwrap().is_none());
        assert!(service.authenticate_user("  mama@example.de ", "test123").await.unwrap().is_none());
        assert!(service.authenticate_user("mama@example.de", " test123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_configured_credentials() {
        let credentials = DemoCredentials {
            email: "papa@example.de".to_string(),
            password: "geheim".to_string(),
        };
        let service = AuthService::new(
            seeded_store(),
            seed_clock(),
            credentials,
            SimulatedLatency::disabled(),
        );

        assert!(service.authenticate_user("mama@example.de", "test123").await.unwrap().is_none());
        // No user record for papa in the seed data
        assert!(service.authenticate_user("papa@example.de", "geheim").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_register() {
        let service = setup_test();

        let first = service.register_user("neu@example.de").await.unwrap();
        let second = service.register_user("neu@example.de").await.unwrap();
        assert_eq!(first.email, "neu@example.de");
        assert!(!first.is_verified);
        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, seed_clock().now());

        assert!(service.register_user(" neu@example.de").await.is_err());
        let error = service.register_user("kaputt").await.unwrap_err();
        match error {
            DomainError::Validation(errors) => {
                assert_eq!(errors.get("email"), Some("Ungültige E-Mail-Adresse"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
