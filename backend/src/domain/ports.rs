//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the marketplace core expects to interact with driven
//! adapters (user persistence, the ticket catalogue). Each trait exposes
//! strongly typed errors so adapters map their failures into predictable
//! variants instead of returning `anyhow::Result`. In-memory adapters back
//! the default wiring and the test suites.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use thiserror::Error;

use super::ticket::Ticket;
use super::user::{Email, Password, User, UserName};

/// Errors surfaced by the user store when persisting a registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserStoreError {
    /// Another user already owns this email.
    #[error("a user with email {email} already exists")]
    Duplicate { email: String },
    /// Catch-all for write failures that bubble up from the adapter.
    #[error("user store write failed: {message}")]
    Write { message: String },
}

impl UserStoreError {
    /// Helper for duplicate-identity conflicts.
    pub fn duplicate(email: impl Into<String>) -> Self {
        Self::Duplicate {
            email: email.into(),
        }
    }

    /// Helper for write failures.
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }
}

/// Persistence port for user accounts.
///
/// `login` takes raw strings: the login handler performs its lookup before
/// the format checks are evaluated, so validated types are not yet available
/// at the call site.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch the user registered under `email`, if any.
    async fn get(&self, email: &Email) -> Option<User>;

    /// Persist a new user. Fails when the email is already taken or the
    /// underlying storage rejects the write.
    async fn register(
        &self,
        email: &Email,
        name: &UserName,
        password: &Password,
    ) -> Result<(), UserStoreError>;

    /// Resolve a user by credentials. `None` covers both unknown emails and
    /// wrong passwords.
    async fn login(&self, email: &str, password: &str) -> Option<User>;
}

/// Read-only port for ticket listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketCatalogue: Send + Sync {
    /// All current listings, in catalogue order.
    async fn all(&self) -> Vec<Ticket>;
}

struct StoredUser {
    user: User,
    password: Password,
}

/// In-memory [`UserStore`] keyed by email.
///
/// Backs the default wiring and the tests. Secrets are compared as provided;
/// hashing belongs to a real persistence adapter.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, StoredUser>>,
}

impl InMemoryUserStore {
    /// Construct an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get(&self, email: &Email) -> Option<User> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.get(email.as_str()).map(|entry| entry.user.clone())
    }

    async fn register(
        &self,
        email: &Email,
        name: &UserName,
        password: &Password,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        if users.contains_key(email.as_str()) {
            return Err(UserStoreError::duplicate(email.as_str()));
        }
        users.insert(
            email.as_str().to_owned(),
            StoredUser {
                user: User::new(email.clone(), name.clone()),
                password: password.clone(),
            },
        );
        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> Option<User> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users
            .get(email)
            .filter(|entry| entry.password.as_str() == password)
            .map(|entry| entry.user.clone())
    }
}

/// Fixed ticket listings for default wiring and tests.
#[derive(Debug, Clone, Default)]
pub struct FixtureTicketCatalogue;

#[async_trait]
impl TicketCatalogue for FixtureTicketCatalogue {
    async fn all(&self) -> Vec<Ticket> {
        vec![
            Ticket::new("Opening Night", 90, 2),
            Ticket::new("Saturday Matinee", 45, 4),
        ]
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn parts() -> (Email, UserName, Password) {
        let email = Email::new("ab@cd.com").expect("valid email");
        let name = UserName::new("Alice").expect("valid name");
        let password = Password::new("Abcde1!").expect("valid password");
        (email, name, password)
    }

    #[rstest]
    #[actix_web::test]
    async fn registered_users_are_retrievable_by_email() {
        let store = InMemoryUserStore::new();
        let (email, name, password) = parts();
        store
            .register(&email, &name, &password)
            .await
            .expect("first registration succeeds");

        let user = store.get(&email).await.expect("user should exist");
        assert_eq!(user.email(), &email);
        assert_eq!(user.name(), &name);
    }

    #[rstest]
    #[actix_web::test]
    async fn duplicate_registration_is_rejected() {
        let store = InMemoryUserStore::new();
        let (email, name, password) = parts();
        store
            .register(&email, &name, &password)
            .await
            .expect("first registration succeeds");

        let err = store
            .register(&email, &name, &password)
            .await
            .expect_err("second registration must fail");
        assert_eq!(err, UserStoreError::duplicate("ab@cd.com"));
    }

    #[rstest]
    #[actix_web::test]
    async fn login_requires_matching_credentials() {
        let store = InMemoryUserStore::new();
        let (email, name, password) = parts();
        store
            .register(&email, &name, &password)
            .await
            .expect("registration succeeds");

        let user = store.login("ab@cd.com", "Abcde1!").await;
        assert!(user.is_some(), "matching credentials resolve the user");

        assert!(store.login("ab@cd.com", "Wrong1!").await.is_none());
        assert!(store.login("zz@cd.com", "Abcde1!").await.is_none());
    }

    #[rstest]
    #[actix_web::test]
    async fn fixture_catalogue_lists_tickets() {
        let catalogue = FixtureTicketCatalogue;
        let tickets = catalogue.all().await;
        assert!(!tickets.is_empty());
    }
}
