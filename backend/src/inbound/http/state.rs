//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{TicketCatalogue, UserStore};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserStore>,
    pub tickets: Arc<dyn TicketCatalogue>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::{FixtureTicketCatalogue, InMemoryUserStore};
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(InMemoryUserStore::new()),
    ///     Arc::new(FixtureTicketCatalogue),
    /// );
    /// let _users = state.users.clone();
    /// ```
    pub fn new(users: Arc<dyn UserStore>, tickets: Arc<dyn TicketCatalogue>) -> Self {
        Self { users, tickets }
    }
}
