//! Authentication guard for session-gated pages.
//!
//! The guard is an explicit function returning a discriminated outcome, not
//! a handler wrapper: each protected handler calls it first and decides what
//! an unauthorized visitor sees (always a redirect to the login form here).

use crate::domain::ports::UserStore;
use crate::domain::{ApiResult, User};

use super::session::SessionContext;

/// Result of running the guard against the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The session identity resolved to a known user.
    Authorized(User),
    /// No identity, or an identity the store no longer recognises.
    Unauthorized,
}

/// Resolve the session identity to a user record.
///
/// - No identity in the session: [`AuthOutcome::Unauthorized`] without
///   consulting the store.
/// - Identity present but unknown to the store (stale cookie): the identity
///   key is purged and the visitor is treated as anonymous.
pub async fn authorize(
    session: &SessionContext,
    users: &dyn UserStore,
) -> ApiResult<AuthOutcome> {
    let Some(email) = session.identity()? else {
        return Ok(AuthOutcome::Unauthorized);
    };
    match users.get(&email).await {
        Some(user) => Ok(AuthOutcome::Authorized(user)),
        None => {
            tracing::warn!(email = %email, "session identity no longer resolves; clearing");
            session.clear_identity();
            Ok(AuthOutcome::Unauthorized)
        }
    }
}
