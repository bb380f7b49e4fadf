//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! one domain-friendly concept: the identity of the logged-in user. The
//! session holds exactly one key, mapping to that user's email string.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Email, Error};

pub(crate) const IDENTITY_KEY: &str = "logged_in";

/// Newtype wrapper exposing identity operations over the cookie session.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated user's email in the session cookie.
    pub fn persist_identity(&self, email: &Email) -> Result<(), Error> {
        self.0
            .insert(IDENTITY_KEY, email.as_str())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the current identity from the session, if present.
    ///
    /// A stored value that no longer parses as an email is treated as
    /// anonymous rather than an error; the cookie is signed, so this only
    /// happens across validation-rule changes.
    pub fn identity(&self) -> Result<Option<Email>, Error> {
        let raw = self
            .0
            .get::<String>(IDENTITY_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        match raw {
            Some(raw) => match Email::new(raw) {
                Ok(email) => Ok(Some(email)),
                Err(error) => {
                    tracing::warn!("invalid identity in session cookie: {error}");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Drop the identity key, returning the session to anonymous.
    pub fn clear_identity(&self) {
        self.0.remove(IDENTITY_KEY);
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
