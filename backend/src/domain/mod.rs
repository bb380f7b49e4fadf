//! Domain primitives and rules.
//!
//! Purpose: define the strongly typed records and validation rules used by
//! the HTTP adapter, and the ports it reaches persistence through. Keep
//! types immutable and document invariants in each type's Rustdoc.
//!
//! Public surface:
//! - `Email`, `UserName`, `Password` — validated field newtypes.
//! - `User`, `Ticket` — records rendered by the pages.
//! - `RegistrationRequest` / `RegistrationError` — ordered registration rules.
//! - `LoginAttempt` / `LoginValidationError` — ordered login rules.
//! - `Error` / `ErrorCode` — transport-agnostic infrastructure error payload.
//! - `ports` — user store and ticket catalogue edges plus in-memory adapters.

pub mod auth;
pub mod error;
pub mod ports;
pub mod registration;
pub mod ticket;
pub mod user;

pub use self::auth::{LoginAttempt, LoginValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::registration::{NewUser, RegistrationError, RegistrationRequest};
pub use self::ticket::Ticket;
pub use self::user::{Email, EmailError, Password, PasswordError, User, UserName, UserNameError};

/// Convenient API result alias.
pub type ApiResult<T> = Result<T, Error>;
