//! Login attempt validation.
//!
//! Mirrors the registration rules where they overlap: the email pattern and
//! the password strength rule are shared with [`super::registration`], but a
//! login failure collapses every format problem into one generic message so
//! the form never reveals which field was wrong.

use std::fmt;

use super::user::{Email, Password};

/// Validation errors for a login attempt, in priority order.
///
/// `Display` renders the exact message re-rendered on the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Either field was empty.
    Blank,
    /// Email or password fails its format rule.
    Format,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => f.write_str("Email/password cant be blank"),
            Self::Format => f.write_str("Email/Password format is incorrect"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Raw login form fields, exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub email: String,
    pub password: String,
}

impl LoginAttempt {
    /// Run the login format rules in priority order.
    ///
    /// Blankness of either field is checked first, then the email pattern,
    /// then the password strength rule. The store lookup itself is the
    /// calling handler's responsibility; its result only matters once these
    /// checks pass.
    pub fn validate(&self) -> Result<(), LoginValidationError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(LoginValidationError::Blank);
        }
        Email::new(self.email.clone()).map_err(|_| LoginValidationError::Format)?;
        Password::new(self.password.clone()).map_err(|_| LoginValidationError::Format)?;
        Ok(())
    }
}
