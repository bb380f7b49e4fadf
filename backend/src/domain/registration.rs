//! Registration request validation.
//!
//! Keep inbound payload parsing outside the domain by exposing a validator
//! that checks raw form strings before a handler talks to the user store.
//! The rules run in a fixed priority order and short-circuit on the first
//! violation; that order is a design contract, not an accident.

use std::fmt;

use super::user::{Email, EmailError, Password, PasswordError, UserName, UserNameError};

/// Raw registration form fields, exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub password2: String,
}

/// First violated registration rule, in priority order.
///
/// `Display` renders the exact message re-rendered on the registration form.
/// The final two variants are produced by handler orchestration against the
/// user store; [`RegistrationRequest::validate`] never returns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    /// Rule 1: the two password fields differ.
    PasswordMismatch,
    /// Rule 2: email was empty.
    EmailEmpty,
    /// Rule 3: email fails the simplified RFC 5322 pattern.
    EmailFormat,
    /// Rule 4: password shorter than the minimum length.
    PasswordTooShort,
    /// Rule 5: password lacks an uppercase, lowercase, or special character.
    PasswordTooWeak,
    /// Rule 6: name length out of range.
    NameLength,
    /// Rule 7: name contains a disallowed character.
    NameCharacters,
    /// Rule 8: name starts or ends with a space.
    NameSpacing,
    /// Rule 9: another user already owns this email.
    EmailTaken,
    /// Rule 9: the store rejected the new user.
    StoreFailed,
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::PasswordMismatch => "The passwords do not match",
            Self::EmailEmpty => "Email format error",
            Self::EmailFormat => "Email not in RFC5322 format",
            Self::PasswordTooShort => "Password not long enough",
            Self::PasswordTooWeak => "Password is not strong enough",
            Self::NameLength => "Name length formatting error",
            Self::NameCharacters => "Name contains special characters",
            Self::NameSpacing => "Spacing error in name",
            Self::EmailTaken => "This email has already been used",
            Self::StoreFailed => "Failed to store user info.",
        };
        f.write_str(message)
    }
}

impl std::error::Error for RegistrationError {}

impl From<EmailError> for RegistrationError {
    fn from(err: EmailError) -> Self {
        match err {
            EmailError::Empty => Self::EmailEmpty,
            EmailError::Format => Self::EmailFormat,
        }
    }
}

impl From<PasswordError> for RegistrationError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::TooShort => Self::PasswordTooShort,
            PasswordError::TooWeak => Self::PasswordTooWeak,
        }
    }
}

impl From<UserNameError> for RegistrationError {
    fn from(err: UserNameError) -> Self {
        match err {
            UserNameError::Length => Self::NameLength,
            UserNameError::Characters => Self::NameCharacters,
            UserNameError::EdgeSpace => Self::NameSpacing,
        }
    }
}

/// Fully validated registration output, ready for the user store.
#[derive(Debug, Clone)]
pub struct NewUser {
    email: Email,
    name: UserName,
    password: Password,
}

impl NewUser {
    /// Account identity.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Display name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Login secret.
    pub fn password(&self) -> &Password {
        &self.password
    }
}

impl RegistrationRequest {
    /// Run the pure registration rules (1-8) in priority order.
    ///
    /// Returns the validated [`NewUser`] or the first violated rule. The
    /// store-backed rules (duplicate email, store failure) are the calling
    /// handler's responsibility.
    pub fn validate(&self) -> Result<NewUser, RegistrationError> {
        if self.password != self.password2 {
            return Err(RegistrationError::PasswordMismatch);
        }
        let email = Email::new(self.email.clone())?;
        let password = Password::new(self.password.clone())?;
        let name = UserName::new(self.name.clone())?;
        Ok(NewUser {
            email,
            name,
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn request(email: &str, name: &str, password: &str, password2: &str) -> RegistrationRequest {
        RegistrationRequest {
            email: email.into(),
            name: name.into(),
            password: password.into(),
            password2: password2.into(),
        }
    }

    #[rstest]
    fn accepts_a_well_formed_registration() {
        let new_user = request("ab@cd.com", "Alice", "Abcde1!", "Abcde1!")
            .validate()
            .expect("registration should validate");
        assert_eq!(new_user.email().as_str(), "ab@cd.com");
        assert_eq!(new_user.name().as_str(), "Alice");
        assert_eq!(new_user.password().as_str(), "Abcde1!");
    }

    /// A password mismatch outranks every other violation, even when all
    /// remaining fields are also invalid.
    #[rstest]
    fn password_mismatch_is_reported_first() {
        let err = request("not-an-email", "x", "a", "b")
            .validate()
            .expect_err("mismatch must fail");
        assert_eq!(err, RegistrationError::PasswordMismatch);
    }

    #[rstest]
    #[case(request("", "Alice", "Abcde1!", "Abcde1!"), RegistrationError::EmailEmpty)]
    #[case(request("abcd.com", "Alice", "Abcde1!", "Abcde1!"), RegistrationError::EmailFormat)]
    #[case(request("ab@cd.info", "Alice", "Abcde1!", "Abcde1!"), RegistrationError::EmailFormat)]
    #[case(request("ab@cd.com", "Alice", "Ab!1", "Ab!1"), RegistrationError::PasswordTooShort)]
    #[case(request("ab@cd.com", "Alice", "abcdef1", "abcdef1"), RegistrationError::PasswordTooWeak)]
    #[case(request("ab@cd.com", "Al", "Abcde1!", "Abcde1!"), RegistrationError::NameLength)]
    #[case(
        request("ab@cd.com", "a name well over twenty characters", "Abcde1!", "Abcde1!"),
        RegistrationError::NameLength
    )]
    #[case(request("ab@cd.com", "Al!ce", "Abcde1!", "Abcde1!"), RegistrationError::NameCharacters)]
    #[case(request("ab@cd.com", " Alice", "Abcde1!", "Abcde1!"), RegistrationError::NameSpacing)]
    #[case(request("ab@cd.com", "Alice ", "Abcde1!", "Abcde1!"), RegistrationError::NameSpacing)]
    fn reports_the_first_violated_rule(
        #[case] request: RegistrationRequest,
        #[case] expected: RegistrationError,
    ) {
        let err = request.validate().expect_err("request must fail");
        assert_eq!(err, expected);
    }

    /// Email rules outrank password rules, which outrank name rules.
    #[rstest]
    #[case(request("abcd.com", "x", "a", "a"), RegistrationError::EmailFormat)]
    #[case(request("ab@cd.com", "x", "a", "a"), RegistrationError::PasswordTooShort)]
    #[case(request("ab@cd.com", "x", "Abcde1!", "Abcde1!"), RegistrationError::NameLength)]
    fn rule_priority_is_stable(
        #[case] request: RegistrationRequest,
        #[case] expected: RegistrationError,
    ) {
        let err = request.validate().expect_err("request must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn messages_match_the_form_copy() {
        assert_eq!(
            RegistrationError::PasswordMismatch.to_string(),
            "The passwords do not match"
        );
        assert_eq!(
            RegistrationError::EmailTaken.to_string(),
            "This email has already been used"
        );
        assert_eq!(
            RegistrationError::StoreFailed.to_string(),
            "Failed to store user info."
        );
    }
}
