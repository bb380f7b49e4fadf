//! User data model.
//!
//! Field formats follow the marketplace registration rules. Each newtype
//! validates on construction so a [`User`] can only hold well-formed data.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use zeroize::Zeroizing;

/// Validation errors returned by [`Email::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    /// Input was empty.
    Empty,
    /// Input does not match the simplified RFC 5322 pattern.
    Format,
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "email must not be empty"),
            Self::Format => write!(f, "email must match the simplified RFC 5322 pattern"),
        }
    }
}

impl std::error::Error for EmailError {}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Lowercase alphanumeric local part with an optional single `.` or `_`,
        // a word-character domain, and a 2-3 character TLD.
        let pattern = r"^[a-z0-9]+[._]?[a-z0-9]+@\w+\.\w{2,3}$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Account identity, unique per user.
///
/// ## Invariants
/// - Non-empty and matching the simplified RFC 5322 pattern: lowercase
///   alphanumeric local part with at most one inner `.` or `_`, `@`, a word
///   character domain, and a 2-3 character TLD.
///
/// # Examples
/// ```
/// use backend::domain::Email;
///
/// let email = Email::new("ab@cd.com").expect("valid email");
/// assert_eq!(email.as_str(), "ab@cd.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`] from raw input.
    pub fn new(value: impl Into<String>) -> Result<Self, EmailError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(EmailError::Empty);
        }
        if !email_regex().is_match(&raw) {
            return Err(EmailError::Format);
        }
        Ok(Self(raw))
    }

    /// Borrow the address as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors returned by [`UserName::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserNameError {
    /// Name is shorter than 3 or longer than 19 characters.
    Length,
    /// Name contains a character that is neither alphanumeric nor whitespace.
    Characters,
    /// Name starts or ends with a space.
    EdgeSpace,
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "name must be between 3 and 19 characters"),
            Self::Characters => write!(f, "name may only contain letters, numbers, or spaces"),
            Self::EdgeSpace => write!(f, "name must not start or end with a space"),
        }
    }
}

impl std::error::Error for UserNameError {}

/// Minimum allowed length for a user name.
pub const USER_NAME_MIN: usize = 3;
/// Maximum allowed length for a user name.
pub const USER_NAME_MAX: usize = 19;

/// Display name shown on the profile and listing pages.
///
/// ## Invariants
/// - Length between [`USER_NAME_MIN`] and [`USER_NAME_MAX`] characters.
/// - Alphanumeric characters and inner whitespace only.
/// - Never starts or ends with a space.
///
/// The checks run in a fixed order (length, then character set, then edge
/// spaces) so the first violated rule is the one reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`] from raw input.
    pub fn new(value: impl Into<String>) -> Result<Self, UserNameError> {
        let raw = value.into();
        let length = raw.chars().count();
        if length < USER_NAME_MIN || length > USER_NAME_MAX {
            return Err(UserNameError::Length);
        }
        if raw
            .chars()
            .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
        {
            return Err(UserNameError::Characters);
        }
        if raw.starts_with(' ') || raw.ends_with(' ') {
            return Err(UserNameError::EdgeSpace);
        }
        Ok(Self(raw))
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors returned by [`Password::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    /// Password is shorter than 6 characters.
    TooShort,
    /// Password lacks an uppercase letter, a lowercase letter, or a special
    /// character.
    TooWeak,
}

impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "password must be at least 6 characters"),
            Self::TooWeak => write!(
                f,
                "password must contain an uppercase letter, a lowercase letter, and a special character",
            ),
        }
    }
}

impl std::error::Error for PasswordError {}

/// Minimum allowed password length.
pub const PASSWORD_MIN: usize = 6;

/// Characters counted as "special" by the strength rule.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*+=~`-_/";

/// Login secret held in zeroizing storage.
///
/// ## Invariants
/// - At least [`PASSWORD_MIN`] characters.
/// - Contains at least one uppercase letter, one lowercase letter, and one
///   character from [`PASSWORD_SPECIALS`].
///
/// The length check runs before the strength check so a short password is
/// reported as short, never as weak. Stored-form hashing belongs to the
/// persistence adapter, not this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Validate and construct a [`Password`] from raw input.
    pub fn new(value: impl Into<String>) -> Result<Self, PasswordError> {
        let raw = Zeroizing::new(value.into());
        if raw.chars().count() < PASSWORD_MIN {
            return Err(PasswordError::TooShort);
        }
        let upper = raw.chars().any(char::is_uppercase);
        let lower = raw.chars().any(char::is_lowercase);
        let special = raw.chars().any(|c| PASSWORD_SPECIALS.contains(c));
        if !upper || !lower || !special {
            return Err(PasswordError::TooWeak);
        }
        Ok(Self(raw))
    }

    /// Secret string provided by the caller.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Application user as seen by handlers and pages.
///
/// Created only through successful registration validation; the store
/// guarantees no two users share an [`Email`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    email: Email,
    name: UserName,
}

impl User {
    /// Assemble a user from already-validated parts.
    pub fn new(email: Email, name: UserName) -> Self {
        Self { email, name }
    }

    /// Account identity.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Display name.
    pub fn name(&self) -> &UserName {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ab@cd.com")]
    #[case("a1@cd.com")]
    #[case("ab.cd@site.org")]
    #[case("ab_cd@site.ca")]
    #[case("longerlocal9@domain.net")]
    fn accepts_well_formed_emails(#[case] raw: &str) {
        let email = Email::new(raw).expect("email should be accepted");
        assert_eq!(email.as_str(), raw);
    }

    #[rstest]
    #[case("", EmailError::Empty)]
    #[case("abcd.com", EmailError::Format)]
    #[case("ab@cd.info", EmailError::Format)]
    #[case("Ab@cd.com", EmailError::Format)]
    #[case("ab..cd@site.com", EmailError::Format)]
    #[case("ab@cd", EmailError::Format)]
    #[case("ab@c.d.com", EmailError::Format)]
    fn rejects_malformed_emails(#[case] raw: &str, #[case] expected: EmailError) {
        let err = Email::new(raw).expect_err("email should be rejected");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("Bob")]
    #[case("Alice Smith")]
    #[case("user123")]
    #[case("nineteen chars long")]
    fn accepts_well_formed_names(#[case] raw: &str) {
        let name = UserName::new(raw).expect("name should be accepted");
        assert_eq!(name.as_str(), raw);
    }

    #[rstest]
    #[case("ab", UserNameError::Length)]
    #[case("exactly twenty chars", UserNameError::Length)]
    #[case("bad!name", UserNameError::Characters)]
    #[case(" padded", UserNameError::EdgeSpace)]
    #[case("padded ", UserNameError::EdgeSpace)]
    fn rejects_malformed_names(#[case] raw: &str, #[case] expected: UserNameError) {
        let err = UserName::new(raw).expect_err("name should be rejected");
        assert_eq!(err, expected);
    }

    /// A long name full of special characters still reports the length rule;
    /// the checks are ordered, not merged.
    #[rstest]
    fn name_length_rule_outranks_character_rule() {
        let err = UserName::new("!!!! far too long to pass !!!!").expect_err("invalid name");
        assert_eq!(err, UserNameError::Length);
    }

    #[rstest]
    #[case("Abcde1!")]
    #[case("Pass-word")]
    #[case("Tick3t/Hub")]
    fn accepts_strong_passwords(#[case] raw: &str) {
        let password = Password::new(raw).expect("password should be accepted");
        assert_eq!(password.as_str(), raw);
    }

    #[rstest]
    #[case("Ab!1", PasswordError::TooShort)]
    #[case("abcdef!", PasswordError::TooWeak)]
    #[case("ABCDEF!", PasswordError::TooWeak)]
    #[case("Abcdefgh", PasswordError::TooWeak)]
    #[case("Abcdef(1)", PasswordError::TooWeak)]
    fn rejects_weak_passwords(#[case] raw: &str, #[case] expected: PasswordError) {
        let err = Password::new(raw).expect_err("password should be rejected");
        assert_eq!(err, expected);
    }
}
