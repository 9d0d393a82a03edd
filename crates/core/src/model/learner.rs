use std::fmt;

use thiserror::Error;

use crate::model::ids::LearnerId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LearnerError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("password cannot be empty")]
    EmptyPassword,
}

/// Trimmed, lowercased email with a local part and a dotted domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// # Errors
    ///
    /// Returns `LearnerError::InvalidEmail` if the address has no local part,
    /// no domain, more than one `@`, or a domain without a dot.
    pub fn parse(raw: &str) -> Result<Self, LearnerError> {
        let value = raw.trim().to_lowercase();
        let (local, domain) = value.split_once('@').ok_or(LearnerError::InvalidEmail)?;
        let domain_ok = domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && !domain.contains('@');
        if local.is_empty() || !domain_ok || value.chars().any(char::is_whitespace) {
            return Err(LearnerError::InvalidEmail);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or(self.0.as_str(), |(local, _)| local)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The learner currently using the portal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnerProfile {
    id: LearnerId,
    name: String,
    email: Email,
    position: Option<String>,
    department: Option<String>,
}

impl LearnerProfile {
    /// # Errors
    ///
    /// Returns `LearnerError::EmptyName` for a blank name.
    pub fn new(
        id: LearnerId,
        name: impl Into<String>,
        email: Email,
        position: Option<String>,
        department: Option<String>,
    ) -> Result<Self, LearnerError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(LearnerError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            email,
            position: non_blank(position),
            department: non_blank(department),
        })
    }

    #[must_use]
    pub fn id(&self) -> LearnerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    #[must_use]
    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    #[must_use]
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

//
// ─── FORMS ─────────────────────────────────────────────────────────────────────
//

/// Raw sign-in form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    /// Checks the form and returns the parsed email.
    ///
    /// # Errors
    ///
    /// Returns `LearnerError` for a malformed email or empty password.
    pub fn validate(&self) -> Result<Email, LearnerError> {
        let email = Email::parse(&self.email)?;
        if self.password.is_empty() {
            return Err(LearnerError::EmptyPassword);
        }
        Ok(email)
    }
}

/// Raw registration form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub position: String,
    pub department: String,
}

impl RegistrationForm {
    /// Builds a profile from the form. The password is checked, never kept.
    ///
    /// # Errors
    ///
    /// Returns `LearnerError` for a blank name, malformed email or empty
    /// password.
    pub fn into_profile(self, id: LearnerId) -> Result<LearnerProfile, LearnerError> {
        if self.name.trim().is_empty() {
            return Err(LearnerError::EmptyName);
        }
        let email = Email::parse(&self.email)?;
        if self.password.is_empty() {
            return Err(LearnerError::EmptyPassword);
        }
        LearnerProfile::new(
            id,
            self.name,
            email,
            Some(self.position),
            Some(self.department),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_parse_normalises_case_and_whitespace() {
        let email = Email::parse("  Ivan.Petrov@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "ivan.petrov@example.com");
        assert_eq!(email.local_part(), "ivan.petrov");
    }

    #[test]
    fn email_parse_rejects_malformed_addresses() {
        for raw in ["", "ivan", "@example.com", "ivan@", "ivan@example", "a@b@c.com", "a b@c.com", "ivan@.com"] {
            assert_eq!(Email::parse(raw), Err(LearnerError::InvalidEmail), "{raw}");
        }
    }

    #[test]
    fn sign_in_requires_password() {
        let form = SignInForm {
            email: "ivan@example.com".into(),
            password: String::new(),
        };
        assert_eq!(form.validate(), Err(LearnerError::EmptyPassword));
    }

    #[test]
    fn registration_builds_profile_without_blank_fields() {
        let form = RegistrationForm {
            name: "  Maria Petrova ".into(),
            email: "maria@example.com".into(),
            password: "secret".into(),
            position: "Analyst".into(),
            department: "  ".into(),
        };
        let profile = form.into_profile(LearnerId::random()).unwrap();
        assert_eq!(profile.name(), "Maria Petrova");
        assert_eq!(profile.position(), Some("Analyst"));
        assert_eq!(profile.department(), None);
    }

    #[test]
    fn registration_rejects_blank_name() {
        let form = RegistrationForm {
            name: " ".into(),
            email: "maria@example.com".into(),
            password: "secret".into(),
            ..RegistrationForm::default()
        };
        assert_eq!(
            form.into_profile(LearnerId::random()),
            Err(LearnerError::EmptyName)
        );
    }
}
