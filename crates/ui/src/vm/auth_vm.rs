use academy_core::model::LearnerError;
use services::AccountError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    Register,
}

impl AuthMode {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign in",
            AuthMode::Register => "Create account",
        }
    }
}

/// User-facing message for a failed sign-in or registration.
#[must_use]
pub fn auth_error_message(err: &AccountError) -> String {
    match err {
        AccountError::Learner(LearnerError::EmptyName) => "Please enter your full name.".into(),
        AccountError::Learner(LearnerError::InvalidEmail) => {
            "Please enter a valid email address.".into()
        }
        AccountError::Learner(LearnerError::EmptyPassword) => "Please enter a password.".into(),
        AccountError::AlreadyRegistered(email) => {
            format!("An account for {email} already exists. Sign in instead.")
        }
        _ => "Something went wrong. Please try again.".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            auth_error_message(&AccountError::Learner(LearnerError::InvalidEmail)),
            "Please enter a valid email address."
        );
        assert!(
            auth_error_message(&AccountError::AlreadyRegistered("a@b.com".into()))
                .contains("a@b.com")
        );
        assert_eq!(
            auth_error_message(&AccountError::NotSignedIn),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn mode_titles() {
        assert_eq!(AuthMode::default().title(), "Sign in");
        assert_eq!(AuthMode::Register.title(), "Create account");
    }
}
