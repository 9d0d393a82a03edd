use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use academy_core::model::{
    Email, LearnerId, LearnerProfile, PassThreshold, RegistrationForm, SignInForm,
};
use storage::repository::Storage;
use storage::seed::seed_sample_history;
use tracing::{debug, info};

use crate::Clock;
use crate::error::AccountError;

/// Demo history handed to every new learner.
#[derive(Clone)]
pub struct SampleHistory {
    pub storage: Storage,
    pub certificate_prefix: String,
    pub threshold: PassThreshold,
}

#[derive(Default)]
struct AccountState {
    learners: HashMap<Email, LearnerProfile>,
    current: Option<LearnerId>,
}

impl AccountState {
    fn current_profile(&self) -> Option<LearnerProfile> {
        let id = self.current?;
        self.learners.values().find(|p| p.id() == id).cloned()
    }
}

/// Demo sign-in: profiles live for the lifetime of the process and
/// passwords are checked for presence only, never kept.
#[derive(Clone)]
pub struct AccountService {
    clock: Clock,
    history: Option<SampleHistory>,
    state: Arc<Mutex<AccountState>>,
}

impl AccountService {
    #[must_use]
    pub fn new(clock: Clock, history: Option<SampleHistory>) -> Self {
        Self {
            clock,
            history,
            state: Arc::new(Mutex::new(AccountState::default())),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, AccountState>, AccountError> {
        self.state
            .lock()
            .map_err(|e| AccountError::StateUnavailable(e.to_string()))
    }

    /// Sign in with an email and password.
    ///
    /// An unknown email gets a fresh demo profile named after the local
    /// part of the address.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Learner` for a malformed email or empty password.
    /// Returns `AccountError::Seed` if the sample history cannot be created.
    pub async fn sign_in(&self, form: &SignInForm) -> Result<LearnerProfile, AccountError> {
        let email = form.validate()?;
        let (profile, is_new) = {
            let mut state = self.lock()?;
            let (profile, is_new) = match state.learners.get(&email).cloned() {
                Some(existing) => (existing, false),
                None => {
                    let name = email.local_part().to_owned();
                    let profile =
                        LearnerProfile::new(LearnerId::random(), name, email.clone(), None, None)?;
                    state.learners.insert(email, profile.clone());
                    (profile, true)
                }
            };
            state.current = Some(profile.id());
            (profile, is_new)
        };

        if is_new {
            self.give_sample_history(profile.id()).await?;
        }
        info!(learner_id = %profile.id(), new = is_new, "learner signed in");
        Ok(profile)
    }

    /// Create a profile from the registration form and sign it in.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Learner` if the form is invalid.
    /// Returns `AccountError::AlreadyRegistered` if the email is taken.
    /// Returns `AccountError::Seed` if the sample history cannot be created.
    pub async fn register(&self, form: RegistrationForm) -> Result<LearnerProfile, AccountError> {
        let profile = form.into_profile(LearnerId::random())?;
        {
            let mut state = self.lock()?;
            if state.learners.contains_key(profile.email()) {
                return Err(AccountError::AlreadyRegistered(
                    profile.email().as_str().to_owned(),
                ));
            }
            state
                .learners
                .insert(profile.email().clone(), profile.clone());
            state.current = Some(profile.id());
        }

        self.give_sample_history(profile.id()).await?;
        info!(learner_id = %profile.id(), "learner registered");
        Ok(profile)
    }

    /// # Errors
    ///
    /// Returns `AccountError::StateUnavailable` if the account state is poisoned.
    pub fn sign_out(&self) -> Result<(), AccountError> {
        let mut state = self.lock()?;
        if let Some(id) = state.current.take() {
            info!(learner_id = %id, "learner signed out");
        }
        Ok(())
    }

    /// The signed-in learner, if any.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::StateUnavailable` if the account state is poisoned.
    pub fn current(&self) -> Result<Option<LearnerProfile>, AccountError> {
        Ok(self.lock()?.current_profile())
    }

    /// The signed-in learner.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NotSignedIn` when nobody is signed in.
    pub fn require_current(&self) -> Result<LearnerProfile, AccountError> {
        self.current()?.ok_or(AccountError::NotSignedIn)
    }

    async fn give_sample_history(&self, learner_id: LearnerId) -> Result<(), AccountError> {
        let Some(history) = &self.history else {
            return Ok(());
        };
        seed_sample_history(
            &history.storage,
            learner_id,
            &history.certificate_prefix,
            history.threshold,
            self.clock.now(),
        )
        .await?;
        debug!(learner_id = %learner_id, "seeded sample history");
        Ok(())
    }
}
