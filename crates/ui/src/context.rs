use std::sync::Arc;

use academy_core::model::{LearnerProfile, PassThreshold};
use dioxus::prelude::*;
use services::{AccountService, CatalogService, CertificateService, QuizService, ResultsService};

pub trait UiApp: Send + Sync {
    fn pass_threshold(&self) -> PassThreshold;

    fn catalog(&self) -> Arc<CatalogService>;
    fn quizzes(&self) -> Arc<QuizService>;
    fn results(&self) -> Arc<ResultsService>;
    fn certificates(&self) -> Arc<CertificateService>;
    fn accounts(&self) -> Arc<AccountService>;
}

#[derive(Clone)]
pub struct AppContext {
    pass_threshold: PassThreshold,

    catalog: Arc<CatalogService>,
    quizzes: Arc<QuizService>,
    results: Arc<ResultsService>,
    certificates: Arc<CertificateService>,
    accounts: Arc<AccountService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            pass_threshold: app.pass_threshold(),
            catalog: app.catalog(),
            quizzes: app.quizzes(),
            results: app.results(),
            certificates: app.certificates(),
            accounts: app.accounts(),
        }
    }

    #[must_use]
    pub fn pass_threshold(&self) -> PassThreshold {
        self.pass_threshold
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultsService> {
        Arc::clone(&self.results)
    }

    #[must_use]
    pub fn certificates(&self) -> Arc<CertificateService> {
        Arc::clone(&self.certificates)
    }

    #[must_use]
    pub fn accounts(&self) -> Arc<AccountService> {
        Arc::clone(&self.accounts)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Reactive copy of the signed-in learner, mirrored from `AccountService`.
#[derive(Clone, Copy)]
pub struct CurrentLearner(pub Signal<Option<LearnerProfile>>);

impl CurrentLearner {
    #[must_use]
    pub fn get(&self) -> Option<LearnerProfile> {
        self.0.read().clone()
    }

    pub fn set(&mut self, learner: Option<LearnerProfile>) {
        self.0.set(learner);
    }
}

/// Provide `CurrentLearner` seeded from whoever is already signed in.
pub fn use_current_learner_provider(ctx: &AppContext) -> CurrentLearner {
    let accounts = ctx.accounts();
    let signal = use_signal(move || accounts.current().ok().flatten());
    use_context_provider(|| CurrentLearner(signal))
}
