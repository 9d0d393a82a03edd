use std::sync::Arc;

use storage::repository::Storage;
use storage::seed::demo_storage;

use crate::Clock;
use crate::account_service::{AccountService, SampleHistory};
use crate::catalog_service::CatalogService;
use crate::certificate_service::CertificateService;
use crate::config::AcademyConfig;
use crate::error::AppServicesError;
use crate::quiz_service::QuizService;
use crate::results_service::ResultsService;

/// Assembles the app-facing services over one storage instance.
#[derive(Clone)]
pub struct AppServices {
    config: AcademyConfig,
    catalog: Arc<CatalogService>,
    quizzes: Arc<QuizService>,
    results: Arc<ResultsService>,
    certificates: Arc<CertificateService>,
    accounts: Arc<AccountService>,
}

impl AppServices {
    /// Build services over in-memory storage seeded with the demo catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the demo catalog cannot be loaded.
    pub async fn demo(config: AcademyConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = demo_storage(config.pass_threshold).await?;
        Ok(Self::with_storage(storage, config, clock))
    }

    #[must_use]
    pub fn with_storage(storage: Storage, config: AcademyConfig, clock: Clock) -> Self {
        let catalog = Arc::new(CatalogService::new(Arc::clone(&storage.courses)));
        let quizzes = Arc::new(QuizService::new(
            clock,
            config.pass_threshold,
            config.certificate_prefix.clone(),
            Arc::clone(&storage.courses),
            Arc::clone(&storage.quizzes),
            Arc::clone(&storage.results),
            Arc::clone(&storage.certificates),
        ));
        let results = Arc::new(ResultsService::new(
            Arc::clone(&storage.courses),
            Arc::clone(&storage.results),
        ));
        let certificates = Arc::new(CertificateService::new(Arc::clone(&storage.certificates)));
        let history = config.sample_history.then(|| SampleHistory {
            storage: storage.clone(),
            certificate_prefix: config.certificate_prefix.clone(),
            threshold: config.pass_threshold,
        });
        let accounts = Arc::new(AccountService::new(clock, history));

        Self {
            config,
            catalog,
            quizzes,
            results,
            certificates,
            accounts,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AcademyConfig {
        &self.config
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
