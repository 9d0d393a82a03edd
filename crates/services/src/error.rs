//! Shared error types for the services crate.

use thiserror::Error;

use academy_core::model::{AttemptError, CourseId, LearnerError, QuizError};
use storage::repository::StorageError;
use storage::seed::SeedError;

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogServiceError {
    #[error("course {0} not found")]
    CourseNotFound(CourseId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("course {0} not found")]
    CourseNotFound(CourseId),
    #[error("course {0} has no final test")]
    NoQuiz(CourseId),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Attempt(#[from] AttemptError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ResultsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResultsServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `CertificateService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CertificateServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `AccountService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AccountError {
    #[error(transparent)]
    Learner(#[from] LearnerError),
    #[error("an account for {0} already exists")]
    AlreadyRegistered(String),
    #[error("no learner is signed in")]
    NotSignedIn,
    #[error("account state unavailable: {0}")]
    StateUnavailable(String),
    #[error(transparent)]
    Seed(#[from] SeedError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
