#![forbid(unsafe_code)]

pub mod account_service;
pub mod app_services;
pub mod catalog_service;
pub mod certificate_service;
pub mod config;
pub mod error;
pub mod quiz_service;
pub mod results_service;

pub use academy_core::Clock;

pub use account_service::{AccountService, SampleHistory};
pub use app_services::AppServices;
pub use catalog_service::{CatalogService, CourseDetail};
pub use certificate_service::CertificateService;
pub use config::{AcademyConfig, ConfigError};
pub use error::{
    AccountError, AppServicesError, CatalogServiceError, CertificateServiceError,
    QuizServiceError, ResultsServiceError,
};
pub use quiz_service::{QuizService, Submission};
pub use results_service::ResultsService;
