use std::sync::Arc;

use academy_core::model::{
    AttemptPhase, Certificate, Course, CourseId, LearnerId, Lesson, Material, PassThreshold,
    QuizAttempt, TestResult,
};
use academy_core::time::fixed_clock;
use async_trait::async_trait;
use services::{
    CatalogService, CatalogServiceError, QuizService, QuizServiceError, ResultsService,
    ResultsServiceError,
};
use storage::repository::{
    CertificateRepository, CourseRepository, NewCertificateRecord, NewTestResultRecord,
    ResultRepository, Storage, StorageError,
};
use storage::seed::{SALES_COURSE, demo_storage};

/// Backend that is always unreachable.
struct Offline;

fn offline() -> StorageError {
    StorageError::Connection("backend offline".into())
}

#[async_trait]
impl CourseRepository for Offline {
    async fn upsert_course(&self, _course: &Course) -> Result<(), StorageError> {
        Err(offline())
    }

    async fn get_course(&self, _id: CourseId) -> Result<Option<Course>, StorageError> {
        Err(offline())
    }

    async fn list_courses(&self) -> Result<Vec<Course>, StorageError> {
        Err(offline())
    }

    async fn set_lessons(
        &self,
        _course_id: CourseId,
        _lessons: Vec<Lesson>,
    ) -> Result<(), StorageError> {
        Err(offline())
    }

    async fn list_lessons(&self, _course_id: CourseId) -> Result<Vec<Lesson>, StorageError> {
        Err(offline())
    }

    async fn set_materials(
        &self,
        _course_id: CourseId,
        _materials: Vec<Material>,
    ) -> Result<(), StorageError> {
        Err(offline())
    }

    async fn list_materials(&self, _course_id: CourseId) -> Result<Vec<Material>, StorageError> {
        Err(offline())
    }
}

#[async_trait]
impl ResultRepository for Offline {
    async fn append_result(
        &self,
        _record: NewTestResultRecord,
    ) -> Result<academy_core::model::ResultId, StorageError> {
        Err(offline())
    }

    async fn list_results(&self, _learner_id: LearnerId) -> Result<Vec<TestResult>, StorageError> {
        Err(offline())
    }
}

#[async_trait]
impl CertificateRepository for Offline {
    async fn insert_certificate(
        &self,
        _record: NewCertificateRecord,
    ) -> Result<Certificate, StorageError> {
        Err(offline())
    }

    async fn find_certificate(
        &self,
        _learner_id: LearnerId,
        _course_id: CourseId,
    ) -> Result<Option<Certificate>, StorageError> {
        Err(offline())
    }

    async fn list_certificates(
        &self,
        _learner_id: LearnerId,
    ) -> Result<Vec<Certificate>, StorageError> {
        Err(offline())
    }
}

fn quiz_service(
    storage: &Storage,
    results: Arc<dyn ResultRepository>,
    certificates: Arc<dyn CertificateRepository>,
) -> QuizService {
    QuizService::new(
        fixed_clock(),
        PassThreshold::default(),
        "CERT",
        Arc::clone(&storage.courses),
        Arc::clone(&storage.quizzes),
        results,
        certificates,
    )
}

fn answer_all(attempt: &mut QuizAttempt, choices: &[usize]) {
    let ids: Vec<_> = attempt.quiz().questions().iter().map(|q| q.id()).collect();
    for (id, choice) in ids.into_iter().zip(choices) {
        attempt.select(id, *choice).expect("valid choice");
    }
}

#[tokio::test]
async fn catalog_surfaces_storage_errors() {
    let catalog = CatalogService::new(Arc::new(Offline));
    let err = catalog.categories().await.expect_err("offline");
    assert!(matches!(
        err,
        CatalogServiceError::Storage(StorageError::Connection(_))
    ));
    assert!(catalog.course_detail(CourseId::new(1)).await.is_err());
}

#[tokio::test]
async fn results_surface_storage_errors() {
    let results = ResultsService::new(Arc::new(Offline), Arc::new(Offline));
    let err = results
        .overview(LearnerId::random())
        .await
        .expect_err("offline");
    assert!(matches!(err, ResultsServiceError::Storage(_)));
    assert_eq!(err.to_string(), "connection error: backend offline");
}

#[tokio::test]
async fn unrecorded_result_leaves_attempt_open() {
    let storage = demo_storage(PassThreshold::default()).await.expect("demo storage");
    let offline_service = quiz_service(&storage, Arc::new(Offline), Arc::clone(&storage.certificates));
    let learner = LearnerId::random();

    let mut attempt = offline_service
        .start_attempt(SALES_COURSE)
        .await
        .expect("start attempt");
    answer_all(&mut attempt, &[1, 1, 2]);

    let err = offline_service
        .submit(&mut attempt, learner)
        .await
        .expect_err("results offline");
    assert!(matches!(
        err,
        QuizServiceError::Storage(StorageError::Connection(_))
    ));
    assert_eq!(attempt.phase(), AttemptPhase::Answering);
    assert!(!attempt.is_submitted());
    assert_eq!(attempt.answered_count(), 3);
    assert!(
        storage
            .certificates
            .list_certificates(learner)
            .await
            .expect("list")
            .is_empty()
    );

    // Once storage is back, the same attempt goes through.
    let online_service = quiz_service(
        &storage,
        Arc::clone(&storage.results),
        Arc::clone(&storage.certificates),
    );
    let submission = online_service
        .submit(&mut attempt, learner)
        .await
        .expect("submit after recovery");
    assert_eq!(submission.score.percentage(), 100);
    assert!(submission.newly_certified);
    assert!(attempt.is_passed());
}

#[tokio::test]
async fn failed_certification_leaves_attempt_open() {
    let storage = demo_storage(PassThreshold::default()).await.expect("demo storage");
    let service = quiz_service(&storage, Arc::clone(&storage.results), Arc::new(Offline));

    let mut attempt = service.start_attempt(SALES_COURSE).await.expect("start attempt");
    answer_all(&mut attempt, &[1, 1, 2]);

    let err = service
        .submit(&mut attempt, LearnerId::random())
        .await
        .expect_err("certificates offline");
    assert!(matches!(err, QuizServiceError::Storage(_)));
    assert_eq!(attempt.phase(), AttemptPhase::Answering);
    assert!(attempt.retry().is_err());
    assert!(attempt.can_submit());
}
