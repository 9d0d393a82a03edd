use academy_core::model::{
    Certificate, CertificateId, Course, CourseId, LearnerId, Lesson, Material, Quiz, ResultId,
    TestResult,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Insert shape for a test result; the repository assigns the id.
#[derive(Debug, Clone)]
pub struct NewTestResultRecord {
    pub learner_id: LearnerId,
    pub course_id: CourseId,
    pub course_title: String,
    pub completed_at: DateTime<Utc>,
    pub score: u8,
    pub passed: bool,
    pub attempts: u32,
}

impl NewTestResultRecord {
    fn into_result(self, id: ResultId) -> TestResult {
        TestResult {
            id,
            learner_id: self.learner_id,
            course_id: self.course_id,
            course_title: self.course_title,
            completed_at: self.completed_at,
            score: self.score,
            passed: self.passed,
            attempts: self.attempts,
        }
    }
}

/// Insert shape for a certificate; the repository assigns id and serial.
#[derive(Debug, Clone)]
pub struct NewCertificateRecord {
    pub learner_id: LearnerId,
    pub course_id: CourseId,
    pub course_title: String,
    pub issued_at: DateTime<Utc>,
    pub score: u8,
    pub instructor: String,
    pub number_prefix: String,
}

/// Catalog contract: courses plus their lessons and materials.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Persist or update a course.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the course cannot be stored.
    async fn upsert_course(&self, course: &Course) -> Result<(), StorageError>;

    /// Fetch a course by ID, `None` if missing.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn get_course(&self, id: CourseId) -> Result<Option<Course>, StorageError>;

    /// All courses ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_courses(&self) -> Result<Vec<Course>, StorageError>;

    /// Replace the lessons of a course.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the course does not exist.
    async fn set_lessons(&self, course_id: CourseId, lessons: Vec<Lesson>)
    -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_lessons(&self, course_id: CourseId) -> Result<Vec<Lesson>, StorageError>;

    /// Replace the materials of a course.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the course does not exist.
    async fn set_materials(
        &self,
        course_id: CourseId,
        materials: Vec<Material>,
    ) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_materials(&self, course_id: CourseId) -> Result<Vec<Material>, StorageError>;
}

/// Question bank: one quiz per course.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the quiz cannot be stored.
    async fn upsert_quiz(&self, quiz: &Quiz) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn get_quiz(&self, course_id: CourseId) -> Result<Option<Quiz>, StorageError>;
}

#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// Append a submitted result and return its id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the result cannot be stored.
    async fn append_result(&self, record: NewTestResultRecord) -> Result<ResultId, StorageError>;

    /// Results for a learner, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_results(&self, learner_id: LearnerId) -> Result<Vec<TestResult>, StorageError>;
}

#[async_trait]
pub trait CertificateRepository: Send + Sync {
    /// Issue a certificate, assigning the next serial number.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the learner already holds a
    /// certificate for the course.
    async fn insert_certificate(
        &self,
        record: NewCertificateRecord,
    ) -> Result<Certificate, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn find_certificate(
        &self,
        learner_id: LearnerId,
        course_id: CourseId,
    ) -> Result<Option<Certificate>, StorageError>;

    /// Certificates for a learner, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_certificates(
        &self,
        learner_id: LearnerId,
    ) -> Result<Vec<Certificate>, StorageError>;
}

//
// ─── IN-MEMORY BACKEND ─────────────────────────────────────────────────────────
//

/// First serial handed out; keeps numbers in the `001xxx` range like the
/// printed demo certificates.
const FIRST_CERTIFICATE_SERIAL: u32 = 1_000;

/// In-memory repository implementation backing the demo portal and tests.
#[derive(Clone)]
pub struct InMemoryRepository {
    courses: Arc<Mutex<BTreeMap<CourseId, Course>>>,
    lessons: Arc<Mutex<HashMap<CourseId, Vec<Lesson>>>>,
    materials: Arc<Mutex<HashMap<CourseId, Vec<Material>>>>,
    quizzes: Arc<Mutex<HashMap<CourseId, Quiz>>>,
    results: Arc<Mutex<Vec<TestResult>>>,
    certificates: Arc<Mutex<Vec<Certificate>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            courses: Arc::new(Mutex::new(BTreeMap::new())),
            lessons: Arc::new(Mutex::new(HashMap::new())),
            materials: Arc::new(Mutex::new(HashMap::new())),
            quizzes: Arc::new(Mutex::new(HashMap::new())),
            results: Arc::new(Mutex::new(Vec::new())),
            certificates: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn ensure_course(&self, course_id: CourseId) -> Result<(), StorageError> {
        let guard = self
            .courses
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard.contains_key(&course_id) {
            Ok(())
        } else {
            Err(StorageError::NotFound)
        }
    }
}

#[async_trait]
impl CourseRepository for InMemoryRepository {
    async fn upsert_course(&self, course: &Course) -> Result<(), StorageError> {
        let mut guard = self
            .courses
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(course.id(), course.clone());
        Ok(())
    }

    async fn get_course(&self, id: CourseId) -> Result<Option<Course>, StorageError> {
        let guard = self
            .courses
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&id).cloned())
    }

    async fn list_courses(&self) -> Result<Vec<Course>, StorageError> {
        let guard = self
            .courses
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.values().cloned().collect())
    }

    async fn set_lessons(
        &self,
        course_id: CourseId,
        lessons: Vec<Lesson>,
    ) -> Result<(), StorageError> {
        self.ensure_course(course_id)?;
        let mut guard = self
            .lessons
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(course_id, lessons);
        Ok(())
    }

    async fn list_lessons(&self, course_id: CourseId) -> Result<Vec<Lesson>, StorageError> {
        let guard = self
            .lessons
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&course_id).cloned().unwrap_or_default())
    }

    async fn set_materials(
        &self,
        course_id: CourseId,
        materials: Vec<Material>,
    ) -> Result<(), StorageError> {
        self.ensure_course(course_id)?;
        let mut guard = self
            .materials
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(course_id, materials);
        Ok(())
    }

    async fn list_materials(&self, course_id: CourseId) -> Result<Vec<Material>, StorageError> {
        let guard = self
            .materials
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&course_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl QuizRepository for InMemoryRepository {
    async fn upsert_quiz(&self, quiz: &Quiz) -> Result<(), StorageError> {
        let mut guard = self
            .quizzes
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(quiz.course_id(), quiz.clone());
        Ok(())
    }

    async fn get_quiz(&self, course_id: CourseId) -> Result<Option<Quiz>, StorageError> {
        let guard = self
            .quizzes
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&course_id).cloned())
    }
}

#[async_trait]
impl ResultRepository for InMemoryRepository {
    async fn append_result(&self, record: NewTestResultRecord) -> Result<ResultId, StorageError> {
        let mut guard = self
            .results
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let id = ResultId::new(guard.len() as u64 + 1);
        guard.push(record.into_result(id));
        Ok(id)
    }

    async fn list_results(&self, learner_id: LearnerId) -> Result<Vec<TestResult>, StorageError> {
        let guard = self
            .results
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut found: Vec<TestResult> = guard
            .iter()
            .filter(|r| r.learner_id == learner_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            b.completed_at
                .cmp(&a.completed_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(found)
    }
}

#[async_trait]
impl CertificateRepository for InMemoryRepository {
    async fn insert_certificate(
        &self,
        record: NewCertificateRecord,
    ) -> Result<Certificate, StorageError> {
        let mut guard = self
            .certificates
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard
            .iter()
            .any(|c| c.learner_id == record.learner_id && c.course_id == record.course_id)
        {
            return Err(StorageError::Conflict);
        }

        let index = u32::try_from(guard.len())
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let serial = FIRST_CERTIFICATE_SERIAL.saturating_add(index);
        let number = Certificate::number_for(&record.number_prefix, record.issued_at, serial)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let certificate = Certificate {
            id: CertificateId::new(u64::from(index) + 1),
            learner_id: record.learner_id,
            course_id: record.course_id,
            course_title: record.course_title,
            issued_at: record.issued_at,
            number,
            score: record.score,
            instructor: record.instructor,
        };
        guard.push(certificate.clone());
        Ok(certificate)
    }

    async fn find_certificate(
        &self,
        learner_id: LearnerId,
        course_id: CourseId,
    ) -> Result<Option<Certificate>, StorageError> {
        let guard = self
            .certificates
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard
            .iter()
            .find(|c| c.learner_id == learner_id && c.course_id == course_id)
            .cloned())
    }

    async fn list_certificates(
        &self,
        learner_id: LearnerId,
    ) -> Result<Vec<Certificate>, StorageError> {
        let guard = self
            .certificates
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut found: Vec<Certificate> = guard
            .iter()
            .filter(|c| c.learner_id == learner_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.issued_at.cmp(&a.issued_at).then_with(|| b.id.cmp(&a.id)));
        Ok(found)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub courses: Arc<dyn CourseRepository>,
    pub quizzes: Arc<dyn QuizRepository>,
    pub results: Arc<dyn ResultRepository>,
    pub certificates: Arc<dyn CertificateRepository>,
}

impl Storage {
    /// Empty in-memory storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        let courses: Arc<dyn CourseRepository> = Arc::new(repo.clone());
        let quizzes: Arc<dyn QuizRepository> = Arc::new(repo.clone());
        let results: Arc<dyn ResultRepository> = Arc::new(repo.clone());
        let certificates: Arc<dyn CertificateRepository> = Arc::new(repo);
        Self {
            courses,
            quizzes,
            results,
            certificates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::model::{LessonId, MaterialKind};
    use academy_core::time::fixed_now;
    use chrono::Duration;

    fn build_course(id: u64) -> Course {
        Course::new(
            CourseId::new(id),
            format!("Course {id}"),
            "",
            "3 weeks",
            9,
            "General",
            0,
            false,
        )
        .unwrap()
    }

    fn result_record(learner_id: LearnerId, course_id: u64, days_ago: i64) -> NewTestResultRecord {
        NewTestResultRecord {
            learner_id,
            course_id: CourseId::new(course_id),
            course_title: format!("Course {course_id}"),
            completed_at: fixed_now() - Duration::days(days_ago),
            score: 80,
            passed: true,
            attempts: 1,
        }
    }

    fn certificate_record(learner_id: LearnerId, course_id: u64) -> NewCertificateRecord {
        NewCertificateRecord {
            learner_id,
            course_id: CourseId::new(course_id),
            course_title: format!("Course {course_id}"),
            issued_at: fixed_now(),
            score: 90,
            instructor: "Maria Petrova".into(),
            number_prefix: "CERT".into(),
        }
    }

    #[tokio::test]
    async fn courses_list_in_id_order() {
        let repo = InMemoryRepository::new();
        repo.upsert_course(&build_course(3)).await.unwrap();
        repo.upsert_course(&build_course(1)).await.unwrap();

        let ids: Vec<u64> = repo
            .list_courses()
            .await
            .unwrap()
            .iter()
            .map(|c| c.id().value())
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(repo.get_course(CourseId::new(2)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lessons_require_existing_course() {
        let repo = InMemoryRepository::new();
        let lesson = Lesson::new(LessonId::new(1), "Intro", 15, false).unwrap();
        let err = repo
            .set_lessons(CourseId::new(1), vec![lesson.clone()])
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::NotFound));

        repo.upsert_course(&build_course(1)).await.unwrap();
        repo.set_lessons(CourseId::new(1), vec![lesson]).await.unwrap();
        assert_eq!(repo.list_lessons(CourseId::new(1)).await.unwrap().len(), 1);

        let material = Material::new("Slides", MaterialKind::Presentation, 10).unwrap();
        repo.set_materials(CourseId::new(1), vec![material]).await.unwrap();
        assert_eq!(repo.list_materials(CourseId::new(1)).await.unwrap().len(), 1);
        assert!(repo.list_materials(CourseId::new(2)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn results_are_scoped_to_learner_and_newest_first() {
        let repo = InMemoryRepository::new();
        let learner = LearnerId::random();
        let other = LearnerId::random();

        repo.append_result(result_record(learner, 1, 5)).await.unwrap();
        repo.append_result(result_record(learner, 2, 1)).await.unwrap();
        repo.append_result(result_record(other, 3, 0)).await.unwrap();

        let results = repo.list_results(learner).await.unwrap();
        let courses: Vec<u64> = results.iter().map(|r| r.course_id.value()).collect();
        assert_eq!(courses, vec![2, 1]);
    }

    #[tokio::test]
    async fn certificates_get_sequential_numbers_and_reject_duplicates() {
        let repo = InMemoryRepository::new();
        let learner = LearnerId::random();

        let first = repo
            .insert_certificate(certificate_record(learner, 1))
            .await
            .unwrap();
        let second = repo
            .insert_certificate(certificate_record(learner, 2))
            .await
            .unwrap();
        assert_eq!(first.number.to_string(), "CERT-2023-001000");
        assert_eq!(second.number.to_string(), "CERT-2023-001001");

        let err = repo
            .insert_certificate(certificate_record(learner, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Conflict));

        let found = repo
            .find_certificate(learner, CourseId::new(2))
            .await
            .unwrap();
        assert_eq!(found.map(|c| c.id), Some(second.id));
        assert_eq!(repo.list_certificates(learner).await.unwrap().len(), 2);
    }
}
