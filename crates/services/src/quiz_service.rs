use std::sync::Arc;

use academy_core::model::{
    AttemptError, Certificate, Course, CourseId, LearnerId, PassThreshold, QuizAttempt, ResultId,
    ScoreResult,
};
use storage::repository::{
    CertificateRepository, CourseRepository, NewCertificateRecord, NewTestResultRecord,
    QuizRepository, ResultRepository, StorageError,
};
use tracing::{debug, info, warn};

use crate::Clock;
use crate::error::QuizServiceError;

/// What a successful submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub score: ScoreResult,
    pub result_id: ResultId,
    /// Certificate held for the course after this submission, if passed.
    pub certificate: Option<Certificate>,
    /// `true` when `certificate` was issued by this submission.
    pub newly_certified: bool,
}

/// Runs course final tests: hands out attempts and records their outcome.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    threshold: PassThreshold,
    certificate_prefix: String,
    courses: Arc<dyn CourseRepository>,
    quizzes: Arc<dyn QuizRepository>,
    results: Arc<dyn ResultRepository>,
    certificates: Arc<dyn CertificateRepository>,
}

impl QuizService {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        clock: Clock,
        threshold: PassThreshold,
        certificate_prefix: impl Into<String>,
        courses: Arc<dyn CourseRepository>,
        quizzes: Arc<dyn QuizRepository>,
        results: Arc<dyn ResultRepository>,
        certificates: Arc<dyn CertificateRepository>,
    ) -> Self {
        Self {
            clock,
            threshold,
            certificate_prefix: certificate_prefix.into(),
            courses,
            quizzes,
            results,
            certificates,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> PassThreshold {
        self.threshold
    }

    /// Begin a fresh attempt at the course's final test.
    ///
    /// The attempt is scored against the configured pass threshold.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::NoQuiz` if the course has no test.
    /// Returns `QuizServiceError::Storage` if repository access fails.
    pub async fn start_attempt(&self, course_id: CourseId) -> Result<QuizAttempt, QuizServiceError> {
        let quiz = self
            .quizzes
            .get_quiz(course_id)
            .await?
            .ok_or(QuizServiceError::NoQuiz(course_id))?
            .with_threshold(self.threshold);
        debug!(course_id = %course_id, questions = quiz.len(), "started quiz attempt");
        Ok(QuizAttempt::new(quiz))
    }

    /// Score an attempt, record the result and certify a pass.
    ///
    /// A learner holds at most one certificate per course; passing again
    /// returns the existing one.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Attempt` if the attempt is incomplete or
    /// already submitted.
    /// Returns `QuizServiceError::CourseNotFound` if the course vanished.
    /// Returns `QuizServiceError::Storage` if persistence fails.
    ///
    /// On any error the attempt stays in `Answering` with its answers, so
    /// it can be submitted again.
    pub async fn submit(
        &self,
        attempt: &mut QuizAttempt,
        learner_id: LearnerId,
    ) -> Result<Submission, QuizServiceError> {
        let course_id = attempt.quiz().course_id();
        let course = self
            .courses
            .get_course(course_id)
            .await?
            .ok_or(QuizServiceError::CourseNotFound(course_id))?;

        let score = match attempt.evaluate() {
            Ok(score) => score,
            Err(err) => {
                if let AttemptError::Incomplete { missing } = &err {
                    warn!(
                        course_id = %course_id,
                        missing = missing.len(),
                        "rejected incomplete quiz submission"
                    );
                } else {
                    warn!(course_id = %course_id, error = %err, "rejected quiz submission");
                }
                return Err(err.into());
            }
        };

        let now = self.clock.now();
        let result_id = self
            .results
            .append_result(NewTestResultRecord {
                learner_id,
                course_id,
                course_title: course.title().to_owned(),
                completed_at: now,
                score: score.percentage(),
                passed: score.passed(),
                attempts: attempt.attempt_number(),
            })
            .await?;

        let (certificate, newly_certified) = if score.passed() {
            let (certificate, issued) = self.certify(&course, learner_id, &score).await?;
            (Some(certificate), issued)
        } else {
            (None, false)
        };

        // The attempt only leaves `Answering` once the outcome is stored.
        attempt.submit()?;
        info!(
            course_id = %course_id,
            learner_id = %learner_id,
            score = score.percentage(),
            passed = score.passed(),
            attempt = attempt.attempt_number(),
            "quiz attempt submitted"
        );

        Ok(Submission {
            score,
            result_id,
            certificate,
            newly_certified,
        })
    }

    async fn certify(
        &self,
        course: &Course,
        learner_id: LearnerId,
        score: &ScoreResult,
    ) -> Result<(Certificate, bool), QuizServiceError> {
        if let Some(existing) = self
            .certificates
            .find_certificate(learner_id, course.id())
            .await?
        {
            return Ok((existing, false));
        }

        let record = NewCertificateRecord {
            learner_id,
            course_id: course.id(),
            course_title: course.title().to_owned(),
            issued_at: self.clock.now(),
            score: score.percentage(),
            instructor: course.instructor().unwrap_or_default().to_owned(),
            number_prefix: self.certificate_prefix.clone(),
        };
        match self.certificates.insert_certificate(record).await {
            Ok(certificate) => {
                info!(
                    course_id = %course.id(),
                    learner_id = %learner_id,
                    number = %certificate.number,
                    "certificate issued"
                );
                Ok((certificate, true))
            }
            // Lost a race with another submission for the same course.
            Err(StorageError::Conflict) => {
                let existing = self
                    .certificates
                    .find_certificate(learner_id, course.id())
                    .await?
                    .ok_or(StorageError::NotFound)?;
                Ok((existing, false))
            }
            Err(err) => Err(err.into()),
        }
    }
}
