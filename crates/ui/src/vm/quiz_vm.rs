use academy_core::model::{AttemptError, CourseId, LearnerId, QuestionId, QuizAttempt};
use services::{QuizService, QuizServiceError, Submission};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select { question: QuestionId, option: usize },
    Submit,
    Retry,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: QuestionId,
    pub number: usize,
    pub prompt: String,
    pub options: Vec<OptionVm>,
}

/// Score card shown after a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOutcomeVm {
    pub percentage: u8,
    pub passed: bool,
    pub correct: u32,
    pub total: u32,
    pub headline: &'static str,
    pub detail: String,
    pub certificate_number: Option<String>,
}

impl QuizOutcomeVm {
    fn from_submission(submission: &Submission, threshold: u8) -> Self {
        let score = submission.score;
        let detail = if score.passed() {
            format!(
                "{} of {} answers correct. A certificate is available in your profile.",
                score.correct(),
                score.total()
            )
        } else {
            format!(
                "{} of {} answers correct. You need at least {threshold}% to pass.",
                score.correct(),
                score.total()
            )
        };
        Self {
            percentage: score.percentage(),
            passed: score.passed(),
            correct: score.correct(),
            total: score.total(),
            headline: if score.passed() {
                "Congratulations! You passed the test"
            } else {
                "Test not passed"
            },
            detail,
            certificate_number: submission
                .certificate
                .as_ref()
                .map(|c| c.number.to_string()),
        }
    }
}

/// Drives one quiz attempt for the test tab.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizVm {
    attempt: QuizAttempt,
    outcome: Option<QuizOutcomeVm>,
}

impl QuizVm {
    #[must_use]
    pub fn new(attempt: QuizAttempt) -> Self {
        Self {
            attempt,
            outcome: None,
        }
    }

    #[must_use]
    pub fn questions(&self) -> Vec<QuestionVm> {
        let answers = self.attempt.answers();
        self.attempt
            .quiz()
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let chosen = answers.get(question.id());
                QuestionVm {
                    id: question.id(),
                    number: index + 1,
                    prompt: question.prompt().to_owned(),
                    options: question
                        .options()
                        .iter()
                        .enumerate()
                        .map(|(option, label)| OptionVm {
                            index: option,
                            label: label.clone(),
                            selected: chosen == Some(option),
                        })
                        .collect(),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!(
            "Answered {} of {}",
            self.attempt.answered_count(),
            self.attempt.quiz().len()
        )
    }

    #[must_use]
    pub fn threshold_label(&self) -> String {
        format!("Passing score: {}", self.attempt.quiz().threshold())
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.attempt.can_submit()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.attempt.is_submitted()
    }

    #[must_use]
    pub fn can_retry(&self) -> bool {
        self.attempt.is_submitted() && !self.attempt.is_passed()
    }

    #[must_use]
    pub fn attempt_number(&self) -> u32 {
        self.attempt.attempt_number()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&QuizOutcomeVm> {
        self.outcome.as_ref()
    }

    /// # Errors
    ///
    /// Returns `ViewError::AlreadySubmitted` once the attempt is scored and
    /// `ViewError::Unknown` if the choice is outside the quiz.
    pub fn select(&mut self, question: QuestionId, option: usize) -> Result<(), ViewError> {
        self.attempt.select(question, option).map_err(attempt_error)
    }

    /// # Errors
    ///
    /// Returns `ViewError::AlreadyPassed` after a pass and
    /// `ViewError::Unknown` before anything was submitted.
    pub fn retry(&mut self) -> Result<(), ViewError> {
        self.attempt.retry().map_err(attempt_error)?;
        self.outcome = None;
        Ok(())
    }

    /// Submit through the quiz service and keep the score card.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Incomplete` when questions are unanswered and
    /// `ViewError::Unknown` for other failures.
    pub async fn submit(
        &mut self,
        quizzes: &QuizService,
        learner_id: LearnerId,
    ) -> Result<QuizOutcomeVm, ViewError> {
        let submission = match quizzes.submit(&mut self.attempt, learner_id).await {
            Ok(submission) => submission,
            Err(QuizServiceError::Attempt(err)) => return Err(attempt_error(err)),
            Err(_) => return Err(ViewError::Unknown),
        };
        let outcome =
            QuizOutcomeVm::from_submission(&submission, self.attempt.quiz().threshold().percent());
        self.outcome = Some(outcome.clone());
        Ok(outcome)
    }
}

fn attempt_error(err: AttemptError) -> ViewError {
    match err {
        AttemptError::Incomplete { .. } => ViewError::Incomplete,
        AttemptError::AlreadySubmitted => ViewError::AlreadySubmitted,
        AttemptError::AlreadyPassed => ViewError::AlreadyPassed,
        _ => ViewError::Unknown,
    }
}

/// # Errors
///
/// Returns `ViewError::NotFound` when the course has no test.
/// Returns `ViewError::Unknown` for other failures.
pub async fn start_quiz(quizzes: &QuizService, course_id: CourseId) -> Result<QuizVm, ViewError> {
    match quizzes.start_attempt(course_id).await {
        Ok(attempt) => Ok(QuizVm::new(attempt)),
        Err(QuizServiceError::NoQuiz(_)) => Err(ViewError::NotFound),
        Err(_) => Err(ViewError::Unknown),
    }
}
