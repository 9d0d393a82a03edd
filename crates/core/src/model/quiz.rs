use std::collections::HashSet;

use thiserror::Error;

use crate::model::answers::AnswerSet;
use crate::model::ids::{CourseId, QuestionId};
use crate::model::question::Question;
use crate::model::score::{PassThreshold, ScoreResult};
use crate::scoring;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz must contain at least one question")]
    NoQuestions,

    #[error("question id {0} appears more than once")]
    DuplicateQuestion(QuestionId),
}

/// Final test of a course: an ordered, immutable set of questions plus the
/// threshold a score must reach to pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    course_id: CourseId,
    questions: Vec<Question>,
    threshold: PassThreshold,
}

impl Quiz {
    /// # Errors
    ///
    /// Returns `QuizError::NoQuestions` for an empty list and
    /// `QuizError::DuplicateQuestion` if two questions share an id.
    pub fn new(
        course_id: CourseId,
        questions: Vec<Question>,
        threshold: PassThreshold,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(QuizError::DuplicateQuestion(question.id()));
            }
        }
        Ok(Self {
            course_id,
            questions,
            threshold,
        })
    }

    /// Same questions, different pass threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: PassThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn threshold(&self) -> PassThreshold {
        self.threshold
    }

    /// Questions with no recorded answer, in quiz order.
    #[must_use]
    pub fn unanswered(&self, answers: &AnswerSet) -> Vec<QuestionId> {
        self.questions
            .iter()
            .map(Question::id)
            .filter(|id| !answers.is_answered(*id))
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self, answers: &AnswerSet) -> bool {
        self.questions.iter().all(|q| answers.is_answered(q.id()))
    }

    #[must_use]
    pub fn evaluate(&self, answers: &AnswerSet) -> ScoreResult {
        scoring::evaluate_with_threshold(&self.questions, answers, self.threshold)
    }
}
