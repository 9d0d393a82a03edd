use thiserror::Error;

use crate::model::answers::AnswerSet;
use crate::model::ids::QuestionId;
use crate::model::quiz::Quiz;
use crate::model::score::ScoreResult;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("{} question(s) still unanswered", .missing.len())]
    Incomplete { missing: Vec<QuestionId> },

    #[error("attempt has already been submitted")]
    AlreadySubmitted,

    #[error("attempt has not been submitted yet")]
    NotSubmitted,

    #[error("a passed attempt cannot be retried")]
    AlreadyPassed,

    #[error("question {0} is not part of this quiz")]
    UnknownQuestion(QuestionId),

    #[error("option {option} does not exist for question {question}")]
    UnknownOption { question: QuestionId, option: usize },
}

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Where an attempt is in the answer / submit / retry cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPhase {
    /// Learner is selecting options.
    Answering,
    /// Answers were scored. Terminal when `result.passed()`.
    Submitted(ScoreResult),
}

//
// ─── ATTEMPT ───────────────────────────────────────────────────────────────────
//

/// One learner working through a quiz.
///
/// Transitions:
/// - `Answering -> Submitted` only once every question has an answer.
/// - `Submitted(failed) -> Answering` on `retry`, which clears all answers.
/// - `Submitted(passed)` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAttempt {
    quiz: Quiz,
    answers: AnswerSet,
    phase: AttemptPhase,
    attempt_number: u32,
}

impl QuizAttempt {
    #[must_use]
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            answers: AnswerSet::new(),
            phase: AttemptPhase::Answering,
            attempt_number: 1,
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn phase(&self) -> AttemptPhase {
        self.phase
    }

    /// 1 for the first try, incremented on each retry.
    #[must_use]
    pub fn attempt_number(&self) -> u32 {
        self.attempt_number
    }

    #[must_use]
    pub fn result(&self) -> Option<ScoreResult> {
        match self.phase {
            AttemptPhase::Submitted(result) => Some(result),
            AttemptPhase::Answering => None,
        }
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, AttemptPhase::Submitted(_))
    }

    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.result().is_some_and(|r| r.passed())
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.quiz
            .questions()
            .iter()
            .filter(|q| self.answers.is_answered(q.id()))
            .count()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_submitted() && self.quiz.is_complete(&self.answers)
    }

    /// Record the learner's choice for a question.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::AlreadySubmitted` after submission, and
    /// `UnknownQuestion` / `UnknownOption` for choices outside the quiz.
    pub fn select(&mut self, question: QuestionId, option: usize) -> Result<(), AttemptError> {
        if self.is_submitted() {
            return Err(AttemptError::AlreadySubmitted);
        }
        let q = self
            .quiz
            .question(question)
            .ok_or(AttemptError::UnknownQuestion(question))?;
        if !q.has_option(option) {
            return Err(AttemptError::UnknownOption { question, option });
        }
        self.answers.select(question, option);
        Ok(())
    }

    /// Score the answers without leaving `Answering`.
    ///
    /// Lets a caller record the outcome elsewhere before committing it with
    /// [`QuizAttempt::submit`].
    ///
    /// # Errors
    ///
    /// Same as [`QuizAttempt::submit`].
    pub fn evaluate(&self) -> Result<ScoreResult, AttemptError> {
        if self.is_submitted() {
            return Err(AttemptError::AlreadySubmitted);
        }
        let missing = self.quiz.unanswered(&self.answers);
        if !missing.is_empty() {
            return Err(AttemptError::Incomplete { missing });
        }
        Ok(self.quiz.evaluate(&self.answers))
    }

    /// Score the answers and move to `Submitted`.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::Incomplete` listing unanswered questions, or
    /// `AttemptError::AlreadySubmitted` if called twice.
    pub fn submit(&mut self) -> Result<ScoreResult, AttemptError> {
        let result = self.evaluate()?;
        self.phase = AttemptPhase::Submitted(result);
        Ok(result)
    }

    /// Start over after a failed submission. Previous answers are cleared.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::NotSubmitted` while answering and
    /// `AttemptError::AlreadyPassed` once the quiz has been passed.
    pub fn retry(&mut self) -> Result<(), AttemptError> {
        match self.phase {
            AttemptPhase::Answering => Err(AttemptError::NotSubmitted),
            AttemptPhase::Submitted(result) if result.passed() => Err(AttemptError::AlreadyPassed),
            AttemptPhase::Submitted(_) => {
                self.answers.clear();
                self.phase = AttemptPhase::Answering;
                self.attempt_number = self.attempt_number.saturating_add(1);
                Ok(())
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
