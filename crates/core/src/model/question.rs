use serde::Serialize;
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must offer at least two options, got {count}")]
    TooFewOptions { count: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("correct option {index} is out of range for {count} options")]
    CorrectOptionOutOfRange { index: usize, count: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// Options are order-significant: the position of an option is the value a
/// learner selects and the value the answer key refers to. The correct index
/// is checked against the options at construction, so a `Question` can never
/// carry an answer key that points past its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    correct_option: usize,
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or any option is blank, fewer
    /// than two options are given, or `correct_option` is out of range.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                count: options.len(),
            });
        }

        let mut trimmed = Vec::with_capacity(options.len());
        for (index, option) in options.into_iter().enumerate() {
            let option = option.trim();
            if option.is_empty() {
                return Err(QuestionError::EmptyOption { index });
            }
            trimmed.push(option.to_owned());
        }

        if correct_option >= trimmed.len() {
            return Err(QuestionError::CorrectOptionOutOfRange {
                index: correct_option,
                count: trimmed.len(),
            });
        }

        Ok(Self {
            id,
            prompt: prompt.to_owned(),
            options: trimmed,
            correct_option,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    /// True if `option` is a valid index into this question's options.
    #[must_use]
    pub fn has_option(&self, option: usize) -> bool {
        option < self.options.len()
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn question_new_happy_path() {
        let q = Question::new(
            QuestionId::new(1),
            "  What is active listening?  ",
            options(&["Music", " Attentive feedback "]),
            1,
        )
        .unwrap();

        assert_eq!(q.prompt(), "What is active listening?");
        assert_eq!(q.options()[1], "Attentive feedback");
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
        assert!(q.has_option(1));
        assert!(!q.has_option(2));
    }

    #[test]
    fn question_rejects_out_of_range_answer_key() {
        let err = Question::new(QuestionId::new(1), "Q", options(&["a", "b"]), 2).unwrap_err();
        assert_eq!(
            err,
            QuestionError::CorrectOptionOutOfRange { index: 2, count: 2 }
        );
    }

    #[test]
    fn question_rejects_blank_prompt() {
        let err = Question::new(QuestionId::new(1), "   ", options(&["a", "b"]), 0).unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }

    #[test]
    fn question_rejects_single_option() {
        let err = Question::new(QuestionId::new(1), "Q", options(&["a"]), 0).unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions { count: 1 });
    }

    #[test]
    fn question_rejects_blank_option() {
        let err = Question::new(QuestionId::new(1), "Q", options(&["a", " "]), 0).unwrap_err();
        assert_eq!(err, QuestionError::EmptyOption { index: 1 });
    }
}
