use thiserror::Error;

use crate::model::{
    AttemptError, CertificateError, CourseError, LearnerError, QuestionError, QuizError,
    ThresholdError,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Attempt(#[from] AttemptError),
    #[error(transparent)]
    Threshold(#[from] ThresholdError),
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Learner(#[from] LearnerError),
    #[error(transparent)]
    Certificate(#[from] CertificateError),
}
