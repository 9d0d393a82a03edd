mod answers;
mod attempt;
mod certificate;
mod course;
mod ids;
mod learner;
mod question;
mod quiz;
mod result;
mod score;

pub use answers::AnswerSet;
pub use attempt::{AttemptError, AttemptPhase, QuizAttempt};
pub use certificate::{Certificate, CertificateError, CertificateNumber};
pub use course::{Course, CourseError, CourseStatus, Lesson, Material, MaterialKind};
pub use ids::{CertificateId, CourseId, LearnerId, LessonId, ParseIdError, QuestionId, ResultId};
pub use learner::{Email, LearnerError, LearnerProfile, RegistrationForm, SignInForm};
pub use question::{Question, QuestionError};
pub use quiz::{Quiz, QuizError};
pub use result::{ResultsOverview, TestResult};
pub use score::{PassThreshold, ScoreResult, ThresholdError, round_half_up_percent};
