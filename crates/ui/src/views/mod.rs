mod auth;
mod certificates;
mod course;
mod courses;
mod home;
mod results;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use auth::AuthView;
pub use certificates::CertificatesView;
pub use course::{CourseView, QuizPanel};
pub use courses::CoursesView;
pub use home::HomeView;
pub use results::ResultsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
