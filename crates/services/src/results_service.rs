use std::sync::Arc;

use academy_core::model::{LearnerId, ResultsOverview, TestResult};
use storage::repository::{CourseRepository, ResultRepository};
use tracing::debug;

use crate::error::ResultsServiceError;

/// Builds the learner's results dashboard.
#[derive(Clone)]
pub struct ResultsService {
    courses: Arc<dyn CourseRepository>,
    results: Arc<dyn ResultRepository>,
}

impl ResultsService {
    #[must_use]
    pub fn new(courses: Arc<dyn CourseRepository>, results: Arc<dyn ResultRepository>) -> Self {
        Self { courses, results }
    }

    /// Headline counts plus the average recorded score.
    ///
    /// # Errors
    ///
    /// Returns `ResultsServiceError::Storage` if repository access fails.
    pub async fn overview(
        &self,
        learner_id: LearnerId,
    ) -> Result<ResultsOverview, ResultsServiceError> {
        let courses = self.courses.list_courses().await?;
        let results = self.results.list_results(learner_id).await?;
        let overview = ResultsOverview::compute(&courses, &results);
        debug!(
            learner_id = %learner_id,
            results = results.len(),
            average = overview.average_score,
            "computed results overview"
        );
        Ok(overview)
    }

    /// Recorded test results, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ResultsServiceError::Storage` if repository access fails.
    pub async fn recent_results(
        &self,
        learner_id: LearnerId,
    ) -> Result<Vec<TestResult>, ResultsServiceError> {
        let results = self.results.list_results(learner_id).await?;
        Ok(results)
    }
}
