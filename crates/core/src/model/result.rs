use chrono::{DateTime, Utc};

use crate::model::course::{Course, CourseStatus};
use crate::model::ids::{CourseId, LearnerId, ResultId};

/// A recorded, submitted test for one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub id: ResultId,
    pub learner_id: LearnerId,
    pub course_id: CourseId,
    pub course_title: String,
    pub completed_at: DateTime<Utc>,
    pub score: u8,
    pub passed: bool,
    pub attempts: u32,
}

/// Headline numbers for the results dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultsOverview {
    pub total_courses: u32,
    /// Catalog courses at 100% progress; passing a test does not change it.
    pub completed_courses: u32,
    /// Catalog courses started but not finished, from the same progress figure.
    pub in_progress_courses: u32,
    pub passed_tests: u32,
    /// Mean of recorded scores, rounded half up; 0 with no results.
    pub average_score: u8,
}

impl ResultsOverview {
    #[must_use]
    pub fn compute(courses: &[Course], results: &[TestResult]) -> Self {
        let mut overview = Self {
            total_courses: count_u32(courses.len()),
            ..Self::default()
        };

        for course in courses {
            match course.status() {
                CourseStatus::Completed => overview.completed_courses += 1,
                CourseStatus::InProgress => overview.in_progress_courses += 1,
                CourseStatus::NotStarted => {}
            }
        }

        overview.passed_tests = count_u32(results.iter().filter(|r| r.passed).count());

        overview.average_score = average_score(results);
        overview
    }
}

fn average_score(results: &[TestResult]) -> u8 {
    if results.is_empty() {
        return 0;
    }
    let sum: u64 = results.iter().map(|r| u64::from(r.score)).sum();
    let count = results.len() as u64;
    let mean = (2 * sum + count) / (2 * count);
    u8::try_from(mean.min(100)).unwrap_or(100)
}

fn count_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
