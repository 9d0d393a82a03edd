use academy_core::model::{ResultsOverview, TestResult};

use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTileVm {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub id: u64,
    pub course_title: String,
    pub date: String,
    pub score: u8,
    pub status_label: &'static str,
    pub attempts_label: String,
    pub passed: bool,
}

impl From<&TestResult> for ResultRowVm {
    fn from(result: &TestResult) -> Self {
        Self {
            id: result.id.value(),
            course_title: result.course_title.clone(),
            date: format_date(result.completed_at),
            score: result.score,
            status_label: if result.passed { "Passed" } else { "Not passed" },
            attempts_label: match result.attempts {
                1 => "1 attempt".to_owned(),
                n => format!("{n} attempts"),
            },
            passed: result.passed,
        }
    }
}

#[must_use]
pub fn map_overview_tiles(overview: &ResultsOverview) -> Vec<StatTileVm> {
    vec![
        StatTileVm {
            label: "Total courses",
            value: overview.total_courses.to_string(),
        },
        StatTileVm {
            label: "Completed",
            value: overview.completed_courses.to_string(),
        },
        StatTileVm {
            label: "In progress",
            value: overview.in_progress_courses.to_string(),
        },
        StatTileVm {
            label: "Average score",
            value: format!("{}%", overview.average_score),
        },
    ]
}

#[must_use]
pub fn map_result_rows(results: &[TestResult]) -> Vec<ResultRowVm> {
    results.iter().map(ResultRowVm::from).collect()
}
