use academy_core::model::{Course, CourseStatus, Lesson, Material, MaterialKind};
use services::CourseDetail;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration: String,
    pub lessons_label: String,
    pub status: CourseStatus,
    pub status_label: &'static str,
    /// Shown only for started courses.
    pub progress: Option<u8>,
    pub action_label: &'static str,
}

impl From<&Course> for CourseCardVm {
    fn from(course: &Course) -> Self {
        let status = course.status();
        Self {
            id: course.id().value(),
            title: course.title().to_owned(),
            description: course.description().to_owned(),
            category: course.category().to_owned(),
            duration: course.duration().to_owned(),
            lessons_label: format!("{} lessons", course.lessons_count()),
            status,
            status_label: status_label(status),
            progress: (course.enrolled() && course.progress() > 0).then_some(course.progress()),
            action_label: if course.enrolled() { "Continue" } else { "Enroll" },
        }
    }
}

#[must_use]
pub fn map_course_cards(courses: &[Course]) -> Vec<CourseCardVm> {
    courses.iter().map(CourseCardVm::from).collect()
}

#[must_use]
pub fn status_label(status: CourseStatus) -> &'static str {
    match status {
        CourseStatus::NotStarted => "Not started",
        CourseStatus::InProgress => "In progress",
        CourseStatus::Completed => "Completed",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonVm {
    pub number: usize,
    pub title: String,
    pub duration_label: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialVm {
    pub title: String,
    pub size_label: String,
    pub icon_class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDetailVm {
    pub card: CourseCardVm,
    pub instructor: Option<String>,
    pub lessons: Vec<LessonVm>,
    pub materials: Vec<MaterialVm>,
    pub lessons_progress: String,
    pub lessons_percent: u8,
}

fn map_lesson(number: usize, lesson: &Lesson) -> LessonVm {
    LessonVm {
        number,
        title: lesson.title().to_owned(),
        duration_label: format!("{} min", lesson.duration_minutes()),
        completed: lesson.completed(),
    }
}

fn map_material(material: &Material) -> MaterialVm {
    MaterialVm {
        title: material.title().to_owned(),
        size_label: material.size_label(),
        icon_class: match material.kind() {
            MaterialKind::Presentation => "icon-file",
            MaterialKind::Spreadsheet => "icon-sheet",
            MaterialKind::Video => "icon-video",
        },
    }
}

#[must_use]
pub fn map_course_detail(detail: &CourseDetail) -> CourseDetailVm {
    CourseDetailVm {
        card: CourseCardVm::from(&detail.course),
        instructor: detail.course.instructor().map(str::to_owned),
        lessons: detail
            .lessons
            .iter()
            .enumerate()
            .map(|(index, lesson)| map_lesson(index + 1, lesson))
            .collect(),
        materials: detail.materials.iter().map(map_material).collect(),
        lessons_progress: format!(
            "{} of {} lessons completed",
            detail.completed_lessons(),
            detail.lessons.len()
        ),
        lessons_percent: detail.lesson_completion_percent(),
    }
}
