use thiserror::Error;

use crate::model::ids::{CourseId, LessonId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course title cannot be empty")]
    EmptyTitle,

    #[error("course category cannot be empty")]
    EmptyCategory,

    #[error("course progress must be between 0 and 100, got {0}")]
    InvalidProgress(u8),

    #[error("lesson title cannot be empty")]
    EmptyLessonTitle,

    #[error("material title cannot be empty")]
    EmptyMaterialTitle,
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// Derived enrolment state of a course for the current learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: String,
    description: String,
    duration: String,
    lessons_count: u32,
    category: String,
    progress: u8,
    enrolled: bool,
    instructor: Option<String>,
}

impl Course {
    /// Creates a course entry.
    ///
    /// Title, description and category are trimmed.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` for a blank title or category, or a progress
    /// above 100.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        description: impl Into<String>,
        duration: impl Into<String>,
        lessons_count: u32,
        category: impl Into<String>,
        progress: u8,
        enrolled: bool,
    ) -> Result<Self, CourseError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(CourseError::EmptyTitle);
        }
        let category = category.into().trim().to_owned();
        if category.is_empty() {
            return Err(CourseError::EmptyCategory);
        }
        if progress > 100 {
            return Err(CourseError::InvalidProgress(progress));
        }

        Ok(Self {
            id,
            title,
            description: description.into().trim().to_owned(),
            duration: duration.into().trim().to_owned(),
            lessons_count,
            category,
            progress,
            enrolled,
            instructor: None,
        })
    }

    /// Sets the instructor named on certificates. Blank names are ignored.
    #[must_use]
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        let instructor = instructor.into().trim().to_owned();
        self.instructor = (!instructor.is_empty()).then_some(instructor);
        self
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Human readable duration such as "4 weeks".
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn lessons_count(&self) -> u32 {
        self.lessons_count
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn enrolled(&self) -> bool {
        self.enrolled
    }

    #[must_use]
    pub fn instructor(&self) -> Option<&str> {
        self.instructor.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> CourseStatus {
        match (self.enrolled, self.progress) {
            (_, 100) => CourseStatus::Completed,
            (true, p) if p > 0 => CourseStatus::InProgress,
            _ => CourseStatus::NotStarted,
        }
    }
}

//
// ─── LESSONS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    duration_minutes: u32,
    completed: bool,
}

impl Lesson {
    /// # Errors
    ///
    /// Returns `CourseError::EmptyLessonTitle` for a blank title.
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        duration_minutes: u32,
        completed: bool,
    ) -> Result<Self, CourseError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(CourseError::EmptyLessonTitle);
        }
        Ok(Self {
            id,
            title,
            duration_minutes,
            completed,
        })
    }

    #[must_use]
    pub fn id(&self) -> LessonId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }
}

//
// ─── MATERIALS ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    Presentation,
    Spreadsheet,
    Video,
}

impl MaterialKind {
    /// File format label shown next to the size.
    #[must_use]
    pub fn format_label(self) -> &'static str {
        match self {
            MaterialKind::Presentation => "PDF",
            MaterialKind::Spreadsheet => "XLSX",
            MaterialKind::Video => "MP4",
        }
    }
}

/// Downloadable course material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    title: String,
    kind: MaterialKind,
    size_bytes: u64,
}

impl Material {
    /// # Errors
    ///
    /// Returns `CourseError::EmptyMaterialTitle` for a blank title.
    pub fn new(
        title: impl Into<String>,
        kind: MaterialKind,
        size_bytes: u64,
    ) -> Result<Self, CourseError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(CourseError::EmptyMaterialTitle);
        }
        Ok(Self {
            title,
            kind,
            size_bytes,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn kind(&self) -> MaterialKind {
        self.kind
    }

    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// "PDF, 2.5 MB" style label.
    #[must_use]
    pub fn size_label(&self) -> String {
        format!("{}, {}", self.kind.format_label(), format_size(self.size_bytes))
    }
}

const KB: u64 = 1_000;
const MB: u64 = 1_000_000;

fn format_size(bytes: u64) -> String {
    if bytes >= MB {
        let tenths = (bytes * 10 + MB / 2) / MB;
        format_tenths(tenths, "MB")
    } else if bytes >= KB {
        let tenths = (bytes * 10 + KB / 2) / KB;
        format_tenths(tenths, "KB")
    } else {
        format!("{bytes} B")
    }
}

fn format_tenths(tenths: u64, unit: &str) -> String {
    if tenths % 10 == 0 {
        format!("{} {unit}", tenths / 10)
    } else {
        format!("{}.{} {unit}", tenths / 10, tenths % 10)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
