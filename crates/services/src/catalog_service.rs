use std::sync::Arc;

use academy_core::model::{Course, CourseId, Lesson, Material, round_half_up_percent};
use storage::repository::CourseRepository;
use tracing::debug;

use crate::error::CatalogServiceError;

/// Everything the course page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDetail {
    pub course: Course,
    pub lessons: Vec<Lesson>,
    pub materials: Vec<Material>,
}

impl CourseDetail {
    #[must_use]
    pub fn completed_lessons(&self) -> usize {
        self.lessons.iter().filter(|l| l.completed()).count()
    }

    /// Share of completed lessons, rounded half up; 0 without lessons.
    #[must_use]
    pub fn lesson_completion_percent(&self) -> u8 {
        let done = u32::try_from(self.completed_lessons()).unwrap_or(u32::MAX);
        let total = u32::try_from(self.lessons.len()).unwrap_or(u32::MAX);
        round_half_up_percent(done, total)
    }
}

/// Read-only access to the course catalog.
#[derive(Clone)]
pub struct CatalogService {
    courses: Arc<dyn CourseRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    /// All courses in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if repository access fails.
    pub async fn list_courses(&self) -> Result<Vec<Course>, CatalogServiceError> {
        let courses = self.courses.list_courses().await?;
        debug!(count = courses.len(), "listed courses");
        Ok(courses)
    }

    /// Courses whose category matches, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if repository access fails.
    pub async fn list_courses_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<Course>, CatalogServiceError> {
        let category = category.trim();
        let courses = self
            .courses
            .list_courses()
            .await?
            .into_iter()
            .filter(|c| c.category().eq_ignore_ascii_case(category))
            .collect();
        Ok(courses)
    }

    /// Distinct categories in the order they first appear in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if repository access fails.
    pub async fn categories(&self) -> Result<Vec<String>, CatalogServiceError> {
        let mut categories: Vec<String> = Vec::new();
        for course in self.courses.list_courses().await? {
            if !categories.iter().any(|c| c == course.category()) {
                categories.push(course.category().to_owned());
            }
        }
        Ok(categories)
    }

    /// Fetch a course by ID.
    ///
    /// Returns `Ok(None)` when the course does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if repository access fails.
    pub async fn get_course(&self, id: CourseId) -> Result<Option<Course>, CatalogServiceError> {
        let course = self.courses.get_course(id).await?;
        Ok(course)
    }

    /// Course with its lessons and materials.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::CourseNotFound` for an unknown id.
    /// Returns `CatalogServiceError::Storage` if repository access fails.
    pub async fn course_detail(&self, id: CourseId) -> Result<CourseDetail, CatalogServiceError> {
        let course = self
            .courses
            .get_course(id)
            .await?
            .ok_or(CatalogServiceError::CourseNotFound(id))?;
        let lessons = self.courses.list_lessons(id).await?;
        let materials = self.courses.list_materials(id).await?;
        debug!(course_id = %id, lessons = lessons.len(), "loaded course detail");
        Ok(CourseDetail {
            course,
            lessons,
            materials,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::model::{LessonId, PassThreshold};
    use storage::seed::{demo_storage, SALES_COURSE, SECURITY_COURSE};

    async fn service() -> CatalogService {
        let storage = demo_storage(PassThreshold::default()).await.unwrap();
        CatalogService::new(Arc::clone(&storage.courses))
    }

    #[tokio::test]
    async fn categories_are_distinct_in_catalog_order() {
        let categories = service().await.categories().await.unwrap();
        assert_eq!(
            categories,
            vec!["Sales", "Management", "Security", "Soft Skills", "Finance", "IT"]
        );
    }

    #[tokio::test]
    async fn category_filter_ignores_case() {
        let courses = service()
            .await
            .list_courses_in_category(" security ")
            .await
            .unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].id(), SECURITY_COURSE);
    }

    #[tokio::test]
    async fn course_detail_reports_lesson_completion() {
        let detail = service().await.course_detail(SALES_COURSE).await.unwrap();
        assert_eq!(detail.lessons.len(), 5);
        assert_eq!(detail.materials.len(), 3);
        assert_eq!(detail.completed_lessons(), 2);
        assert_eq!(detail.lesson_completion_percent(), 40);
    }

    #[tokio::test]
    async fn unknown_course_is_an_error() {
        let service = service().await;
        let missing = CourseId::new(99);
        assert!(service.get_course(missing).await.unwrap().is_none());
        assert!(matches!(
            service.course_detail(missing).await,
            Err(CatalogServiceError::CourseNotFound(id)) if id == missing
        ));
    }

    #[test]
    fn completion_without_lessons_is_zero() {
        let course = Course::new(CourseId::new(1), "Empty", "", "", 0, "IT", 0, false).unwrap();
        let mut detail = CourseDetail {
            course,
            lessons: Vec::new(),
            materials: Vec::new(),
        };
        assert_eq!(detail.lesson_completion_percent(), 0);

        detail.lessons = vec![
            Lesson::new(LessonId::new(1), "One", 10, true).unwrap(),
            Lesson::new(LessonId::new(2), "Two", 10, false).unwrap(),
            Lesson::new(LessonId::new(3), "Three", 10, false).unwrap(),
        ];
        // 1/3 = 33.3
        assert_eq!(detail.lesson_completion_percent(), 33);
    }
}
