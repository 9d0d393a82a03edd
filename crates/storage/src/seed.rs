//! Demo catalog and sample learner history.
//!
//! The portal has no back office, so every course, lesson, material and
//! test question is loaded from here at start-up.

use academy_core::model::{
    Course, CourseError, CourseId, LearnerId, Lesson, LessonId, Material, MaterialKind,
    PassThreshold, Question, QuestionError, QuestionId, Quiz, QuizError,
};
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::repository::{NewCertificateRecord, NewTestResultRecord, Storage, StorageError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeedError {
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("seed course {0} is missing")]
    MissingCourse(CourseId),
}

pub const SALES_COURSE: CourseId = CourseId::new(1);
pub const PROJECT_COURSE: CourseId = CourseId::new(2);
pub const SECURITY_COURSE: CourseId = CourseId::new(3);
pub const COMMUNICATION_COURSE: CourseId = CourseId::new(4);
pub const FINANCE_COURSE: CourseId = CourseId::new(5);
pub const OFFICE_TOOLS_COURSE: CourseId = CourseId::new(6);

struct CourseSeed {
    id: CourseId,
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    lessons_count: u32,
    category: &'static str,
    progress: u8,
    enrolled: bool,
    instructor: &'static str,
    questions: [QuestionSeed; 3],
}

struct QuestionSeed {
    prompt: &'static str,
    options: [&'static str; 4],
    correct: usize,
}

const COURSES: [CourseSeed; 6] = [
    CourseSeed {
        id: SALES_COURSE,
        title: "Sales and Customer Relations Fundamentals",
        description: "Learn effective customer communication, how to uncover needs and how to close deals",
        duration: "4 weeks",
        lessons_count: 12,
        category: "Sales",
        progress: 45,
        enrolled: true,
        instructor: "Elena Volkova",
        questions: [
            QuestionSeed {
                prompt: "What is the main principle of effective customer communication?",
                options: [
                    "Talk about the product as much as possible",
                    "Listen and understand the customer's needs",
                    "Close the deal quickly",
                    "Offer the biggest discount",
                ],
                correct: 1,
            },
            QuestionSeed {
                prompt: "What is \"active listening\"?",
                options: [
                    "Listening to music while working",
                    "Attentive listening with feedback",
                    "Writing down everything the customer says",
                    "Listening to several people at once",
                ],
                correct: 1,
            },
            QuestionSeed {
                prompt: "Which method works best for uncovering needs?",
                options: [
                    "Closed questions",
                    "Statements",
                    "Open questions",
                    "Direct selling",
                ],
                correct: 2,
            },
        ],
    },
    CourseSeed {
        id: PROJECT_COURSE,
        title: "Project Management",
        description: "Get to know Agile, Scrum and Kanban and learn to plan and control projects",
        duration: "6 weeks",
        lessons_count: 18,
        category: "Management",
        progress: 0,
        enrolled: false,
        instructor: "Dmitry Orlov",
        questions: [
            QuestionSeed {
                prompt: "What is a sprint in Scrum?",
                options: [
                    "A fixed-length iteration of work",
                    "A daily status meeting",
                    "The final project report",
                    "An urgent bug fix",
                ],
                correct: 0,
            },
            QuestionSeed {
                prompt: "What does a Kanban board primarily visualise?",
                options: [
                    "The project budget",
                    "Team salaries",
                    "The flow of work items",
                    "Customer feedback",
                ],
                correct: 2,
            },
            QuestionSeed {
                prompt: "Who owns the product backlog in Scrum?",
                options: [
                    "The Scrum Master",
                    "The Product Owner",
                    "The development team",
                    "The customer",
                ],
                correct: 1,
            },
        ],
    },
    CourseSeed {
        id: SECURITY_COURSE,
        title: "Corporate Security and Confidentiality",
        description: "Information security basics, handling confidential data and protection from cyber threats",
        duration: "3 weeks",
        lessons_count: 9,
        category: "Security",
        progress: 100,
        enrolled: true,
        instructor: "Alexey Smirnov",
        questions: [
            QuestionSeed {
                prompt: "What should you do with a suspicious email attachment?",
                options: [
                    "Open it to check the contents",
                    "Forward it to colleagues",
                    "Report it to the security team without opening",
                    "Reply and ask the sender",
                ],
                correct: 2,
            },
            QuestionSeed {
                prompt: "Which password is the strongest?",
                options: [
                    "password123",
                    "A long unique passphrase",
                    "Your birth date",
                    "The company name",
                ],
                correct: 1,
            },
            QuestionSeed {
                prompt: "Where may confidential documents be stored?",
                options: [
                    "Only in approved corporate systems",
                    "On a personal USB stick",
                    "In a public cloud folder",
                    "In a personal email inbox",
                ],
                correct: 0,
            },
        ],
    },
    CourseSeed {
        id: COMMUNICATION_COURSE,
        title: "Effective Team Communication",
        description: "Build business communication skills, present ideas and work constructively in a team",
        duration: "3 weeks",
        lessons_count: 10,
        category: "Soft Skills",
        progress: 0,
        enrolled: false,
        instructor: "Olga Kuznetsova",
        questions: [
            QuestionSeed {
                prompt: "What makes feedback constructive?",
                options: [
                    "It criticises the person",
                    "It is given only in writing",
                    "It is delayed until the annual review",
                    "It is specific and focused on behaviour",
                ],
                correct: 3,
            },
            QuestionSeed {
                prompt: "How should a meeting usually start?",
                options: [
                    "With a clear agenda and goal",
                    "With small talk only",
                    "With the most senior person's opinion",
                    "With the action items",
                ],
                correct: 0,
            },
            QuestionSeed {
                prompt: "What helps resolve a disagreement in a team?",
                options: [
                    "Avoiding the topic",
                    "Escalating immediately",
                    "Discussing interests rather than positions",
                    "Voting without discussion",
                ],
                correct: 2,
            },
        ],
    },
    CourseSeed {
        id: FINANCE_COURSE,
        title: "Financial Literacy for Employees",
        description: "Accounting basics, budgeting and financial planning in an organisation",
        duration: "5 weeks",
        lessons_count: 15,
        category: "Finance",
        progress: 20,
        enrolled: true,
        instructor: "Maria Petrova",
        questions: [
            QuestionSeed {
                prompt: "What is a budget?",
                options: [
                    "A record of past expenses only",
                    "A financial plan of income and expenses",
                    "A tax declaration",
                    "A bank statement",
                ],
                correct: 1,
            },
            QuestionSeed {
                prompt: "What does cash flow describe?",
                options: [
                    "The movement of money in and out",
                    "The total value of assets",
                    "The number of invoices",
                    "The company's share price",
                ],
                correct: 0,
            },
            QuestionSeed {
                prompt: "Which of these is an operating expense?",
                options: [
                    "Buying a new building",
                    "A long-term loan",
                    "Office rent",
                    "Issuing shares",
                ],
                correct: 2,
            },
        ],
    },
    CourseSeed {
        id: OFFICE_TOOLS_COURSE,
        title: "Digital Tools for the Modern Office",
        description: "Cloud services, CRM systems, task managers and video conferencing tools",
        duration: "4 weeks",
        lessons_count: 14,
        category: "IT",
        progress: 0,
        enrolled: false,
        instructor: "Ivan Sokolov",
        questions: [
            QuestionSeed {
                prompt: "What is a CRM system used for?",
                options: [
                    "Editing photos",
                    "Managing customer relationships",
                    "Compiling source code",
                    "Storing backups only",
                ],
                correct: 1,
            },
            QuestionSeed {
                prompt: "What is the main benefit of shared cloud documents?",
                options: [
                    "They cannot be edited",
                    "They work only offline",
                    "Several people can edit them at the same time",
                    "They never need access control",
                ],
                correct: 2,
            },
            QuestionSeed {
                prompt: "What should you check before a video call?",
                options: [
                    "Camera, microphone and connection",
                    "The weather forecast",
                    "Nothing, it always works",
                    "Only the meeting length",
                ],
                correct: 0,
            },
        ],
    },
];

const LESSONS: [(&str, u32); 5] = [
    ("Course introduction", 15),
    ("Core concepts", 25),
    ("Practical application", 30),
    ("Advanced techniques", 40),
    ("Final assessment", 20),
];

const MATERIALS: [(&str, MaterialKind, u64); 3] = [
    ("Course presentation", MaterialKind::Presentation, 2_500_000),
    ("Templates and checklists", MaterialKind::Spreadsheet, 1_200_000),
    ("Video lectures", MaterialKind::Video, 145_000_000),
];

fn build_course(seed: &CourseSeed) -> Result<Course, SeedError> {
    let course = Course::new(
        seed.id,
        seed.title,
        seed.description,
        seed.duration,
        seed.lessons_count,
        seed.category,
        seed.progress,
        seed.enrolled,
    )?
    .with_instructor(seed.instructor);
    Ok(course)
}

/// Lessons are marked complete in proportion to the course progress.
fn build_lessons(progress: u8) -> Result<Vec<Lesson>, SeedError> {
    let total = LESSONS.len();
    let done = usize::from(progress) * total / 100;
    LESSONS
        .iter()
        .enumerate()
        .map(|(index, (title, minutes))| {
            Lesson::new(LessonId::new(index as u64 + 1), *title, *minutes, index < done)
                .map_err(SeedError::from)
        })
        .collect()
}

fn build_materials() -> Result<Vec<Material>, SeedError> {
    MATERIALS
        .iter()
        .map(|(title, kind, size)| Material::new(*title, *kind, *size).map_err(SeedError::from))
        .collect()
}

fn build_quiz(seed: &CourseSeed, threshold: PassThreshold) -> Result<Quiz, SeedError> {
    let questions = seed
        .questions
        .iter()
        .enumerate()
        .map(|(index, q)| {
            Question::new(
                QuestionId::new(index as u64 + 1),
                q.prompt,
                q.options.iter().map(|o| (*o).to_owned()).collect(),
                q.correct,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Quiz::new(seed.id, questions, threshold)?)
}

/// Load the demo catalog (courses, lessons, materials, quizzes).
///
/// # Errors
///
/// Returns `SeedError` if a seed entry fails validation or cannot be stored.
pub async fn seed_catalog(storage: &Storage, threshold: PassThreshold) -> Result<(), SeedError> {
    for seed in &COURSES {
        let course = build_course(seed)?;
        storage.courses.upsert_course(&course).await?;
        storage
            .courses
            .set_lessons(seed.id, build_lessons(seed.progress)?)
            .await?;
        storage.courses.set_materials(seed.id, build_materials()?).await?;
        storage.quizzes.upsert_quiz(&build_quiz(seed, threshold)?).await?;
    }
    Ok(())
}

/// In-memory storage preloaded with the demo catalog.
///
/// # Errors
///
/// See [`seed_catalog`].
pub async fn demo_storage(threshold: PassThreshold) -> Result<Storage, SeedError> {
    let storage = Storage::in_memory();
    seed_catalog(&storage, threshold).await?;
    Ok(storage)
}

/// `(course, days before now, score, attempts)` for the sample results.
const SAMPLE_RESULTS: [(CourseId, i64, u8, u32); 3] = [
    (SALES_COURSE, 1, 85, 1),
    (SECURITY_COURSE, 6, 92, 1),
    (FINANCE_COURSE, 11, 78, 2),
];

/// Give a freshly signed-in learner the history shown on the demo
/// dashboards: three passed tests and certificates for two of them.
///
/// # Errors
///
/// Returns `SeedError::MissingCourse` if the catalog was not seeded first.
pub async fn seed_sample_history(
    storage: &Storage,
    learner_id: LearnerId,
    certificate_prefix: &str,
    threshold: PassThreshold,
    now: DateTime<Utc>,
) -> Result<(), SeedError> {
    // Sample scores are recorded against the live threshold so the
    // dashboard never shows a passed badge below it.
    for (course_id, days_ago, score, attempts) in SAMPLE_RESULTS {
        let course = storage
            .courses
            .get_course(course_id)
            .await?
            .ok_or(SeedError::MissingCourse(course_id))?;
        let completed_at = now - Duration::days(days_ago);
        let passed = threshold.is_met_by(score);

        storage
            .results
            .append_result(NewTestResultRecord {
                learner_id,
                course_id,
                course_title: course.title().to_owned(),
                completed_at,
                score,
                passed,
                attempts,
            })
            .await?;

        if passed && course_id != SALES_COURSE {
            storage
                .certificates
                .insert_certificate(NewCertificateRecord {
                    learner_id,
                    course_id,
                    course_title: course.title().to_owned(),
                    issued_at: completed_at,
                    score,
                    instructor: course.instructor().unwrap_or_default().to_owned(),
                    number_prefix: certificate_prefix.to_owned(),
                })
                .await?;
        }
    }
    Ok(())
}
