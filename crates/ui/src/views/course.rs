mod quiz_panel;

use academy_core::model::CourseId;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseDetailVm, LessonVm, MaterialVm, map_course_detail};

pub use quiz_panel::QuizPanel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CourseTab {
    Lessons,
    Materials,
    Test,
}

impl CourseTab {
    const ALL: [CourseTab; 3] = [CourseTab::Lessons, CourseTab::Materials, CourseTab::Test];

    fn label(self) -> &'static str {
        match self {
            CourseTab::Lessons => "Lessons",
            CourseTab::Materials => "Materials",
            CourseTab::Test => "Final test",
        }
    }
}

#[component]
pub fn CourseView(course_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let mut tab = use_signal(|| CourseTab::Lessons);

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            let detail = catalog
                .course_detail(CourseId::new(course_id))
                .await
                .map_err(|err| match err {
                    services::CatalogServiceError::CourseNotFound(_) => ViewError::NotFound,
                    _ => ViewError::Unknown,
                })?;
            Ok(map_course_detail(&detail))
        }
    });
    let state = view_state_from_resource(resource);
    let active = tab();

    rsx! {
        div { class: "page course",
            Link { class: "back", to: Route::Courses {}, "← Back to courses" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(detail) => rsx! {
                    CourseHeader { detail: detail.clone() }
                    div { class: "tabs",
                        for candidate in CourseTab::ALL {
                            button {
                                key: "{candidate.label()}",
                                class: if candidate == active { "tab active" } else { "tab" },
                                onclick: move |_| tab.set(candidate),
                                "{candidate.label()}"
                            }
                        }
                    }
                    match active {
                        CourseTab::Lessons => rsx! {
                            LessonList { lessons: detail.lessons.clone() }
                        },
                        CourseTab::Materials => rsx! {
                            MaterialList { materials: detail.materials.clone() }
                        },
                        CourseTab::Test => rsx! {
                            QuizPanel { course_id }
                        },
                    }
                },
                ViewState::Error(err) => rsx! {
                    h2 { "Course" }
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn CourseHeader(detail: CourseDetailVm) -> Element {
    let card = &detail.card;
    rsx! {
        section { class: "course-header",
            span { class: "badge", "{card.category}" }
            h2 { "{card.title}" }
            p { class: "muted", "{card.description}" }
            p { class: "meta", "{card.duration} · {card.lessons_label} · {card.status_label}" }
            if let Some(instructor) = detail.instructor.as_deref() {
                p { class: "meta", "Instructor: {instructor}" }
            }
            div { class: "progress",
                span { "{detail.lessons_progress}" }
                div { class: "bar",
                    div { class: "fill", style: "width: {detail.lessons_percent}%" }
                }
            }
        }
    }
}

#[component]
fn LessonList(lessons: Vec<LessonVm>) -> Element {
    rsx! {
        ol { class: "lessons",
            for lesson in lessons {
                li {
                    key: "{lesson.number}",
                    class: if lesson.completed { "lesson done" } else { "lesson" },
                    span { class: "lesson-number", "{lesson.number}" }
                    span { class: "lesson-title", "{lesson.title}" }
                    span { class: "lesson-duration", "{lesson.duration_label}" }
                    if lesson.completed {
                        span { class: "lesson-check", "✓" }
                    }
                }
            }
        }
    }
}

#[component]
fn MaterialList(materials: Vec<MaterialVm>) -> Element {
    rsx! {
        ul { class: "materials",
            for material in materials {
                li { key: "{material.title}", class: "material {material.icon_class}",
                    span { class: "material-title", "{material.title}" }
                    span { class: "material-size", "{material.size_label}" }
                    button { class: "btn btn-ghost", disabled: true, "Download" }
                }
            }
        }
    }
}
