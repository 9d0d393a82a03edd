use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, map_course_cards};

#[derive(Clone, Debug, PartialEq)]
struct CoursesData {
    categories: Vec<String>,
    cards: Vec<CourseCardVm>,
}

#[component]
pub fn CoursesView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let mut category = use_signal(|| None::<String>);

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let selected = category();
        async move {
            let categories = catalog.categories().await.map_err(|_| ViewError::Unknown)?;
            let courses = match selected.as_deref() {
                Some(name) => catalog.list_courses_in_category(name).await,
                None => catalog.list_courses().await,
            }
            .map_err(|_| ViewError::Unknown)?;
            Ok(CoursesData {
                categories,
                cards: map_course_cards(&courses),
            })
        }
    });
    let state = view_state_from_resource(resource);
    let selected = category();

    rsx! {
        div { class: "page courses",
            h2 { "Course catalog" }
            p { "Choose a course to develop your professional skills." }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    div { class: "filters",
                        button {
                            class: if selected.is_none() { "chip active" } else { "chip" },
                            onclick: move |_| category.set(None),
                            "All"
                        }
                        for name in data.categories {
                            button {
                                key: "{name}",
                                class: if selected.as_deref() == Some(name.as_str()) { "chip active" } else { "chip" },
                                onclick: {
                                    let name = name.clone();
                                    move |_| category.set(Some(name.clone()))
                                },
                                "{name}"
                            }
                        }
                    }
                    if data.cards.is_empty() {
                        p { "No courses in this category yet." }
                    } else {
                        div { class: "course-grid",
                            for card in data.cards {
                                CourseCard { key: "{card.id}", card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn CourseCard(card: CourseCardVm) -> Element {
    rsx! {
        article { class: "course-card",
            div { class: "course-card-head",
                span { class: "badge", "{card.category}" }
                span { class: "status", "{card.status_label}" }
            }
            h3 { "{card.title}" }
            p { class: "muted", "{card.description}" }
            p { class: "meta", "{card.duration} · {card.lessons_label}" }
            if let Some(progress) = card.progress {
                div { class: "progress",
                    span { "Progress: {progress}%" }
                    div { class: "bar",
                        div { class: "fill", style: "width: {progress}%" }
                    }
                }
            }
            Link { class: "btn", to: Route::Course { course_id: card.id }, "{card.action_label}" }
        }
    }
}
