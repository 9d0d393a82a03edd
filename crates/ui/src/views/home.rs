use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, CurrentLearner};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    courses: usize,
    categories: usize,
}

const FEATURES: [(&str, &str); 3] = [
    (
        "Courses for every team",
        "Sales, management, security, finance and more in one catalog.",
    ),
    (
        "Tests with instant results",
        "Finish a course with a short test and see your score right away.",
    ),
    (
        "Certificates",
        "Every passed test earns a numbered certificate for your profile.",
    ),
];

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let learner = use_context::<CurrentLearner>();
    let catalog = ctx.catalog();
    let threshold = ctx.pass_threshold();

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            let courses = catalog.list_courses().await.map_err(|_| ViewError::Unknown)?;
            let categories = catalog.categories().await.map_err(|_| ViewError::Unknown)?;
            Ok(HomeData {
                courses: courses.len(),
                categories: categories.len(),
            })
        }
    });
    let state = view_state_from_resource(resource);
    let current = learner.get();

    rsx! {
        div { class: "page home",
            section { class: "hero",
                h2 { "Corporate training portal" }
                p { "Grow your professional skills with courses built for our teams." }
                if let Some(profile) = current {
                    p { class: "greeting", "Welcome back, {profile.name()}!" }
                    Link { class: "btn", to: Route::Courses {}, "Go to courses" }
                } else {
                    Link { class: "btn", to: Route::Auth {}, "Start learning" }
                }
            }

            section { class: "features",
                for (title, text) in FEATURES {
                    div { class: "feature",
                        h3 { "{title}" }
                        p { "{text}" }
                    }
                }
            }

            section { class: "stats",
                match state {
                    ViewState::Idle => rsx! {
                        p { "Idle" }
                    },
                    ViewState::Loading => rsx! {
                        p { "Loading..." }
                    },
                    ViewState::Ready(data) => rsx! {
                        p { "Courses available: {data.courses}" }
                        p { "Categories: {data.categories}" }
                    },
                    ViewState::Error(err) => rsx! {
                        p { "{err.message()}" }
                    },
                }
                p { "Passing score for tests: {threshold}" }
            }
        }
    }
}
