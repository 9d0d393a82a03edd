use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use crate::context::{AppContext, CurrentLearner};
use crate::views::{
    AuthView, CertificatesView, CourseView, CoursesView, HomeView, ResultsView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/auth", AuthView)] Auth {},
        #[route("/courses", CoursesView)] Courses {},
        #[route("/courses/:course_id", CourseView)] Course { course_id: u64 },
        #[route("/results", ResultsView)] Results {},
        #[route("/certificates", CertificatesView)] Certificates {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    let ctx = use_context::<AppContext>();
    let mut learner = use_context::<CurrentLearner>();
    let navigator = use_navigator();
    let current = learner.get();

    let on_sign_out = move |_: MouseEvent| {
        if ctx.accounts().sign_out().is_ok() {
            learner.set(None);
            navigator.push(Route::Home {});
        }
    };

    rsx! {
        header { class: "topbar",
            Link { class: "brand", to: Route::Home {}, "Staff Academy" }
            nav {
                ul {
                    li { Link { to: Route::Home {}, "Home" } }
                    li { Link { to: Route::Courses {}, "Courses" } }
                    if current.is_some() {
                        li { Link { to: Route::Results {}, "My results" } }
                        li { Link { to: Route::Certificates {}, "Certificates" } }
                    }
                }
            }
            div { class: "account",
                if let Some(profile) = current {
                    span { class: "account-name", "{profile.name()}" }
                    button { class: "btn btn-ghost", onclick: on_sign_out, "Sign out" }
                } else {
                    Link { class: "btn", to: Route::Auth {}, "Sign in" }
                }
            }
        }
    }
}
