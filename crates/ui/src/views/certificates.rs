use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, CurrentLearner};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CertificateCardVm, map_certificate_cards};

#[component]
pub fn CertificatesView() -> Element {
    let ctx = use_context::<AppContext>();
    let learner = use_context::<CurrentLearner>();
    let certificates = ctx.certificates();

    let resource = use_resource(move || {
        let certificates = certificates.clone();
        let profile = learner.get();
        async move {
            let profile = profile.ok_or(ViewError::SignedOut)?;
            let earned = certificates
                .list(profile.id())
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok(map_certificate_cards(&earned))
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page certificates",
            h2 { "My certificates" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { "Pass a course test to earn your first certificate." }
                        Link { class: "btn", to: Route::Courses {}, "Browse courses" }
                    } else {
                        div { class: "certificate-grid",
                            for card in cards {
                                CertificateCard { key: "{card.id}", card }
                            }
                        }
                    }
                },
                ViewState::Error(ViewError::SignedOut) => rsx! {
                    p { "{ViewError::SignedOut.message()}" }
                    Link { class: "btn", to: Route::Auth {}, "Sign in" }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn CertificateCard(card: CertificateCardVm) -> Element {
    rsx! {
        article { class: "certificate",
            p { class: "certificate-kicker", "Certificate of completion" }
            h3 { "{card.course_title}" }
            p { class: "meta", "No. {card.number}" }
            p { class: "meta", "Issued {card.issued} · {card.score_label}" }
            if let Some(instructor) = card.instructor.as_deref() {
                p { class: "meta", "Instructor: {instructor}" }
            }
            button { class: "btn btn-ghost", disabled: true, "Download PDF" }
        }
    }
}
