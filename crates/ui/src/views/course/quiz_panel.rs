use academy_core::model::CourseId;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, CurrentLearner};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizIntent, QuizOutcomeVm, QuizVm, start_quiz};

#[component]
pub fn QuizPanel(course_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let learner = use_context::<CurrentLearner>();
    let quizzes = ctx.quizzes();

    let vm = use_signal(|| None::<QuizVm>);
    let error = use_signal(|| None::<ViewError>);
    let busy = use_signal(|| false);

    let quizzes_for_resource = quizzes.clone();
    let resource = use_resource(move || {
        let quizzes = quizzes_for_resource.clone();
        let mut vm = vm;
        async move {
            let started = start_quiz(&quizzes, CourseId::new(course_id)).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut error = error;
        let mut busy = busy;

        match intent {
            QuizIntent::Select { question, option } => {
                let result = vm
                    .write()
                    .as_mut()
                    .map_or(Err(ViewError::Unknown), |v| v.select(question, option));
                error.set(result.err());
            }
            QuizIntent::Retry => {
                let result = vm
                    .write()
                    .as_mut()
                    .map_or(Err(ViewError::Unknown), QuizVm::retry);
                error.set(result.err());
            }
            QuizIntent::Submit => {
                if busy() {
                    return;
                }
                let Some(profile) = learner.get() else {
                    error.set(Some(ViewError::SignedOut));
                    return;
                };
                let quizzes = quizzes.clone();
                busy.set(true);
                spawn(async move {
                    let taken = vm.write().take();
                    let Some(mut local) = taken else {
                        busy.set(false);
                        error.set(Some(ViewError::Unknown));
                        return;
                    };

                    let result = local.submit(&quizzes, profile.id()).await;

                    // A failed submit leaves the attempt in answering, so it can be sent again.
                    vm.set(Some(local));
                    busy.set(false);
                    error.set(result.err());
                });
            }
        }
    });

    let state = view_state_from_resource(resource);
    let signed_in = learner.get().is_some();

    rsx! {
        section { class: "quiz",
            h3 { "Final test" }
            if !signed_in {
                p { "Sign in to take the test and earn a certificate." }
                Link { class: "btn", to: Route::Auth {}, "Sign in" }
            } else {
                match state {
                    ViewState::Idle => rsx! {
                        p { "Idle" }
                    },
                    ViewState::Loading => rsx! {
                        p { "Loading..." }
                    },
                    ViewState::Ready(()) => rsx! {
                        QuizBody {
                            vm: vm.read().clone(),
                            busy: busy(),
                            dispatch,
                        }
                    },
                    ViewState::Error(err) => rsx! {
                        p { "{err.message()}" }
                    },
                }
                if let Some(err) = error() {
                    p { class: "form-error", "{err.message()}" }
                }
            }
        }
    }
}

#[component]
fn QuizBody(vm: Option<QuizVm>, busy: bool, dispatch: Callback<QuizIntent>) -> Element {
    let Some(vm) = vm else {
        return rsx! {
            p { "Loading..." }
        };
    };

    if let Some(outcome) = vm.outcome().cloned() {
        return rsx! {
            QuizResult { outcome, can_retry: vm.can_retry(), dispatch }
        };
    }

    let questions = vm.questions();
    rsx! {
        p { class: "meta", "{vm.threshold_label()} · Attempt {vm.attempt_number()}" }
        for question in questions {
            fieldset { key: "{question.id}", class: "question",
                legend { "{question.number}. {question.prompt}" }
                for option in question.options {
                    button {
                        key: "{option.index}",
                        class: if option.selected { "option selected" } else { "option" },
                        onclick: move |_| dispatch.call(QuizIntent::Select {
                            question: question.id,
                            option: option.index,
                        }),
                        "{option.label}"
                    }
                }
            }
        }
        p { class: "meta", "{vm.progress_label()}" }
        button {
            class: "btn",
            disabled: busy || !vm.can_submit(),
            onclick: move |_| dispatch.call(QuizIntent::Submit),
            "Submit test"
        }
    }
}

#[component]
fn QuizResult(outcome: QuizOutcomeVm, can_retry: bool, dispatch: Callback<QuizIntent>) -> Element {
    rsx! {
        div { class: if outcome.passed { "quiz-result passed" } else { "quiz-result failed" },
            p { class: "score", "{outcome.percentage}%" }
            h4 { "{outcome.headline}" }
            p { "{outcome.detail}" }
            if let Some(number) = outcome.certificate_number.as_deref() {
                p { "Certificate number: {number}" }
            }
            div { class: "actions",
                if can_retry {
                    button {
                        class: "btn",
                        onclick: move |_| dispatch.call(QuizIntent::Retry),
                        "Try again"
                    }
                }
                Link { class: "btn btn-ghost", to: Route::Results {}, "View results" }
                if outcome.passed {
                    Link { class: "btn btn-ghost", to: Route::Certificates {}, "My certificates" }
                }
            }
        }
    }
}
