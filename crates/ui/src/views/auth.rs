use academy_core::model::{RegistrationForm, SignInForm};
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::{AppContext, CurrentLearner};
use crate::routes::Route;
use crate::vm::{AuthMode, auth_error_message};

#[component]
pub fn AuthView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut learner = use_context::<CurrentLearner>();
    let navigator = use_navigator();

    let mut mode = use_signal(AuthMode::default);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut position = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let accounts = ctx.accounts();
        let current_mode = mode();
        busy.set(true);
        spawn(async move {
            let outcome = match current_mode {
                AuthMode::SignIn => {
                    let form = SignInForm {
                        email: email(),
                        password: password(),
                    };
                    accounts.sign_in(&form).await
                }
                AuthMode::Register => {
                    let form = RegistrationForm {
                        name: name(),
                        email: email(),
                        password: password(),
                        position: position(),
                        department: department(),
                    };
                    accounts.register(form).await
                }
            };
            busy.set(false);
            match outcome {
                Ok(profile) => {
                    error.set(None);
                    password.set(String::new());
                    learner.set(Some(profile));
                    navigator.push(Route::Courses {});
                }
                Err(err) => error.set(Some(auth_error_message(&err))),
            }
        });
    };

    let current_mode = mode();
    let tab_class = |tab: AuthMode| if tab == current_mode { "tab active" } else { "tab" };

    rsx! {
        div { class: "page auth",
            h2 { "{current_mode.title()}" }
            div { class: "tabs",
                button {
                    class: tab_class(AuthMode::SignIn),
                    onclick: move |_| {
                        mode.set(AuthMode::SignIn);
                        error.set(None);
                    },
                    "Sign in"
                }
                button {
                    class: tab_class(AuthMode::Register),
                    onclick: move |_| {
                        mode.set(AuthMode::Register);
                        error.set(None);
                    },
                    "Register"
                }
            }

            form { class: "auth-form", onsubmit: on_submit,
                if current_mode == AuthMode::Register {
                    label { "Full name"
                        input {
                            r#type: "text",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                }
                label { "Email"
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { "Password"
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                if current_mode == AuthMode::Register {
                    label { "Position"
                        input {
                            r#type: "text",
                            value: "{position}",
                            oninput: move |evt| position.set(evt.value()),
                        }
                    }
                    label { "Department"
                        input {
                            r#type: "text",
                            value: "{department}",
                            oninput: move |evt| department.set(evt.value()),
                        }
                    }
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                button { class: "btn", r#type: "submit", disabled: busy(),
                    "{current_mode.title()}"
                }
            }
            p { class: "hint", "This is a demo portal: any email and password will do." }
        }
    }
}
