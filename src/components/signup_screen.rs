use dioxus::prelude::*;

use super::auth_hooks::use_request_scope;
use super::form_field::FormField;
use crate::config::CONFIG;
use crate::forms::SignupForm;
use crate::request::complete_after;
use crate::state::AppState;

#[component]
pub fn SignupScreen() -> Element {
    let mut state = use_context::<AppState>();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let requests = use_request_scope();

    let handle_signup = move |_| {
        let form = SignupForm {
            name: name(),
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
        };
        let details = match form.validate() {
            Ok(details) => details,
            Err(e) => {
                state.show_validation_error(e);
                return;
            }
        };

        loading.set(true);
        let ticket = requests.begin();
        let delay = CONFIG.read().auth.simulated_delay();
        tracing::debug!(?delay, "Starting simulated signup");
        spawn(async move {
            let _ = complete_after(ticket, delay, move || {
                loading.set(false);
                state.complete_signup(&details);
            })
            .await;
        });
    };

    rsx! {
        div {
            class: "screen auth-screen",

            div {
                class: "auth-header",
                h1 { class: "auth-title", "Create Account" }
                p { class: "auth-subtitle", "Sign up to get started" }
            }

            div {
                class: "form-container",

                FormField {
                    label: "Full Name",
                    placeholder: "Enter your full name",
                    value: name(),
                    disabled: loading(),
                    on_input: move |value| name.set(value),
                }

                FormField {
                    label: "Email",
                    placeholder: "Enter your email",
                    input_type: "email",
                    value: email(),
                    disabled: loading(),
                    on_input: move |value| email.set(value),
                }

                FormField {
                    label: "Password",
                    placeholder: "Enter your password",
                    input_type: "password",
                    value: password(),
                    disabled: loading(),
                    on_input: move |value| password.set(value),
                }

                FormField {
                    label: "Confirm Password",
                    placeholder: "Confirm your password",
                    input_type: "password",
                    value: confirm_password(),
                    disabled: loading(),
                    on_input: move |value| confirm_password.set(value),
                }

                button {
                    class: "primary-button",
                    class: if loading() { "primary-button--disabled" },
                    disabled: loading(),
                    onclick: handle_signup,
                    if loading() { "Creating Account..." } else { "Sign Up" }
                }

                div {
                    class: "auth-switch",
                    span { class: "auth-switch-text", "Already have an account? " }
                    button {
                        class: "link-button",
                        onclick: move |_| state.go_back(),
                        "Login"
                    }
                }
            }
        }
    }
}
