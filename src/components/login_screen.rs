use dioxus::prelude::*;

use super::auth_hooks::use_request_scope;
use super::form_field::FormField;
use crate::config::CONFIG;
use crate::forms::LoginForm;
use crate::navigation::Route;
use crate::request::complete_after;
use crate::state::AppState;

#[component]
pub fn LoginScreen() -> Element {
    let mut state = use_context::<AppState>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let requests = use_request_scope();

    let handle_login = move |_| {
        let form = LoginForm {
            email: email(),
            password: password(),
        };
        let credentials = match form.validate() {
            Ok(credentials) => credentials,
            Err(e) => {
                state.show_validation_error(e);
                return;
            }
        };

        loading.set(true);
        let ticket = requests.begin();
        let delay = CONFIG.read().auth.simulated_delay();
        tracing::debug!(?delay, "Starting simulated login");
        spawn(async move {
            let _ = complete_after(ticket, delay, move || {
                loading.set(false);
                state.complete_login(&credentials);
            })
            .await;
        });
    };

    rsx! {
        div {
            class: "screen auth-screen",

            div {
                class: "auth-header",
                h1 { class: "auth-title", "Welcome Back" }
                p { class: "auth-subtitle", "Login to your account" }
            }

            div {
                class: "form-container",

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

                button {
                    class: "primary-button",
                    class: if loading() { "primary-button--disabled" },
                    disabled: loading(),
                    onclick: handle_login,
                    if loading() { "Logging in..." } else { "Login" }
                }

                div {
                    class: "auth-switch",
                    span { class: "auth-switch-text", "Don't have an account? " }
                    button {
                        class: "link-button",
                        onclick: move |_| state.push_route(Route::Signup),
                        "Sign Up"
                    }
                }
            }
        }
    }
}
