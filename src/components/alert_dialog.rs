use dioxus::prelude::*;

use crate::state::AppState;

/// Blocking modal for the active alert, if any.
///
/// The backdrop covers the whole screen so nothing below can be used until
/// the alert is answered. Clicking the backdrop does not dismiss it.
#[component]
pub fn AlertDialog() -> Element {
    let mut state = use_context::<AppState>();
    let alert = state.shell.read().alert.clone();

    let Some(alert) = alert else {
        return rsx! {};
    };
    let has_cancel = alert.has_cancel();
    let confirm_label = alert.confirm_label();

    rsx! {
        div {
            class: "alert-backdrop",
            onclick: move |evt| evt.stop_propagation(),

            div {
                class: "alert",
                role: "alertdialog",

                div {
                    class: "alert-title",
                    "{alert.title}"
                }

                // Keep line breaks of multi-line messages
                div {
                    class: "alert-message",
                    for line in alert.message.lines() {
                        p { "{line}" }
                    }
                }

                div {
                    class: "alert-buttons",
                    if has_cancel {
                        button {
                            class: "alert-button",
                            onclick: move |_| state.resolve_alert(false),
                            "Cancel"
                        }
                    }
                    button {
                        class: "alert-button alert-button--primary",
                        class: if has_cancel { "alert-button--destructive" },
                        onclick: move |_| state.resolve_alert(true),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
