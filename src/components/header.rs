use dioxus::prelude::*;

use crate::state::AppState;

/// Home screen header with the logout action
#[component]
pub fn Header() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            class: "header",

            h1 {
                class: "header-title",
                "Find Hospitals"
            }

            // Asks for confirmation before anything changes
            button {
                class: "logout-button",
                onclick: move |_| state.request_logout(),
                "Logout"
            }
        }
    }
}
