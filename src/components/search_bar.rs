use dioxus::prelude::*;

/// Free-text search box on the home screen
#[component]
pub fn SearchBar(value: String, on_change: EventHandler<String>) -> Element {
    let has_input = !value.is_empty();

    rsx! {
        div {
            class: "search-bar",

            div {
                class: "search-input-wrapper",

                input {
                    r#type: "text",
                    class: "search-input",
                    placeholder: "Search hospital or city...",
                    value: "{value}",
                    oninput: move |evt| on_change.call(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Escape {
                            on_change.call(String::new());
                        }
                    },
                }

                // Clear button (only shown when there's input)
                if has_input {
                    button {
                        class: "search-clear-button",
                        title: "Clear",
                        onclick: move |_| on_change.call(String::new()),
                        "✕"
                    }
                }
            }
        }
    }
}
