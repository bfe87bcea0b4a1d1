use dioxus::prelude::*;

/// Labelled text input used by the login and signup forms
#[component]
pub fn FormField(
    label: &'static str,
    placeholder: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        div {
            class: "input-group",
            label {
                class: "input-label",
                "{label}"
            }
            input {
                class: "input",
                r#type: input_type,
                placeholder: placeholder,
                value: "{value}",
                disabled: disabled,
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}
