//! Labelled inputs with inline validation messages.

use dioxus::prelude::*;

const INPUT_CLASS: &str = "w-full p-3 border rounded-md shadow-sm focus:outline-none focus:ring-2";
const INPUT_OK: &str = "border-gray-300 focus:ring-blue-500";
const INPUT_ERR: &str = "border-red-500 focus:ring-red-500";

fn input_class(error: &Option<String>) -> String {
    let state = if error.is_some() { INPUT_ERR } else { INPUT_OK };
    format!("{INPUT_CLASS} {state}")
}

/// Validation message shown under a field.
#[component]
pub fn FieldMessage(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "text-red-600 text-xs mt-1", "{message}" }
        }
    }
}

/// Single-line input.
#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
    error: Option<String>,
) -> Element {
    let class = input_class(&error);
    rsx! {
        div {
            label {
                r#for: "{id}",
                class: "block text-sm font-medium text-gray-700 mb-1",
                "{label}"
            }
            input {
                id: "{id}",
                class: "{class}",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                disabled: disabled,
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            FieldMessage { message: error }
        }
    }
}

/// Multi-line input.
#[component]
pub fn TextAreaField(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
    #[props(default = 6)] rows: u32,
    error: Option<String>,
) -> Element {
    let class = input_class(&error);
    rsx! {
        div {
            label {
                r#for: "{id}",
                class: "block text-sm font-medium text-gray-700 mb-1",
                "{label}"
            }
            textarea {
                id: "{id}",
                class: "{class}",
                rows: "{rows}",
                placeholder: "{placeholder}",
                disabled: disabled,
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            FieldMessage { message: error }
        }
    }
}
