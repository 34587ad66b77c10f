use api::{FieldErrors, NoteFields, Validate};
use dioxus::prelude::*;

use super::{submit_label, SUBMIT_CLASS};
use crate::forms::{TextAreaField, TextField};
use crate::markdown::MarkdownView;

/// Note editor with a live Markdown preview.
#[component]
pub fn NoteForm(
    initial: Option<NoteFields>,
    #[props(default)] loading: bool,
    on_submit: EventHandler<NoteFields>,
) -> Element {
    let editing = initial.is_some();
    let mut fields = use_signal(|| initial.clone().unwrap_or_default());
    let mut errors = use_signal(FieldErrors::new);
    let mut preview = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = fields();
        match current.validate() {
            Ok(()) => {
                errors.set(FieldErrors::new());
                on_submit.call(current);
            }
            Err(e) => errors.set(e),
        }
    };

    let error = |field: &str| errors.read().get(field).map(str::to_string);

    rsx! {
        form {
            class: "space-y-5 max-w-3xl",
            onsubmit: handle_submit,

            TextField {
                id: "title",
                label: "Title",
                value: fields.read().title.clone(),
                disabled: loading,
                error: error("title"),
                oninput: move |v: String| fields.write().title = v,
            }

            div {
                class: "flex justify-end",
                button {
                    r#type: "button",
                    class: "text-sm text-blue-600 hover:underline",
                    onclick: move |_| preview.toggle(),
                    if preview() { "Edit" } else { "Preview" }
                }
            }

            if preview() {
                MarkdownView {
                    class: "min-h-[10rem] p-3 border border-gray-200 rounded-md",
                    content: fields.read().content.clone(),
                }
            } else {
                TextAreaField {
                    id: "content",
                    label: "Content (Markdown)",
                    value: fields.read().content.clone(),
                    rows: 12,
                    disabled: loading,
                    error: error("content"),
                    oninput: move |v: String| fields.write().content = v,
                }
            }

            button {
                class: SUBMIT_CLASS,
                r#type: "submit",
                disabled: loading,
                "{submit_label(loading, editing)}"
            }
        }
    }
}
