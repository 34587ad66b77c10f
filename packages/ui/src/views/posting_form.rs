use api::{FieldErrors, PostingFields, Validate};
use dioxus::prelude::*;

use super::{submit_label, SUBMIT_CLASS};
use crate::forms::{TextAreaField, TextField};

#[component]
pub fn PostingForm(
    initial: Option<PostingFields>,
    #[props(default)] loading: bool,
    on_submit: EventHandler<PostingFields>,
) -> Element {
    let editing = initial.is_some();
    let mut fields = use_signal(|| initial.clone().unwrap_or_default());
    let mut errors = use_signal(FieldErrors::new);

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
            class: "space-y-5 max-w-2xl",
            onsubmit: handle_submit,

            TextField {
                id: "title",
                label: "Title",
                value: fields.read().title.clone(),
                disabled: loading,
                error: error("title"),
                oninput: move |v: String| fields.write().title = v,
            }
            TextAreaField {
                id: "content",
                label: "Content",
                value: fields.read().content.clone(),
                rows: 10,
                disabled: loading,
                error: error("content"),
                oninput: move |v: String| fields.write().content = v,
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
