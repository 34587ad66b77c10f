use api::{FieldErrors, StudentFields, Validate};
use dioxus::prelude::*;

use super::{submit_label, SUBMIT_CLASS};
use crate::forms::TextField;

/// Add/edit form for a student record.
///
/// Validates locally and only calls `on_submit` with a complete field set.
#[component]
pub fn StudentForm(
    /// Existing values when editing.
    initial: Option<StudentFields>,
    #[props(default)] loading: bool,
    on_submit: EventHandler<StudentFields>,
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
            class: "space-y-5 max-w-lg",
            onsubmit: handle_submit,

            TextField {
                id: "nim",
                label: "Student number",
                value: fields.read().student_number.clone(),
                placeholder: "e.g. 11223344",
                disabled: loading,
                error: error("student_number"),
                oninput: move |v: String| fields.write().student_number = v,
            }
            TextField {
                id: "nama",
                label: "Full name",
                value: fields.read().name.clone(),
                placeholder: "e.g. Budi Sanjaya",
                disabled: loading,
                error: error("name"),
                oninput: move |v: String| fields.write().name = v,
            }
            TextField {
                id: "jurusan",
                label: "Major",
                value: fields.read().major.clone(),
                placeholder: "e.g. Informatics Engineering",
                disabled: loading,
                error: error("major"),
                oninput: move |v: String| fields.write().major = v,
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
