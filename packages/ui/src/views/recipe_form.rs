use api::{FieldErrors, RecipeFields, Validate};
use dioxus::prelude::*;

use super::{submit_label, SUBMIT_CLASS};
use crate::forms::{TextAreaField, TextField};

/// Add/edit form for a recipe.
#[component]
pub fn RecipeForm(
    initial: Option<RecipeFields>,
    #[props(default)] loading: bool,
    on_submit: EventHandler<RecipeFields>,
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
                placeholder: "e.g. Nasi Goreng",
                disabled: loading,
                error: error("title"),
                oninput: move |v: String| fields.write().title = v,
            }
            TextAreaField {
                id: "description",
                label: "Description",
                value: fields.read().description.clone(),
                rows: 3,
                disabled: loading,
                error: error("description"),
                oninput: move |v: String| fields.write().description = v,
            }
            TextAreaField {
                id: "ingredients",
                label: "Ingredients",
                value: fields.read().ingredients.clone(),
                placeholder: "One ingredient per line",
                disabled: loading,
                error: error("ingredients"),
                oninput: move |v: String| fields.write().ingredients = v,
            }
            TextAreaField {
                id: "instructions",
                label: "Instructions",
                value: fields.read().instructions.clone(),
                rows: 8,
                disabled: loading,
                error: error("instructions"),
                oninput: move |v: String| fields.write().instructions = v,
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
