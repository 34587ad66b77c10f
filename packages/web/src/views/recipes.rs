use api::{RecipeFields, RecordId};
use dioxus::prelude::*;
use ui::views::{ConfirmBar, ErrorState, LoadingState, PageHeader, RecipeForm};

use super::records::{use_delete, use_record, use_record_list, use_save, LoadState};
use super::{excerpt, BackLink};
use crate::Route;

const NOUN: &str = "recipe";

#[component]
pub fn Recipes() -> Element {
    let (mut rows, state) = use_record_list::<api::Recipes>("recipes");
    let mut pending_delete = use_signal(|| None::<RecordId>);
    let delete = use_delete::<api::Recipes>(NOUN, move |id| {
        rows.write().retain(|row| row.id != id);
    });

    match state() {
        LoadState::Loading => return rsx! { LoadingState { message: "Loading recipes..." } },
        LoadState::Failed(message) => return rsx! { ErrorState { message: message } },
        LoadState::Ready => {}
    }

    rsx! {
        PageHeader {
            title: "Recipes",
            Link {
                class: "px-4 py-2 rounded-md bg-blue-600 text-white font-semibold hover:bg-blue-700",
                to: Route::AddRecipe {},
                "Add recipe"
            }
        }

        if let Some(id) = pending_delete() {
            ConfirmBar {
                message: "Are you sure you want to delete this recipe?",
                on_confirm: move |_| {
                    pending_delete.set(None);
                    delete.call(id.clone());
                },
                on_cancel: move |_| pending_delete.set(None),
            }
        }

        if rows.read().is_empty() {
            p { class: "text-gray-500", "No recipes yet." }
        }

        div {
            class: "grid grid-cols-1 md:grid-cols-2 gap-4",
            for recipe in rows() {
                div {
                    key: "{recipe.id}",
                    class: "p-5 bg-white rounded-lg shadow flex flex-col gap-2",
                    Link {
                        class: "text-lg font-semibold text-blue-700 hover:underline",
                        to: Route::RecipeDetail { id: recipe.id.to_string() },
                        "{recipe.fields.title}"
                    }
                    p { class: "text-sm text-gray-600", {excerpt(&recipe.fields.description, 120)} }
                    div {
                        class: "flex gap-2 mt-auto text-sm",
                        Link {
                            class: "px-3 py-1 rounded border border-gray-300",
                            to: Route::EditRecipe { id: recipe.id.to_string() },
                            "Edit"
                        }
                        button {
                            class: "px-3 py-1 rounded bg-red-600 text-white",
                            onclick: {
                                let id = recipe.id.clone();
                                move |_| pending_delete.set(Some(id.clone()))
                            },
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn RecipeDetail(id: String) -> Element {
    let nav = use_navigator();
    let record = use_record::<api::Recipes>(id, NOUN, Route::Recipes {});
    let mut confirming = use_signal(|| false);
    let delete = use_delete::<api::Recipes>(NOUN, move |_| {
        nav.push(Route::Recipes {});
    });

    let Some(recipe) = record() else {
        return rsx! { LoadingState { message: "Loading recipe..." } };
    };
    let record_id = recipe.id.clone();

    rsx! {
        PageHeader {
            title: recipe.fields.title.clone(),
            BackLink { to: Route::Recipes {} }
            Link {
                class: "px-4 py-2 rounded-md bg-blue-600 text-white font-semibold hover:bg-blue-700",
                to: Route::EditRecipe { id: recipe.id.to_string() },
                "Edit"
            }
            button {
                class: "px-4 py-2 rounded-md bg-red-600 text-white font-semibold",
                onclick: move |_| confirming.set(true),
                "Delete"
            }
        }

        if confirming() {
            ConfirmBar {
                message: "Are you sure you want to delete this recipe?",
                on_confirm: move |_| {
                    confirming.set(false);
                    delete.call(record_id.clone());
                },
                on_cancel: move |_| confirming.set(false),
            }
        }

        div {
            class: "bg-white rounded-lg shadow p-6 space-y-6",
            if !recipe.fields.description.is_empty() {
                p { class: "text-gray-700", "{recipe.fields.description}" }
            }
            section {
                h2 { class: "text-lg font-semibold mb-2", "Ingredients" }
                ul {
                    class: "list-disc pl-6 space-y-1",
                    for (i, line) in recipe.fields.ingredients.lines().filter(|l| !l.trim().is_empty()).enumerate() {
                        li { key: "{i}", "{line.trim()}" }
                    }
                }
            }
            section {
                h2 { class: "text-lg font-semibold mb-2", "Instructions" }
                p { class: "whitespace-pre-line text-gray-700", "{recipe.fields.instructions}" }
            }
        }
    }
}

#[component]
pub fn AddRecipe() -> Element {
    let (saving, save) = use_save::<api::Recipes>(NOUN, Route::Recipes {});

    rsx! {
        PageHeader {
            title: "Add Recipe",
            BackLink { to: Route::Recipes {} }
        }
        RecipeForm {
            loading: saving(),
            on_submit: move |fields: RecipeFields| save.call((None, fields)),
        }
    }
}

#[component]
pub fn EditRecipe(id: String) -> Element {
    let record = use_record::<api::Recipes>(id, NOUN, Route::Recipes {});
    let (saving, save) = use_save::<api::Recipes>(NOUN, Route::Recipes {});

    let Some(recipe) = record() else {
        return rsx! { LoadingState { message: "Loading recipe..." } };
    };
    let record_id = recipe.id.clone();

    rsx! {
        PageHeader {
            title: "Edit Recipe",
            BackLink { to: Route::RecipeDetail { id: recipe.id.to_string() } }
        }
        RecipeForm {
            initial: recipe.fields,
            loading: saving(),
            on_submit: move |fields: RecipeFields| save.call((Some(record_id.clone()), fields)),
        }
    }
}
