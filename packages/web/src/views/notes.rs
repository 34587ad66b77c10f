//! Notes pages. Content is Markdown, rendered on the detail page.

use api::{NoteFields, RecordId};
use dioxus::prelude::*;
use ui::views::{ConfirmBar, ErrorState, LoadingState, NoteForm, PageHeader};
use ui::MarkdownView;

use super::records::{use_delete, use_record, use_record_list, use_save, LoadState};
use super::{excerpt, BackLink};
use crate::Route;

const NOUN: &str = "note";

#[component]
pub fn Notes() -> Element {
    let (mut rows, state) = use_record_list::<api::Notes>("notes");
    let mut pending_delete = use_signal(|| None::<RecordId>);
    let delete = use_delete::<api::Notes>(NOUN, move |id| {
        rows.write().retain(|row| row.id != id);
    });

    match state() {
        LoadState::Loading => return rsx! { LoadingState { message: "Loading notes..." } },
        LoadState::Failed(message) => return rsx! { ErrorState { message: message } },
        LoadState::Ready => {}
    }

    rsx! {
        PageHeader {
            title: "Notes",
            Link {
                class: "px-4 py-2 rounded-md bg-blue-600 text-white font-semibold hover:bg-blue-700",
                to: Route::AddNote {},
                "New note"
            }
        }

        if let Some(id) = pending_delete() {
            ConfirmBar {
                message: "Are you sure you want to delete this note?",
                on_confirm: move |_| {
                    pending_delete.set(None);
                    delete.call(id.clone());
                },
                on_cancel: move |_| pending_delete.set(None),
            }
        }

        if rows.read().is_empty() {
            p { class: "text-gray-500", "No notes yet." }
        }

        div {
            class: "grid grid-cols-1 md:grid-cols-3 gap-4",
            for note in rows() {
                div {
                    key: "{note.id}",
                    class: "p-4 bg-yellow-50 border border-yellow-200 rounded-lg shadow-sm flex flex-col gap-2",
                    Link {
                        class: "font-semibold text-gray-800 hover:underline",
                        to: Route::NoteDetail { id: note.id.to_string() },
                        "{note.fields.title}"
                    }
                    p { class: "text-sm text-gray-600", {excerpt(&note.fields.content, 100)} }
                    div {
                        class: "flex gap-2 mt-auto text-sm",
                        Link {
                            class: "px-3 py-1 rounded border border-gray-300 bg-white",
                            to: Route::EditNote { id: note.id.to_string() },
                            "Edit"
                        }
                        button {
                            class: "px-3 py-1 rounded bg-red-600 text-white",
                            onclick: {
                                let id = note.id.clone();
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
pub fn NoteDetail(id: String) -> Element {
    let nav = use_navigator();
    let record = use_record::<api::Notes>(id, NOUN, Route::Notes {});
    let mut confirming = use_signal(|| false);
    let delete = use_delete::<api::Notes>(NOUN, move |_| {
        nav.push(Route::Notes {});
    });

    let Some(note) = record() else {
        return rsx! { LoadingState { message: "Loading note..." } };
    };
    let record_id = note.id.clone();

    rsx! {
        PageHeader {
            title: note.fields.title.clone(),
            BackLink { to: Route::Notes {} }
            Link {
                class: "px-4 py-2 rounded-md bg-blue-600 text-white font-semibold hover:bg-blue-700",
                to: Route::EditNote { id: note.id.to_string() },
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
                message: "Are you sure you want to delete this note?",
                on_confirm: move |_| {
                    confirming.set(false);
                    delete.call(record_id.clone());
                },
                on_cancel: move |_| confirming.set(false),
            }
        }

        MarkdownView {
            class: "bg-white rounded-lg shadow p-6",
            content: note.fields.content,
        }
    }
}

#[component]
pub fn AddNote() -> Element {
    let (saving, save) = use_save::<api::Notes>(NOUN, Route::Notes {});

    rsx! {
        PageHeader {
            title: "New Note",
            BackLink { to: Route::Notes {} }
        }
        NoteForm {
            loading: saving(),
            on_submit: move |fields: NoteFields| save.call((None, fields)),
        }
    }
}

#[component]
pub fn EditNote(id: String) -> Element {
    let record = use_record::<api::Notes>(id, NOUN, Route::Notes {});
    let (saving, save) = use_save::<api::Notes>(NOUN, Route::Notes {});

    let Some(note) = record() else {
        return rsx! { LoadingState { message: "Loading note..." } };
    };
    let record_id = note.id.clone();

    rsx! {
        PageHeader {
            title: "Edit Note",
            BackLink { to: Route::NoteDetail { id: note.id.to_string() } }
        }
        NoteForm {
            initial: note.fields,
            loading: saving(),
            on_submit: move |fields: NoteFields| save.call((Some(record_id.clone()), fields)),
        }
    }
}
