use api::{PostingFields, RecordId};
use dioxus::prelude::*;
use ui::views::{ConfirmBar, ErrorState, LoadingState, PageHeader, PostingForm};

use super::records::{use_delete, use_record, use_record_list, use_save, LoadState};
use super::{excerpt, BackLink};
use crate::Route;

const NOUN: &str = "posting";

#[component]
pub fn Postings() -> Element {
    let (mut rows, state) = use_record_list::<api::Postings>("postings");
    let mut pending_delete = use_signal(|| None::<RecordId>);
    let delete = use_delete::<api::Postings>(NOUN, move |id| {
        rows.write().retain(|row| row.id != id);
    });

    match state() {
        LoadState::Loading => return rsx! { LoadingState { message: "Loading postings..." } },
        LoadState::Failed(message) => return rsx! { ErrorState { message: message } },
        LoadState::Ready => {}
    }

    rsx! {
        PageHeader {
            title: "Postings",
            Link {
                class: "px-4 py-2 rounded-md bg-blue-600 text-white font-semibold hover:bg-blue-700",
                to: Route::AddPosting {},
                "New posting"
            }
        }

        if let Some(id) = pending_delete() {
            ConfirmBar {
                message: "Are you sure you want to delete this posting?",
                on_confirm: move |_| {
                    pending_delete.set(None);
                    delete.call(id.clone());
                },
                on_cancel: move |_| pending_delete.set(None),
            }
        }

        if rows.read().is_empty() {
            p { class: "text-gray-500", "No postings yet." }
        }

        ul {
            class: "space-y-3",
            for posting in rows() {
                li {
                    key: "{posting.id}",
                    class: "p-4 bg-white rounded-lg shadow flex items-start gap-4",
                    div {
                        class: "flex-1 min-w-0",
                        Link {
                            class: "font-semibold text-blue-700 hover:underline",
                            to: Route::PostingDetail { id: posting.id.to_string() },
                            "{posting.fields.title}"
                        }
                        p { class: "text-sm text-gray-600 truncate", {excerpt(&posting.fields.content, 160)} }
                    }
                    Link {
                        class: "px-3 py-1 rounded border border-gray-300 text-sm",
                        to: Route::EditPosting { id: posting.id.to_string() },
                        "Edit"
                    }
                    button {
                        class: "px-3 py-1 rounded bg-red-600 text-white text-sm",
                        onclick: {
                            let id = posting.id.clone();
                            move |_| pending_delete.set(Some(id.clone()))
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
pub fn PostingDetail(id: String) -> Element {
    let nav = use_navigator();
    let record = use_record::<api::Postings>(id, NOUN, Route::Postings {});
    let mut confirming = use_signal(|| false);
    let delete = use_delete::<api::Postings>(NOUN, move |_| {
        nav.push(Route::Postings {});
    });

    let Some(posting) = record() else {
        return rsx! { LoadingState { message: "Loading posting..." } };
    };
    let record_id = posting.id.clone();

    rsx! {
        PageHeader {
            title: posting.fields.title.clone(),
            BackLink { to: Route::Postings {} }
            Link {
                class: "px-4 py-2 rounded-md bg-blue-600 text-white font-semibold hover:bg-blue-700",
                to: Route::EditPosting { id: posting.id.to_string() },
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
                message: "Are you sure you want to delete this posting?",
                on_confirm: move |_| {
                    confirming.set(false);
                    delete.call(record_id.clone());
                },
                on_cancel: move |_| confirming.set(false),
            }
        }

        article {
            class: "bg-white rounded-lg shadow p-6 whitespace-pre-line text-gray-700",
            "{posting.fields.content}"
        }
    }
}

#[component]
pub fn AddPosting() -> Element {
    let (saving, save) = use_save::<api::Postings>(NOUN, Route::Postings {});

    rsx! {
        PageHeader {
            title: "New Posting",
            BackLink { to: Route::Postings {} }
        }
        PostingForm {
            loading: saving(),
            on_submit: move |fields: PostingFields| save.call((None, fields)),
        }
    }
}

#[component]
pub fn EditPosting(id: String) -> Element {
    let record = use_record::<api::Postings>(id, NOUN, Route::Postings {});
    let (saving, save) = use_save::<api::Postings>(NOUN, Route::Postings {});

    let Some(posting) = record() else {
        return rsx! { LoadingState { message: "Loading posting..." } };
    };
    let record_id = posting.id.clone();

    rsx! {
        PageHeader {
            title: "Edit Posting",
            BackLink { to: Route::PostingDetail { id: posting.id.to_string() } }
        }
        PostingForm {
            initial: posting.fields,
            loading: saving(),
            on_submit: move |fields: PostingFields| save.call((Some(record_id.clone()), fields)),
        }
    }
}
