//! Student data pages. Everyone signed in can browse; only admins add, edit
//! or delete, and the router keeps non-admins off the add and edit pages.

use api::{RecordId, StudentFields};
use dioxus::prelude::*;
use store::Profile;
use ui::views::{ConfirmBar, ErrorState, LoadingState, PageHeader, StudentForm};
use ui::use_auth;

use super::BackLink;
use super::records::{use_delete, use_record, use_record_list, use_save, LoadState};
use crate::Route;

const NOUN: &str = "student";

#[component]
pub fn Students() -> Element {
    let session = use_auth();
    let nav = use_navigator();
    let is_admin = session.read().user().is_some_and(Profile::is_admin);

    let (mut rows, state) = use_record_list::<api::Students>("student data");
    let mut pending_delete = use_signal(|| None::<RecordId>);
    let delete = use_delete::<api::Students>(NOUN, move |id| {
        rows.write().retain(|row| row.id != id);
    });

    match state() {
        LoadState::Loading => return rsx! { LoadingState { message: "Loading student data..." } },
        LoadState::Failed(message) => return rsx! { ErrorState { message: message } },
        LoadState::Ready => {}
    }

    let columns = if is_admin { 4 } else { 3 };

    rsx! {
        PageHeader {
            title: "Student Data",
            if is_admin {
                Link {
                    class: "px-4 py-2 rounded-md bg-blue-600 text-white font-semibold hover:bg-blue-700",
                    to: Route::AddStudent {},
                    "Add new student"
                }
            }
        }

        if let Some(id) = pending_delete() {
            ConfirmBar {
                message: "Are you sure you want to delete this record?",
                on_confirm: move |_| {
                    pending_delete.set(None);
                    delete.call(id.clone());
                },
                on_cancel: move |_| pending_delete.set(None),
            }
        }

        table {
            class: "w-full bg-white rounded-lg shadow overflow-hidden text-sm",
            thead {
                tr {
                    class: "bg-gray-100 text-left",
                    th { class: "p-3", "Student number" }
                    th { class: "p-3", "Name" }
                    th { class: "p-3", "Major" }
                    if is_admin {
                        th { class: "p-3 text-center", "Actions" }
                    }
                }
            }
            tbody {
                if rows.read().is_empty() {
                    tr {
                        td {
                            class: "p-3 text-center text-gray-500",
                            colspan: "{columns}",
                            "No student data."
                        }
                    }
                }
                for student in rows() {
                    tr {
                        key: "{student.id}",
                        class: "border-t border-gray-100",
                        td { class: "p-3", "{student.fields.student_number}" }
                        td { class: "p-3", "{student.fields.name}" }
                        td { class: "p-3", "{student.fields.major}" }
                        if is_admin {
                            td {
                                class: "p-3 text-center space-x-2",
                                button {
                                    class: "px-3 py-1 rounded border border-gray-300",
                                    onclick: {
                                        let id = student.id.to_string();
                                        move |_| {
                                            nav.push(Route::EditStudent { id: id.clone() });
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "px-3 py-1 rounded bg-red-600 text-white",
                                    onclick: {
                                        let id = student.id.clone();
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
    }
}

#[component]
pub fn AddStudent() -> Element {
    let (saving, save) = use_save::<api::Students>(NOUN, Route::Students {});

    rsx! {
        PageHeader {
            title: "Add Student",
            BackLink { to: Route::Students {} }
        }
        StudentForm {
            loading: saving(),
            on_submit: move |fields: StudentFields| save.call((None, fields)),
        }
    }
}

#[component]
pub fn EditStudent(id: String) -> Element {
    let record = use_record::<api::Students>(id, NOUN, Route::Students {});
    let (saving, save) = use_save::<api::Students>(NOUN, Route::Students {});

    let Some(student) = record() else {
        return rsx! { LoadingState { message: "Loading student..." } };
    };
    let record_id = student.id.clone();

    rsx! {
        PageHeader {
            title: "Edit Student",
            BackLink { to: Route::Students {} }
        }
        StudentForm {
            initial: student.fields,
            loading: saving(),
            on_submit: move |fields: StudentFields| save.call((Some(record_id.clone()), fields)),
        }
    }
}
