//! Data hooks shared by the record pages.
//!
//! Requests run inside `use_resource` or `spawn` on the page's scope, so a
//! page that unmounts drops its in-flight request with it.

use api::{ApiClient, ApiError, Record, RecordId, Resource};
use dioxus::prelude::*;
use ui::components::{use_toast, ToastOptions};
use ui::use_api;

use crate::Route;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// Load every record of `R` once for a list page.
pub(crate) fn use_record_list<R>(
    noun: &'static str,
) -> (Signal<Vec<Record<R::Fields>>>, Signal<LoadState>)
where
    R: Resource + 'static,
    R::Fields: Clone + 'static,
{
    let api = use_api();
    let toast = use_toast();
    let mut rows = use_signal(Vec::new);
    let mut state = use_signal(|| LoadState::Loading);

    use_resource(move || {
        let api = api.clone();
        async move {
            match api.resource::<R>().list().await {
                Ok(list) => {
                    rows.set(list);
                    state.set(LoadState::Ready);
                }
                Err(e) => {
                    tracing::error!("Failed to load {noun}: {e}");
                    toast.error(format!("Failed to load {noun}."), ToastOptions::new());
                    let fallback = format!("Failed to load {noun}. Check your API connection.");
                    state.set(LoadState::Failed(e.user_message(&fallback)));
                }
            }
        }
    });

    (rows, state)
}

/// Load one record for a detail or edit page. A failed fetch toasts and
/// replaces the page with `back`.
pub(crate) fn use_record<R>(
    id: String,
    noun: &'static str,
    back: Route,
) -> Signal<Option<Record<R::Fields>>>
where
    R: Resource + 'static,
    R::Fields: Clone + 'static,
{
    let api = use_api();
    let toast = use_toast();
    let nav = use_navigator();
    let mut record = use_signal(|| None);

    use_resource(use_reactive!(|id| {
        let api = api.clone();
        let back = back.clone();
        async move {
            let id = RecordId::from(id);
            match api.resource::<R>().get(&id).await {
                Ok(found) => record.set(Some(found)),
                Err(e) => {
                    tracing::error!("Failed to load {noun} {id}: {e}");
                    let message = e.user_message(&format!("Failed to load {noun}."));
                    toast.error(message, ToastOptions::new());
                    nav.replace(back);
                }
            }
        }
    }));

    record
}

/// Create a record, or replace an existing one when `id` is set.
pub(crate) async fn save_record<R: Resource>(
    api: &ApiClient,
    id: Option<&RecordId>,
    fields: &R::Fields,
) -> Result<Record<R::Fields>, ApiError> {
    let client = api.resource::<R>();
    match id {
        Some(id) => client.update(id, fields).await,
        None => client.create(fields).await,
    }
}

/// Save callback for an add or edit page, plus its in-flight flag.
/// Navigates to `done` once the backend accepts the record.
pub(crate) fn use_save<R>(
    noun: &'static str,
    done: Route,
) -> (Signal<bool>, Callback<(Option<RecordId>, R::Fields)>)
where
    R: Resource + 'static,
    R::Fields: 'static,
{
    let api = use_api();
    let toast = use_toast();
    let nav = use_navigator();
    let mut saving = use_signal(|| false);

    let save = use_callback(move |(id, fields): (Option<RecordId>, R::Fields)| {
        let api = api.clone();
        let done = done.clone();
        saving.set(true);
        spawn(async move {
            let result = save_record::<R>(&api, id.as_ref(), &fields).await;
            saving.set(false);
            match result {
                Ok(saved) => {
                    tracing::info!("Saved {noun} {}", saved.id);
                    toast.success(format!("{} saved!", capitalize(noun)), ToastOptions::new());
                    nav.push(done);
                }
                Err(e) => {
                    tracing::error!("Failed to save {noun}: {e}");
                    let message = e.user_message(&format!("Failed to save {noun}."));
                    toast.error(message, ToastOptions::new());
                }
            }
        });
    });

    (saving, save)
}

/// Delete callback. `on_deleted` runs only after the backend confirms.
pub(crate) fn use_delete<R>(
    noun: &'static str,
    on_deleted: impl FnMut(RecordId) + Copy + 'static,
) -> Callback<RecordId>
where
    R: Resource + 'static,
{
    let api = use_api();
    let toast = use_toast();

    use_callback(move |id: RecordId| {
        let api = api.clone();
        let mut on_deleted = on_deleted;
        spawn(async move {
            match api.resource::<R>().delete(&id).await {
                Ok(()) => {
                    tracing::info!("Deleted {noun} {id}");
                    toast.success(format!("{} deleted!", capitalize(noun)), ToastOptions::new());
                    on_deleted(id);
                }
                Err(e) => {
                    tracing::error!("Failed to delete {noun} {id}: {e}");
                    let message = e.user_message(&format!("Failed to delete {noun}."));
                    toast.error(message, ToastOptions::new());
                }
            }
        });
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
