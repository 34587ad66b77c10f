use dioxus::prelude::*;

/// Placeholder while a request is in flight.
#[component]
pub fn LoadingState(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        p { class: "p-6 text-gray-500", "{message}" }
    }
}

/// Inline error for a failed load.
#[component]
pub fn ErrorState(message: String) -> Element {
    rsx! {
        div {
            class: "m-6 px-3 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-sm",
            "{message}"
        }
    }
}

/// Page title with optional actions on the right.
#[component]
pub fn PageHeader(title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between mb-6",
            h1 { class: "text-2xl font-bold text-gray-800", "{title}" }
            div { class: "flex gap-2", {children} }
        }
    }
}

/// Confirmation strip for destructive actions.
#[component]
pub fn ConfirmBar(
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
    #[props(default = "Yes, delete".to_string())] confirm_label: String,
) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-3 mb-4 px-4 py-3 bg-yellow-50 border border-yellow-200 rounded text-sm",
            span { class: "flex-1", "{message}" }
            button {
                class: "px-3 py-1 rounded bg-red-600 text-white font-semibold",
                onclick: move |_| on_confirm.call(()),
                "{confirm_label}"
            }
            button {
                class: "px-3 py-1 rounded border border-gray-300",
                onclick: move |_| on_cancel.call(()),
                "Cancel"
            }
        }
    }
}
