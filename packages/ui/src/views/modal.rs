use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicks on the backdrop are swallowed; only a control inside the card
/// closes it.
#[component]
pub fn ModalOverlay(children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/30",
            style: "z-index: 2000",
            role: "presentation",
            div {
                class: "bg-white rounded-lg shadow-lg max-w-md w-full mx-4",
                role: "alertdialog",
                "aria-modal": "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Notice that stays up until the user acknowledges it.
#[component]
pub fn AlertDialog(
    title: String,
    message: String,
    on_dismiss: EventHandler<()>,
    #[props(default = "OK".to_string())] button_label: String,
) -> Element {
    rsx! {
        ModalOverlay {
            div {
                class: "p-6 space-y-4",
                h2 { class: "text-lg font-semibold text-gray-800", "{title}" }
                p { class: "text-sm text-gray-600", "{message}" }
                div {
                    class: "flex justify-end",
                    button {
                        class: "px-4 py-2 rounded-md bg-blue-600 text-white font-semibold hover:bg-blue-700",
                        autofocus: true,
                        onclick: move |_| on_dismiss.call(()),
                        "{button_label}"
                    }
                }
            }
        }
    }
}
