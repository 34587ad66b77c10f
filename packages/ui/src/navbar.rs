use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};

/// Top bar for signed-in pages. Section links come in as children.
#[component]
pub fn Navbar(children: Element, #[props(default)] on_logout: EventHandler<()>) -> Element {
    let session = use_auth();
    let user = session.read().user().cloned();

    rsx! {
        nav {
            class: "flex items-center gap-4 px-6 py-3 bg-blue-700 text-white shadow",
            span { class: "font-bold mr-4", "Student Portal" }
            div {
                class: "flex items-center gap-4 flex-1 text-sm",
                {children}
            }
            if let Some(user) = user {
                div {
                    class: "flex items-center gap-3 text-sm",
                    crate::Icon {
                        icon: crate::icons::FaUser,
                        width: 12,
                        height: 12,
                    }
                    span { "{user.username}" }
                    span {
                        class: "px-2 py-0.5 rounded bg-blue-900 text-xs uppercase",
                        "{user.role}"
                    }
                    LogoutButton {
                        class: "flex items-center px-3 py-1 rounded bg-white text-blue-700 font-semibold",
                        on_logout: on_logout,
                    }
                }
            }
        }
    }
}
