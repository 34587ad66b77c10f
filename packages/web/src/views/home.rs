use dioxus::prelude::*;
use ui::icons::{FaBook, FaNoteSticky, FaNewspaper, FaUtensils};
use ui::{use_auth, Icon};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let session = use_auth();
    let user = session.read().user().cloned();

    rsx! {
        div {
            class: "space-y-6",
            if let Some(user) = user {
                div {
                    h1 { class: "text-3xl font-bold text-gray-800", "Hello, {user.username}!" }
                    p {
                        class: "text-gray-600 mt-1",
                        "You are signed in as "
                        span { class: "font-semibold", "{user.role}" }
                        "."
                    }
                }
            }

            div {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                SectionCard {
                    to: Route::Students {},
                    title: "Student data",
                    description: "Browse student records. Admins can add and edit them.",
                    Icon { icon: FaBook, width: 20, height: 20 }
                }
                SectionCard {
                    to: Route::Recipes {},
                    title: "Recipes",
                    description: "Ingredients and cooking instructions.",
                    Icon { icon: FaUtensils, width: 20, height: 20 }
                }
                SectionCard {
                    to: Route::Postings {},
                    title: "Postings",
                    description: "Announcements and posts.",
                    Icon { icon: FaNewspaper, width: 20, height: 20 }
                }
                SectionCard {
                    to: Route::Notes {},
                    title: "Notes",
                    description: "Personal notes written in Markdown.",
                    Icon { icon: FaNoteSticky, width: 20, height: 20 }
                }
            }
        }
    }
}

#[component]
fn SectionCard(to: Route, title: String, description: String, children: Element) -> Element {
    rsx! {
        Link {
            to: to,
            class: "block p-5 bg-white rounded-lg shadow hover:shadow-md",
            div {
                class: "flex items-center gap-3 text-blue-700",
                {children}
                h2 { class: "text-lg font-semibold", "{title}" }
            }
            p { class: "text-sm text-gray-600 mt-2", "{description}" }
        }
    }
}
