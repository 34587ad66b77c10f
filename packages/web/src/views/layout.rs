use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

const LINK_CLASS: &str = "px-3 py-2 rounded-md text-sm font-medium text-blue-100 hover:bg-blue-700 hover:text-white";

/// Navbar and content frame for signed-in pages.
#[component]
pub fn AppShell() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "min-h-screen flex flex-col",
            Navbar {
                on_logout: move |_| {
                    nav.replace(Route::Login { redirect: String::new() });
                },
                Link { class: LINK_CLASS, to: Route::Home {}, "Home" }
                Link { class: LINK_CLASS, to: Route::Students {}, "Students" }
                Link { class: LINK_CLASS, to: Route::Recipes {}, "Recipes" }
                Link { class: LINK_CLASS, to: Route::Postings {}, "Postings" }
                Link { class: LINK_CLASS, to: Route::Notes {}, "Notes" }
            }
            main {
                class: "flex-1 w-full max-w-5xl mx-auto p-6",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen gap-4 bg-gray-100",
            h1 { class: "text-4xl font-bold text-gray-800", "404" }
            p { class: "text-gray-600", "No page at /{path}" }
            Link {
                class: "text-blue-600 font-semibold hover:underline",
                to: Route::Home {},
                "Back to home"
            }
        }
    }
}
