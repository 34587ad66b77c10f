use dioxus::prelude::*;

use crate::Route;

mod records;

mod guard;
pub use guard::{Protected, PublicOnly};

mod layout;
pub use layout::{AppShell, NotFound};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod home;
pub use home::Home;

mod students;
pub use students::{AddStudent, EditStudent, Students};

mod recipes;
pub use recipes::{AddRecipe, EditRecipe, RecipeDetail, Recipes};

mod postings;
pub use postings::{AddPosting, EditPosting, PostingDetail, Postings};

mod notes;
pub use notes::{AddNote, EditNote, NoteDetail, Notes};

const BACK_CLASS: &str = "px-4 py-2 rounded-md border border-gray-300 bg-white text-gray-700 hover:bg-gray-50";

/// Header link back to a list page.
#[component]
pub(crate) fn BackLink(to: Route) -> Element {
    rsx! {
        Link { class: BACK_CLASS, to: to, "Back" }
    }
}

/// Short plain-text preview of a longer field for list rows.
pub(crate) fn excerpt(text: &str, max_chars: usize) -> String {
    let line = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("").trim();
    if line.chars().count() <= max_chars {
        line.to_string()
    } else {
        let cut: String = line.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_first_non_empty_line() {
        assert_eq!(excerpt("\n\n  hello world  \nsecond", 40), "hello world");
    }

    #[test]
    fn test_excerpt_truncates_on_chars() {
        assert_eq!(excerpt("héllo wörld", 5), "héllo...");
        assert_eq!(excerpt("", 5), "");
    }
}
