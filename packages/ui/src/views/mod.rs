mod modal;
pub use modal::{AlertDialog, ModalOverlay};

mod states;
pub use states::{ConfirmBar, ErrorState, LoadingState, PageHeader};

mod student_form;
pub use student_form::StudentForm;

mod recipe_form;
pub use recipe_form::RecipeForm;

mod posting_form;
pub use posting_form::PostingForm;

mod note_form;
pub use note_form::NoteForm;

pub(crate) const SUBMIT_CLASS: &str = "w-full bg-blue-600 text-white py-3 rounded-md font-semibold hover:bg-blue-700 disabled:opacity-70 disabled:cursor-not-allowed";

/// Label for a record form's submit button.
pub(crate) fn submit_label(loading: bool, editing: bool) -> &'static str {
    match (loading, editing) {
        (true, _) => "Saving...",
        (false, true) => "Update",
        (false, false) => "Save",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(true, true), "Saving...");
        assert_eq!(submit_label(false, true), "Update");
        assert_eq!(submit_label(false, false), "Save");
    }
}
