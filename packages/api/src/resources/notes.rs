//! Note records (`/api/notes`). Content is Markdown.

use serde::{Deserialize, Serialize};

use super::{Record, Resource};

pub struct Notes;

impl Resource for Notes {
    const PATH: &'static str = "/api/notes";
    type Fields = NoteFields;
    type Patch = NotePatch;
}

pub type Note = Record<NoteFields>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteFields {
    pub title: String,
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{RecordId, ResourceClient};

    #[test]
    fn test_note_paths() {
        assert_eq!(ResourceClient::<Notes>::collection_path(), "/api/notes/");
        assert_eq!(
            ResourceClient::<Notes>::item_path(&RecordId::Number(9)),
            "/api/notes/9"
        );
    }
}
