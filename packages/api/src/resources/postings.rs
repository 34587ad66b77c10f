//! Posting records (`/api/postings`).

use serde::{Deserialize, Serialize};

use super::{Record, Resource};

pub struct Postings;

impl Resource for Postings {
    const PATH: &'static str = "/api/postings";
    type Fields = PostingFields;
    type Patch = PostingPatch;
}

pub type Posting = Record<PostingFields>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostingFields {
    pub title: String,
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PostingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}
