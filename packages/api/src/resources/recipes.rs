//! Recipe records (`/api/recipes`).

use serde::{Deserialize, Serialize};

use super::{Record, Resource};

pub struct Recipes;

impl Resource for Recipes {
    const PATH: &'static str = "/api/recipes";
    type Fields = RecipeFields;
    type Patch = RecipePatch;
}

pub type Recipe = Record<RecipeFields>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeFields {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RecipePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}
