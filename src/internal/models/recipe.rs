use serde::{Deserialize, Serialize};

/// A stored recipe. Serializes with exactly `id`, `name` and `ingredients`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
}

/// Request body for creating or replacing a recipe.
///
/// `id` is ignored on create; on update it must match the target id when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub ingredients: Vec<String>,
}

impl RecipeDraft {
    pub fn new(name: impl Into<String>, ingredients: &[&str]) -> Self {
        Self {
            id: None,
            name: name.into(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
