use async_trait::async_trait;

pub mod memory;
pub mod seed;

pub use memory::InMemoryRecipeStore;
pub use seed::{load_seed_file, seed_store};

use crate::internal::models::{Recipe, RecipeDraft};

/// Storage backend for recipes, shared by every request handler
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// All recipes in insertion order
    async fn list(&self) -> Vec<Recipe>;

    /// Look up a single recipe by id
    async fn get(&self, id: &str) -> Result<Recipe, StoreError>;

    /// Store a new recipe under a freshly generated id and return it
    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, StoreError>;

    /// Replace name and ingredients of an existing recipe, keeping its id and position
    async fn update(&self, id: &str, draft: RecipeDraft) -> Result<Recipe, StoreError>;

    /// Number of stored recipes
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),
    #[error("recipe `{0}` not found")]
    NotFound(String),
}

/// Shape checks shared by create and update
pub(crate) fn validate_draft(draft: &RecipeDraft) -> Result<(), StoreError> {
    if draft.name.trim().is_empty() {
        return Err(StoreError::Validation("`name` must not be empty".to_string()));
    }
    Ok(())
}
