use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{validate_draft, RecipeStore, StoreError};
use crate::internal::models::{Recipe, RecipeDraft};

/// Process-lifetime recipe store backed by an ordered vector.
///
/// Writers hold the lock for the whole check-then-mutate sequence, so a
/// failed update never leaves a partial write behind.
#[derive(Default)]
pub struct InMemoryRecipeStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn list(&self) -> Vec<Recipe> {
        self.recipes.read().await.clone()
    }

    async fn get(&self, id: &str) -> Result<Recipe, StoreError> {
        self.recipes
            .read()
            .await
            .iter()
            .find(|recipe| recipe.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        validate_draft(&draft)?;

        let recipe = Recipe {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            ingredients: draft.ingredients,
        };

        self.recipes.write().await.push(recipe.clone());
        debug!("Created recipe {} ({})", recipe.id, recipe.name);
        Ok(recipe)
    }

    async fn update(&self, id: &str, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        validate_draft(&draft)?;
        if let Some(body_id) = draft.id.as_deref() {
            if body_id != id {
                return Err(StoreError::Validation(format!(
                    "request path id `{}` and body id `{}` must match",
                    id, body_id
                )));
            }
        }

        let mut recipes = self.recipes.write().await;
        let recipe = recipes
            .iter_mut()
            .find(|recipe| recipe.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        recipe.name = draft.name;
        recipe.ingredients = draft.ingredients;
        debug!("Updated recipe {} ({})", recipe.id, recipe.name);
        Ok(recipe.clone())
    }

    async fn len(&self) -> usize {
        self.recipes.read().await.len()
    }
}
