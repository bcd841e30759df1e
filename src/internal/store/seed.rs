use anyhow::{Context, Result};
use std::fs;
use tracing::info;

use super::RecipeStore;
use crate::internal::models::RecipeDraft;

/// Read a YAML (or JSON) list of recipe drafts from `file_path`
pub fn load_seed_file(file_path: &str) -> Result<Vec<RecipeDraft>> {
    let data = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read seed file: {}", file_path))?;

    serde_yaml::from_str(&data)
        .with_context(|| format!("Failed to parse recipes from seed file: {}", file_path))
}

/// Create every seed recipe in `store`, in file order. Returns how many were added.
pub async fn seed_store(store: &dyn RecipeStore, file_path: &str) -> Result<usize> {
    let drafts = load_seed_file(file_path)?;
    let count = drafts.len();

    for draft in drafts {
        let name = draft.name.clone();
        store
            .create(draft)
            .await
            .with_context(|| format!("Invalid seed recipe `{}` in {}", name, file_path))?;
    }

    info!("Seeded {} recipes from {}", count, file_path);
    Ok(count)
}
