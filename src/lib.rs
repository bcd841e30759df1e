pub mod cli;
pub mod internal;

// Re-export commonly used types
pub use internal::config::AppConfig;
pub use internal::models::{Recipe, RecipeDraft};
pub use internal::server::{create_server, RunningServer, Server};
pub use internal::store::{InMemoryRecipeStore, RecipeStore, StoreError};
