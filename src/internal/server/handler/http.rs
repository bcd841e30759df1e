// src/internal/server/handler/http.rs

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, Path, State},
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

use super::error::ApiError;
use crate::internal::models::{Recipe, RecipeDraft};
use crate::internal::store::RecipeStore;

/// Handler owns the recipe store and builds the HTTP router around it
#[derive(Clone)]
pub struct Handler {
    store: Arc<dyn RecipeStore>,
}

impl Handler {
    /// Create a new HTTP handler serving `store`
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> Arc<dyn RecipeStore> {
        Arc::clone(&self.store)
    }

    /// Create the router with the recipe routes and the middleware stack
    pub fn create_http_router(&self) -> Router {
        let router = Router::new()
            .route("/recipes", get(Self::list_recipes).post(Self::create_recipe))
            .route("/recipes/{id}", put(Self::update_recipe))
            .with_state(self.clone())
            .route("/health", get(|| async { "OK" }))
            .layer(
                ServiceBuilder::new()
                    .layer(middleware::from_fn(Self::log_requests))
                    .layer(CorsLayer::permissive()),
            );

        info!("HTTP handler created");
        router
    }

    /// `GET /recipes`
    async fn list_recipes(State(handler): State<Handler>) -> Json<Vec<Recipe>> {
        Json(handler.store.list().await)
    }

    /// `POST /recipes`
    async fn create_recipe(
        State(handler): State<Handler>,
        payload: Result<Json<RecipeDraft>, JsonRejection>,
    ) -> Result<(StatusCode, Json<Recipe>), ApiError> {
        let Json(draft) = payload?;
        let recipe = handler.store.create(draft).await?;
        info!("Created recipe {}", recipe.id);
        Ok((StatusCode::CREATED, Json(recipe)))
    }

    /// `PUT /recipes/{id}`
    async fn update_recipe(
        State(handler): State<Handler>,
        Path(id): Path<String>,
        payload: Result<Json<RecipeDraft>, JsonRejection>,
    ) -> Result<StatusCode, ApiError> {
        let Json(draft) = payload?;
        handler.store.update(&id, draft).await?;
        info!("Updated recipe {}", id);
        Ok(StatusCode::NO_CONTENT)
    }

    /// Middleware to log HTTP requests
    async fn log_requests(request: Request<Body>, next: Next) -> Response {
        let method = request.method().clone();
        let uri = request.uri().clone();
        let version = request.version();

        debug!("→ {} {} {:?}", method, uri, version);

        let response = next.run(request).await;

        debug!("← {} {} {}", response.status(), method, uri);
        response
    }
}
