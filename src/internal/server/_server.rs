// src/internal/server/_server.rs

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::internal::config::AppConfig;
use crate::internal::server::handler::Handler;
use crate::internal::store::{seed_store, InMemoryRecipeStore, RecipeStore};

/// Server owns the configuration and the recipe store and serves the
/// recipes API over HTTP.
#[derive(Clone)]
pub struct Server {
    pub config: AppConfig,
    handler: Handler,
}

impl Server {
    /// Create a server around an existing store
    pub fn new(config: AppConfig, store: Arc<dyn RecipeStore>) -> Self {
        Self {
            config,
            handler: Handler::new(store),
        }
    }

    pub fn store(&self) -> Arc<dyn RecipeStore> {
        self.handler.store()
    }

    /// Bind the configured address and start serving in a background task.
    ///
    /// Returns once the listener is bound, so requests can be sent right away.
    pub async fn run(&self) -> Result<RunningServer> {
        let addr = self.config.server.bind_address();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind to address: {}", addr))?;
        let local_addr = listener
            .local_addr()
            .context("Failed to read bound address")?;

        let app = self.handler.create_http_router();
        let shutdown = CancellationToken::new();
        let signal = shutdown.clone();

        let task = tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(signal.cancelled_owned())
                .await;
            if let Err(e) = &result {
                error!("HTTP server error: {}", e);
            }
            result
        });

        info!("{} listening on {}", self.config.server.name, local_addr);
        info!("Endpoints:");
        info!("  - GET  http://{}/recipes", local_addr);
        info!("  - POST http://{}/recipes", local_addr);
        info!("  - PUT  http://{}/recipes/{{id}}", local_addr);
        info!("  - GET  http://{}/health", local_addr);

        Ok(RunningServer {
            local_addr,
            shutdown,
            task: Some(task),
        })
    }

    /// Serve until Ctrl+C, then shut down gracefully
    pub async fn start_with_graceful_shutdown(&self) -> Result<()> {
        info!(
            "Starting {} version {}",
            self.config.server.name, self.config.server.version
        );
        let running = self.run().await?;

        signal::ctrl_c()
            .await
            .context("Failed to install CTRL+C signal handler")?;
        info!("Received shutdown signal");

        running.close().await
    }
}

/// Handle to a server started with [`Server::run`].
///
/// Dropping the handle signals shutdown; [`RunningServer::close`] also waits
/// until the listener is released.
pub struct RunningServer {
    local_addr: SocketAddr,
    shutdown: CancellationToken,
    task: Option<JoinHandle<std::io::Result<()>>>,
}

impl RunningServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stop accepting connections and wait for in-flight requests to finish
    pub async fn close(mut self) -> Result<()> {
        self.shutdown.cancel();
        if let Some(task) = self.task.take() {
            task.await
                .context("HTTP server task panicked")?
                .context("HTTP server failed")?;
        }
        info!("Server on {} closed", self.local_addr);
        Ok(())
    }
}

impl Drop for RunningServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Build a server with a fresh in-memory store, seeded from
/// `config.store.seed_file` when one is configured.
pub async fn create_server(config: AppConfig) -> Result<Server> {
    let store = Arc::new(InMemoryRecipeStore::new());

    if let Some(seed_file) = &config.store.seed_file {
        seed_store(store.as_ref(), seed_file)
            .await
            .context("Failed to seed recipe store")?;
    }

    Ok(Server::new(config, store))
}
