//! Shared helpers for the end-to-end recipe API tests

pub mod requests;

use recipes_api::{create_server, AppConfig, RunningServer};

/// Start a server with an empty store on a free local port
pub async fn spawn_server() -> RunningServer {
    spawn_server_with(test_config()).await
}

pub async fn spawn_server_with(config: AppConfig) -> RunningServer {
    let server = create_server(config).await.expect("server should build");
    server.run().await.expect("server should bind")
}

/// Default configuration bound to an ephemeral port
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.port = 0;
    config
}
