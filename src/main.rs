use recipes_api::cli::{build_cli, parse_config};
use recipes_api::internal::server::create_server;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments first
    let matches = build_cli().get_matches();
    let config = match parse_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = recipes_api::internal::logger::init_logger(&config.logging) {
        eprintln!("Failed to initialize logger: {:#}", e);
        std::process::exit(1);
    }

    info!("Starting recipes API");
    info!("Version: {}", recipes_api::internal::config::VERSION);
    if let Some(seed_file) = &config.store.seed_file {
        info!("Seed file: {}", seed_file);
    }

    let server = match create_server(config).await {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to create server: {:#}", e);
            std::process::exit(1);
        }
    };

    info!("Server initialized with {} recipes", server.store().len().await);

    if let Err(e) = server.start_with_graceful_shutdown().await {
        error!("Server error: {:#}", e);
        std::process::exit(1);
    }

    info!("Server shutdown complete");
    Ok(())
}
