use clap::{Arg, ArgMatches, Command};

use crate::internal::config::AppConfig;

pub fn build_cli() -> Command {
    // Leak the version string to get a 'static lifetime
    let version: &'static str =
        Box::leak(crate::internal::config::get_version_info().into_boxed_str());

    Command::new("recipes-api")
        .version(version)
        .about("In-memory recipes CRUD API")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to config file (default: ./config.yaml, /etc/recipes-api/config.yaml)"),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .help("Address to listen on"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .short('p')
                .value_parser(clap::value_parser!(u16))
                .help("Port to listen on (0 picks a free port)"),
        )
        .arg(
            Arg::new("seed-file")
                .long("seed-file")
                .help("YAML or JSON list of recipes to load at startup"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log level or filter directive (overridden by RUST_LOG)"),
        )
}

/// Load the layered configuration and apply command line overrides on top.
pub fn parse_config(matches: &ArgMatches) -> anyhow::Result<AppConfig> {
    let config_path = matches.get_one::<String>("config").map(String::as_str);
    let mut config = AppConfig::load_from(config_path)?;

    if let Some(host) = matches.get_one::<String>("host") {
        config.server.host = host.clone();
    }
    if let Some(port) = matches.get_one::<u16>("port") {
        config.server.port = *port;
    }
    if let Some(seed_file) = matches.get_one::<String>("seed-file") {
        config.store.seed_file = Some(seed_file.clone());
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.clone();
    }

    Ok(config)
}
