pub mod _config;

pub use _config::{get_version_info, AppConfig, LoggingConfig, ServerConfig, StoreConfig, VERSION};
