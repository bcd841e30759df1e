pub mod _server;
pub mod handler;

// Re-export main types
pub use _server::{create_server, RunningServer, Server};
