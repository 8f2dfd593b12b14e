pub mod config;
pub mod routes;
pub mod serve;
pub mod telemetry;

pub use config::ServerConfig;
pub use routes::{app, router};
pub use serve::{ServeError, serve, serve_on, shutdown_signal};
