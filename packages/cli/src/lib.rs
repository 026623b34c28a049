// ABOUTME: Server-side pieces of the folio binary
// ABOUTME: Configuration, logging setup and the HTTP server bootstrap

pub mod config;
pub mod logging;
pub mod server;

pub use config::{Config, ConfigError};
pub use server::{create_app, run_server};
