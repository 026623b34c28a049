// ABOUTME: Tracing subscriber setup for the server binary
// ABOUTME: Human-readable output filtered by RUST_LOG, defaulting to info

use folio_config::constants::RUST_LOG;
use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    let env_filter = EnvFilter::try_from_env(RUST_LOG)
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx::query=warn"));

    // A second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}
