//! Value-sync relay entry point
//!
//! Run with:
//! ```bash
//! cargo run -p relay-value-sync
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use relay_common::{install_panic_hook, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Configuration decides the log format, so it is read before tracing exists
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }
    install_panic_hook();

    info!(
        env = ?config.app.env,
        port = config.server.port,
        target_board_id = %config.monday.target_board_id,
        "Configuration loaded"
    );

    if let Err(e) = relay_value_sync::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
