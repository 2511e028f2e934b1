//! Update-sync relay entry point
//!
//! Run with:
//! ```bash
//! cargo run -p relay-update-sync
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
        channel_id = %config.slack.channel_id,
        bot_id = %config.slack.bot_id,
        "Configuration loaded"
    );

    if let Err(e) = relay_update_sync::run(config).await {
        error!(error = %e, "Relay failed to start");
        std::process::exit(1);
    }
}
