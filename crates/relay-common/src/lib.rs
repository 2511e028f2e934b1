//! # relay-common
//!
//! Shared utilities including configuration, error handling, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, ConfigError, Environment, MondayConfig, ServerConfig, SlackConfig,
};
pub use error::AppError;
pub use telemetry::{
    install_panic_hook, try_init_tracing, try_init_tracing_with_config, TracingConfig,
    TracingError,
};
