//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present). Every required value is checked up front so a relay never starts
//! half-configured.

use std::env;
use std::fmt;

use relay_core::{BoardId, CompositeClearColumns};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub monday: MondayConfig,
    pub slack: SlackConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// monday.com API configuration
#[derive(Clone)]
pub struct MondayConfig {
    pub api_key: String,
    pub api_url: String,
    /// Board that receives mirrored values and updates
    pub target_board_id: BoardId,
    pub timeout_secs: u64,
    /// Target column titles cleared with an empty JSON object
    pub composite_clear_columns: CompositeClearColumns,
}

impl fmt::Debug for MondayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MondayConfig")
            .field("api_key", &"[redacted]")
            .field("api_url", &self.api_url)
            .field("target_board_id", &self.target_board_id)
            .field("timeout_secs", &self.timeout_secs)
            .field("composite_clear_columns", &self.composite_clear_columns)
            .finish()
    }
}

/// Slack app configuration
#[derive(Clone)]
pub struct SlackConfig {
    pub bot_token: String,
    pub signing_secret: String,
    pub channel_id: String,
    /// Bot whose messages are mirrored as updates
    pub bot_id: String,
}

impl fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackConfig")
            .field("bot_token", &"[redacted]")
            .field("signing_secret", &"[redacted]")
            .field("channel_id", &self.channel_id)
            .field("bot_id", &self.bot_id)
            .finish()
    }
}

// Default value functions
fn default_app_name() -> String {
    "monday-sync".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api_url() -> String {
    "https://api.monday.com/v2".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value is invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };

        let target_board_id = required("TARGET_BOARD_ID")?;
        let target_board_id = BoardId::parse(&target_board_id)
            .map_err(|e| ConfigError::InvalidValue("TARGET_BOARD_ID", e.to_string()))?;

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .as_deref()
                    .and_then(Environment::parse)
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(default_host),
                port: parse_or("PORT", lookup("PORT"), default_port)?,
            },
            monday: MondayConfig {
                api_key: required("MONDAY_API_KEY")?,
                api_url: lookup("MONDAY_API_URL").unwrap_or_else(default_api_url),
                target_board_id,
                timeout_secs: parse_or(
                    "MONDAY_TIMEOUT_SECS",
                    lookup("MONDAY_TIMEOUT_SECS"),
                    default_timeout_secs,
                )?,
                composite_clear_columns: lookup("COMPOSITE_CLEAR_COLUMNS")
                    .map(|list| CompositeClearColumns::parse_list(&list))
                    .unwrap_or_default(),
            },
            slack: SlackConfig {
                bot_token: required("SLACK_BOT_TOKEN")?,
                signing_secret: required("SLACK_SIGNING_SECRET")?,
                channel_id: required("SLACK_CHANNEL_ID")?,
                bot_id: required("SLACK_BOT_ID")?,
            },
        })
    }
}

fn parse_or<T, D>(key: &'static str, value: Option<String>, default: D) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    D: FnOnce() -> T,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw.clone())),
        None => Ok(default()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
