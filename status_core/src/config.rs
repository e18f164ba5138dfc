use serde::{Deserialize, Serialize};

use crate::error::{Result, StatusError};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Listener settings read once at startup. Resolution order is a single
/// tier: an explicit environment value wins, otherwise the fixed default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads `PORT` and `APP_ENV` from the process environment.
    ///
    /// A `PORT` that is present but not a valid port number is a fatal
    /// configuration error rather than a silent fallback to the default.
    pub fn from_env() -> Result<Self> {
        Self::resolve(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("APP_ENV").ok().as_deref(),
        )
    }

    fn resolve(port: Option<&str>, environment: Option<&str>) -> Result<Self> {
        let port = match port {
            Some(raw) => raw.parse::<u16>().map_err(|e| {
                StatusError::InvalidConfig(format!("Invalid PORT '{}': {}", raw, e))
            })?,
            None => DEFAULT_PORT,
        };

        let environment = environment
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_ENVIRONMENT)
            .to_string();

        Ok(Self { port, environment })
    }
}
