use std::env;
use std::time::Duration;

use crate::utils::AppError;

/// Timeout de seleção de servidor para a conexão inicial
pub const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub mongo_dbname: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads the configuration from the process environment (after `.env` is loaded)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::ConfigError(format!("{} must be set", key)))
        };

        let mongo_uri = required("MONGO_URI")?;
        let mongo_dbname = required("MONGO_DBNAME")?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::ConfigError(format!("Invalid PORT '{}': {}", raw, e)))?,
            None => 5000,
        };

        Ok(Self {
            mongo_uri,
            mongo_dbname,
            host,
            port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
