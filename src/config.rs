//! Host configuration parsed from environment variables.

use client::config::{ApiConfig, DEFAULT_API_BASE_URL};

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub api: ApiConfig,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `API_BASE_URL`: backend REST API root, default `http://localhost:3001/api`
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] when `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] when `PORT` is not a valid port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| HostError::Config { var: "PORT", message: format!("{raw:?}: {e}") })?,
            _ => DEFAULT_PORT,
        };
        let base_url = lookup("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        Ok(Self { port, api: ApiConfig::new(&base_url) })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
