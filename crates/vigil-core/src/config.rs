// SPDX-License-Identifier: Apache-2.0

//! Configuration management for Vigil.
//!
//! Provides layered configuration from a file and environment variables.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `VIGIL_`, `__` separates sections)
//! 2. Config file: `vigil.toml` (path overridable via `VIGIL_CONFIG`)
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Override the listen port via environment variable
//! VIGIL_SERVER__PORT=9000 vigil-server
//! ```

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::VigilError;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Webhook server settings.
    pub server: ServerConfig,
    /// GitHub API settings.
    pub github: GitHubConfig,
}

/// Webhook server settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// GitHub API settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Installation-scoped API token; falls back to `GITHUB_TOKEN` when
    /// unset.
    pub token: Option<String>,
}

/// Loads configuration from file and environment.
///
/// The config file is optional; defaults apply when it is absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be parsed, or if an
/// environment override has the wrong shape.
pub fn load_config() -> Result<AppConfig, VigilError> {
    let config_path =
        std::env::var("VIGIL_CONFIG").unwrap_or_else(|_| "vigil.toml".to_string());

    let settings = Config::builder()
        .add_source(File::with_name(&config_path).required(false))
        .add_source(Environment::with_prefix("VIGIL").separator("__"))
        .build()?;

    let config = settings.try_deserialize()?;
    Ok(config)
}
