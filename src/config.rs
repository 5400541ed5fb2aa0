//! Service configuration.
//!
//! Read from `config.toml` in the working directory when present, otherwise
//! built-in defaults. `HOST` and `PORT` env vars override the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allow any origin, method and header
    pub permissive: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { permissive: true }
    }
}

impl AppConfig {
    /// Load `config.toml` if it exists, then apply env overrides
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_PATH);
        let mut config = if path.exists() {
            Self::load_from(path)?
        } else {
            Self::default()
        };

        config.apply_overrides(std::env::var("HOST").ok(), std::env::var("PORT").ok())?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn apply_overrides(&mut self, host: Option<String>, port: Option<String>) -> Result<()> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port
                .parse()
                .with_context(|| format!("Invalid PORT value: {}", port))?;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
