//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("{var} is not a directory: {path}")]
    NotADirectory { var: &'static str, path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory searched for static assets.
    pub site_root: Option<PathBuf>,
    /// Directory holding the SPA `index.html`. Enables SPA mode when set.
    pub spa_entry: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_string(), port: DEFAULT_PORT, site_root: None, spa_entry: None }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: static asset directory
    /// - `SPA_ENTRY`: directory containing `index.html`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number or a directory
    /// variable points at something that is not a directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let site_root = parse_dir("SITE_ROOT", std::env::var("SITE_ROOT").ok().as_deref())?;
        let spa_entry = parse_dir("SPA_ENTRY", std::env::var("SPA_ENTRY").ok().as_deref())?;

        Ok(Self { host, port, site_root, spa_entry })
    }

    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw.to_string())),
    }
}

fn parse_dir(var: &'static str, raw: Option<&str>) -> Result<Option<PathBuf>, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    let path = PathBuf::from(raw);
    if !path.is_dir() {
        return Err(ConfigError::NotADirectory { var, path: raw.to_string() });
    }
    Ok(Some(path))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
