//! Server configuration parsed from environment variables.

use std::path::PathBuf;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),

    /// The static site directory does not exist.
    #[error("site directory not found: {0}")]
    MissingSiteDir(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory served for every path the app does not route (about page,
    /// favicon, images).
    pub site_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: default `public/` next to this crate's manifest
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` does not parse or `SITE_DIR` is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let site_dir = resolve_site_dir(std::env::var("SITE_DIR").ok().as_deref())?;
        Ok(Self { port, site_dir })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn resolve_site_dir(raw: Option<&str>) -> Result<PathBuf, ConfigError> {
    let dir = raw
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public"), PathBuf::from);
    if dir.is_dir() { Ok(dir) } else { Err(ConfigError::MissingSiteDir(dir)) }
}
