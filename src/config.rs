use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid bind address: {0}")]
    InvalidAddress(#[from] std::net::AddrParseError),

    #[error("no fallback port after {port}")]
    NoFallbackPort { port: u16 },
}

/// Server settings, read from the environment (and `.env`, once loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unset or unparseable values keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    /// Address tried when the primary port is taken. `PORT=65535` has none.
    pub fn fallback_addr(&self) -> Result<SocketAddr, ConfigError> {
        let port = self
            .port
            .checked_add(1)
            .ok_or(ConfigError::NoFallbackPort { port: self.port })?;
        Ok(format!("{}:{}", self.host, port).parse()?)
    }
}
