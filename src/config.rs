use std::{env, fs, io, net::SocketAddr, path::PathBuf};

use thiserror::Error;

use crate::domain::client::Client;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    pub bind_port: u16,
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_PORT must be a valid u16")]
    InvalidPort,
    #[error("invalid bind address or port")]
    InvalidSocket,
    #[error("failed to read CLIENTS_SEED_FILE {path}: {source}")]
    SeedRead { path: PathBuf, source: io::Error },
    #[error("CLIENTS_SEED_FILE {path} must contain a JSON array of clients: {source}")]
    SeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1".to_string());
        let bind_port = lookup("BIND_PORT")
            .map(|value| value.parse::<u16>().map_err(|_| ConfigError::InvalidPort))
            .transpose()?
            .unwrap_or(8080);
        let seed_file = lookup("CLIENTS_SEED_FILE")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let config = Self {
            bind_addr,
            bind_port,
            seed_file,
        };

        let _ = config.bind_socket()?;
        Ok(config)
    }

    pub fn bind_socket(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.bind_port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }

    /// Loads the initial collection. No seed file means an empty registry.
    pub fn load_seed(&self) -> Result<Vec<Client>, ConfigError> {
        let Some(path) = &self.seed_file else {
            return Ok(Vec::new());
        };

        let raw = fs::read(path).map_err(|source| ConfigError::SeedRead {
            path: path.clone(),
            source,
        })?;
        serde_json::from_slice(&raw).map_err(|source| ConfigError::SeedParse {
            path: path.clone(),
            source,
        })
    }
}
