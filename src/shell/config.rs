use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const DATA_PATH_KEY: &str = "MOTORCYCLES_DATA_PATH";
pub const BIND_ADDR_KEY: &str = "MOTORCYCLES_BIND_ADDR";
pub const GRAPHIQL_KEY: &str = "MOTORCYCLES_GRAPHIQL";

const DEFAULT_DATA_PATH: &str = "./motorcycleData.json";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a socket address ({value}): {source}")]
    InvalidBindAddr {
        key: &'static str,
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("{key} must be one of true, false, 1, 0 (got {value})")]
    InvalidFlag { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub graphiql: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads every setting through `lookup`, falling back to defaults for absent keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = lookup(DATA_PATH_KEY)
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string())
            .into();

        let raw_addr = lookup(BIND_ADDR_KEY).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                key: BIND_ADDR_KEY,
                value: raw_addr.clone(),
                source,
            })?;

        let graphiql = match lookup(GRAPHIQL_KEY) {
            None => false,
            Some(value) => parse_flag(GRAPHIQL_KEY, value)?,
        };

        Ok(Self {
            data_path,
            bind_addr,
            graphiql,
        })
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key, value }),
    }
}
