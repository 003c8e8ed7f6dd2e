//! Server configuration parsed from environment variables.
//!
//! A `.env` file in the working directory is loaded first when present.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `POS_API_URL`: POS backend base URL, default `http://localhost:8000/api`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::ApiConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}")]
    InvalidPort { value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub api: ApiConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, ".env could not be read");
            }
        }
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { port, api: ApiConfig::from_env() })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}
