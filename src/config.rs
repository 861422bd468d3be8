// src/config.rs
use std::{env, net::SocketAddr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: SocketAddr,
    allowed_origins: Vec<String>,
    default_author: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_AUTHOR: &str = "default_user";

fn default_allowed_origins() -> Vec<String> {
    vec!["*".into()]
}

impl AppConfig {
    /// Reads `LISTEN_ADDR`, `ALLOWED_ORIGINS` and `DEFAULT_AUTHOR`, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let raw_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.into());
        let listen_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::Invalid(format!("LISTEN_ADDR `{raw_addr}`: {err}")))?;

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|value| parse_origins(&value))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_allowed_origins);

        let default_author = match env::var("DEFAULT_AUTHOR") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::Missing("DEFAULT_AUTHOR"));
            }
            Ok(value) => value.trim().to_string(),
            Err(_) => DEFAULT_AUTHOR.into(),
        };

        Ok(Self {
            listen_addr,
            allowed_origins,
            default_author,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn default_author(&self) -> &str {
        &self.default_author
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            allowed_origins: default_allowed_origins(),
            default_author: DEFAULT_AUTHOR.into(),
        }
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect()
}
