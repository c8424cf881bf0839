//! Server configuration read from the environment.
//!
//! DESIGN
//! ======
//! Parsing goes through a lookup closure so tests can feed values without
//! touching process-wide environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`")]
    InvalidPort(String),
    #[error("invalid boolean for {key}: `{value}`")]
    InvalidBool { key: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Gzip responses. Off when a reverse proxy already compresses.
    pub compression: bool,
}

/// Parse common truthy/falsy spellings.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl ServerConfig {
    /// Read `BIND_ADDR`, `PORT` and `COMPRESSION` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BIND_ADDR")
            .map(|h| h.trim().to_owned())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => {
                tracing::debug!(port = DEFAULT_PORT, "PORT unset, using default");
                DEFAULT_PORT
            }
        };

        let compression = match lookup("COMPRESSION") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool { key: "COMPRESSION", value: raw })?,
            None => true,
        };

        Ok(Self { host, port, compression })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
