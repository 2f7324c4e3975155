//! Host configuration parsed from environment variables.

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_URL: &str = "http://127.0.0.1:8000/api/snippets";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub upstream_url: String,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `SNIPPETS_HOST_PORT`: listen port, default 3000
    /// - `SNIPPETS_UPSTREAM_URL`: snippet collection endpoint of the backend,
    ///   default `http://127.0.0.1:8000/api/snippets`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("SNIPPETS_HOST_PORT").ok().as_deref())?;
        let upstream_url = parse_upstream_url(std::env::var("SNIPPETS_UPSTREAM_URL").ok().as_deref())?;
        Ok(Self { port, upstream_url })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid { var: "SNIPPETS_HOST_PORT", value: value.to_owned() }),
    }
}

fn parse_upstream_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = match raw.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_UPSTREAM_URL.to_owned()),
        Some(value) => value,
    };
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::Invalid { var: "SNIPPETS_UPSTREAM_URL", value: value.to_owned() });
    }
    Ok(value.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
