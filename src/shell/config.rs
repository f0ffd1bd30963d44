use std::env;
use std::path::PathBuf;

use anyhow::Context;

/// Service configuration, read from the environment:
/// `STAGE_NOTES_HOST`, `STAGE_NOTES_PORT`, `STAGE_NOTES_DB`.
///
/// Without `STAGE_NOTES_DB` the service runs on the in-memory store, which
/// is enough for local development.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = get("STAGE_NOTES_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match get("STAGE_NOTES_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid STAGE_NOTES_PORT: {raw}"))?,
            None => 8080,
        };
        let database = get("STAGE_NOTES_DB").map(PathBuf::from);
        Ok(Self {
            host,
            port,
            database,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
