use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration, read from the environment (and `.env` if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // .env is optional
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; missing keys fall back to defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let port = match get("IVOIRE_GEO_PORT") {
            Some(p) => p.parse::<u16>().with_context(|| {
                format!("IVOIRE_GEO_PORT must be a valid port number, got '{p}'")
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: get("IVOIRE_GEO_HOST").unwrap_or(defaults.host),
            port,
            rust_log: get("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
