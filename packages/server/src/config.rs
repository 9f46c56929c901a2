use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// JSON file to seed the directory from; built-in seed when unset
    pub seed_file: Option<PathBuf>,
    /// Empty means any origin is allowed
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key -> value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            seed_file: lookup("ACTIVITIES_SEED_FILE")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            allowed_origins: parse_origins(&lookup("ALLOWED_ORIGINS").unwrap_or_default()),
            request_timeout: Duration::from_secs(
                lookup("REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(|| "30".to_string())
                    .parse()
                    .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            seed_file: None,
            allowed_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
