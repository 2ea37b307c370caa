use crate::storage::resolve_data_path;
use std::{env, path::PathBuf, time::Duration};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SCRAPE_TIMEOUT_SECS: u64 = 10;

/// Runtime settings, read from the environment once at start-up.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    /// Prefix prepended to the percent-encoded page URL; `None` fetches directly.
    pub scrape_proxy: Option<String>,
    pub scrape_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let scrape_proxy = env::var("SCRAPE_PROXY")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        let scrape_timeout = env::var("SCRAPE_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_SCRAPE_TIMEOUT_SECS);

        Self {
            port,
            data_path: resolve_data_path(),
            scrape_proxy,
            scrape_timeout: Duration::from_secs(scrape_timeout),
        }
    }
}
