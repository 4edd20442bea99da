//! Environment driven configuration

use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

const DEFAULT_DATABASE_URL: &str = "sqlite:database/pokedex.db";
const DEFAULT_START_URL: &str = "https://pokemondb.net/pokedex/bulbasaur";
const DEFAULT_REQUEST_DELAY_MS: u64 = 500;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// `DATABASE_URL`
    pub database_url: String,
    /// `START_URL`, the first page of the traversal
    pub start_url: Url,
    /// `REQUEST_DELAY_MS`, pause between two page fetches
    pub request_delay: Duration,
    /// `REQUEST_TIMEOUT_SECS`
    pub request_timeout: Duration,
    /// `MAX_PAGES`, unlimited when unset
    pub max_pages: Option<u32>,
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to
    /// pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = value("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let start_url = value("START_URL").unwrap_or_else(|| DEFAULT_START_URL.to_string());
        let start_url = Url::parse(start_url.trim())
            .with_context(|| format!("START_URL is not a valid URL: {start_url}"))?;

        let request_delay = value("REQUEST_DELAY_MS")
            .map(|v| v.trim().parse::<u64>())
            .transpose()
            .context("REQUEST_DELAY_MS must be a whole number of milliseconds")?
            .unwrap_or(DEFAULT_REQUEST_DELAY_MS);

        let request_timeout = value("REQUEST_TIMEOUT_SECS")
            .map(|v| v.trim().parse::<u64>())
            .transpose()
            .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let max_pages = value("MAX_PAGES")
            .map(|v| v.trim().parse::<u32>())
            .transpose()
            .context("MAX_PAGES must be a positive whole number")?;

        Ok(Self {
            database_url,
            start_url,
            request_delay: Duration::from_millis(request_delay),
            request_timeout: Duration::from_secs(request_timeout),
            max_pages,
        })
    }
}
