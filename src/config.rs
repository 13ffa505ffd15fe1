//! Runtime configuration.
//!
//! Everything has a sensible default; env vars override for local mirrors
//! and development (`PODEX_API_URL`, `PODEX_PAGE_SIZE`, `PODEX_DB`).

use std::path::PathBuf;

use crate::api::POKEAPI_BASE_URL;
use crate::catalog::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the catalog API.
    pub api_base_url: String,
    /// Entries per fetched page.
    pub page_size: u32,
    /// Path of the SQLite account database.
    pub db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: POKEAPI_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            db_path: default_data_dir().join("podex.sqlite3"),
        }
    }
}

impl Config {
    /// Defaults overridden by environment variables where set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("PODEX_API_URL") {
            if !url.is_empty() {
                config.api_base_url = url;
            }
        }
        if let Ok(size) = std::env::var("PODEX_PAGE_SIZE") {
            match size.parse::<u32>() {
                Ok(n) if n > 0 => config.page_size = n,
                _ => tracing::warn!(value = %size, "ignoring invalid PODEX_PAGE_SIZE"),
            }
        }
        if let Ok(path) = std::env::var("PODEX_DB") {
            if !path.is_empty() {
                config.db_path = PathBuf::from(path);
            }
        }
        config
    }

    /// Directory for logs and the database.
    pub fn data_dir(&self) -> PathBuf {
        self.db_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("podex")
}
