use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use xdg::BaseDirectories;

use crate::types::RankingCriterion;

/// Environment variable overriding `api_url`
pub const API_URL_ENV: &str = "STATHUB_API_URL";

/// Environment variable overriding `token`
pub const TOKEN_ENV: &str = "STATHUB_TOKEN";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub api_url: String,
    pub token: Option<String>,
    pub page_size: usize,
    pub matches_page_size: usize,
    pub ranking_limit: usize,
    pub search_debounce_ms: u64,
    pub request_timeout_secs: u64,
    pub default_criterion: String,
    pub time_format: String,
    pub use_unicode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            api_url: "http://localhost:8000".to_string(),
            token: None,
            page_size: 10,
            matches_page_size: 6,
            ranking_limit: 1000,
            search_debounce_ms: 300,
            request_timeout_secs: 10,
            default_criterion: "rating".to_string(),
            time_format: "%B %-d, %Y".to_string(),
            use_unicode: true,
        }
    }
}

impl Config {
    /// Criterion used when none is given; falls back to rating on bad input
    pub fn default_criterion(&self) -> RankingCriterion {
        self.default_criterion.parse().unwrap_or_default()
    }

    /// Apply environment overrides on top of file values
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(token) = lookup(TOKEN_ENV).filter(|v| !v.trim().is_empty()) {
            self.token = Some(token);
        }
        self
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Read the config file, falling back to defaults, then apply env overrides
pub fn read() -> Config {
    read_file().with_env_overrides(|key| std::env::var(key).ok())
}

fn read_file() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", config_path.display(), e);
            return Config::default();
        }
    };

    toml::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!("Invalid config {}: {}", config_path.display(), e);
        Config::default()
    })
}
