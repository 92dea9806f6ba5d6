use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_DIR, CONFIG_FILE, DEFAULT_API_URL, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL,
    DEFAULT_TIMEOUT_SECS,
};

/// Client configuration, read from `~/.fitlog/config.yaml` with env overrides
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub timeout_secs: u64,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: String::from(DEFAULT_API_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: String::from(DEFAULT_LOG_LEVEL),
        }
    }
}

impl Config {
    /// Load from the default location, then apply `FITLOG_*` environment overrides
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&Self::default_path())?;
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Path of the config file in the user's home directory
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    /// Read a YAML config file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        ensure!(
            config.timeout_secs > 0,
            "{}: timeout_secs must be greater than 0",
            path.display()
        );
        Ok(config)
    }

    /// Apply overrides from a variable lookup (normally the process environment)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("FITLOG_API_URL").filter(|v| !v.is_empty()) {
            self.api_url = url;
        }
        if let Some(secs) = lookup("FITLOG_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            self.timeout_secs = secs;
        }
        if let Some(level) = lookup("FITLOG_LOG_LEVEL").filter(|v| !v.is_empty()) {
            self.log_level = level;
        }
        self
    }

    /// Parsed `log_level`; the caller decides the fallback
    pub fn tracing_level(&self) -> Result<tracing::Level> {
        self.log_level
            .parse()
            .with_context(|| format!("invalid log_level {:?}", self.log_level))
    }

    /// Full URL for an API path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), path)
    }
}
