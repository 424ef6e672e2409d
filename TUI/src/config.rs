//! Application configuration and constants.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

pub const APP_NAME: &str = "xsentiment";

/// Environment variable overriding `api_base_url`.
pub const API_URL_ENV: &str = "XSENTIMENT_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base address of the sentiment API
    pub api_base_url: String,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,

    /// Main loop tick rate in milliseconds (target 60 FPS = ~16ms)
    pub tick_rate_ms: u64,

    /// How many ticks to show status messages (180 = ~3s at 60fps)
    pub status_timeout_ticks: u64,

    /// Modulo for animation frame counter
    pub animation_frame_mod: usize,

    /// Lines to scroll per key press
    pub scroll_step: u16,

    /// Default log filter when RUST_LOG is unset
    pub log_level: String,

    /// Log file for the interactive UI. Defaults under the data directory.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            timeout_ms: 20_000,
            tick_rate_ms: 16,
            status_timeout_ticks: 180,
            animation_frame_mod: 360,
            scroll_step: 3,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    /// A missing file yields defaults. Values are checked by `validate`
    /// once overrides are applied.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => match Self::default_path() {
                Some(p) => Self::load_from(&p),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_NAME).join("config.toml"))
    }

    pub fn default_log_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_NAME).join(format!("{}.log", APP_NAME)))
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(Self::default_log_path)
    }

    /// Apply `XSENTIMENT_API_URL` if set.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_base_url = url.trim().to_string();
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "api_base_url must start with http:// or https://, got {:?}",
                self.api_base_url
            )));
        }
        if self.timeout_ms == 0 {
            return Err(Error::Config("timeout_ms must be greater than zero".to_string()));
        }
        if self.tick_rate_ms == 0 {
            return Err(Error::Config("tick_rate_ms must be greater than zero".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Key bindings shown in the hints panel
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("Tab", "switch URL / text"),
    ("Enter", "analyze"),
    ("Ctrl+J", "newline (text)"),
    ("Ctrl+V", "paste"),
    ("Ctrl+N", "next"),
    ("Esc", "clear / quit"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.timeout(), Duration::from_secs(20));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_base_url = \"https://sentiment.example.com\"").unwrap();
        writeln!(file, "timeout_ms = 5000").unwrap();

        let config = Config::load_from(file.path()).unwrap();

        assert_eq!(config.api_base_url, "https://sentiment.example.com");
        assert_eq!(config.timeout_ms, 5000);
        assert_eq!(config.tick_rate_ms, 16);
    }

    #[test]
    fn test_bad_toml_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_ms = \"soon\"").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_bad_file_url_can_be_overridden() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_base_url = \"localhost:5000\"").unwrap();

        let mut config = Config::load_from(file.path()).unwrap();
        assert!(config.validate().is_err());

        config.api_base_url = "http://127.0.0.1:5000".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_url_rejected() {
        let config = Config {
            api_base_url: "localhost:5000".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
