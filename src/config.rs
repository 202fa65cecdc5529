// src/config.rs
//
// Runtime configuration
//
// Sources, later ones win:
// - built-in defaults
// - {config_dir}/ivoculture/config.toml
// - IVOCULTURE_* environment variables

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::integrations::api::DEFAULT_BASE_URL;

const APP_DIR: &str = "ivoculture";
const CONFIG_FILE: &str = "config.toml";

pub const ENV_API_URL: &str = "IVOCULTURE_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "IVOCULTURE_TIMEOUT_SECS";
pub const ENV_DATA_DIR: &str = "IVOCULTURE_DATA_DIR";
pub const ENV_PAYMENT_DELAY_MS: &str = "IVOCULTURE_PAYMENT_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub payment_delay_ms: u64,
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 15,
            payment_delay_ms: 2500,
            data_dir: default_data_dir(),
        }
    }
}

/// `{data_dir}/ivoculture`, or `./ivoculture` when the platform has none
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

impl AppConfig {
    /// Defaults, then the config file if present, then the environment
    pub fn load() -> AppResult<Self> {
        let mut config = match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&raw)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        log::debug!("Configuration read from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Applies `IVOCULTURE_*` values returned by `lookup`. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_API_URL) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            self.request_timeout_secs = parse_number(ENV_TIMEOUT_SECS, &secs)?;
        }
        if let Some(dir) = get(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(ms) = get(ENV_PAYMENT_DELAY_MS) {
            self.payment_delay_ms = parse_number(ENV_PAYMENT_DELAY_MS, &ms)?;
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }
}

fn parse_number(name: &str, value: &str) -> AppResult<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} must be a whole number, got {:?}", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.payment_delay(), Duration::from_millis(2500));
        assert!(config.data_dir.ends_with(APP_DIR));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("api_base_url = \"https://api.ivoculture.ci\"").unwrap();
        assert_eq!(config.api_base_url, "https://api.ivoculture.ci");
        assert_eq!(config.request_timeout_secs, 15);
    }

    #[test]
    fn test_environment_wins_over_file() {
        let mut config = AppConfig::from_toml("request_timeout_secs = 30").unwrap();
        config
            .apply_overrides(env(&[
                (ENV_TIMEOUT_SECS, "5"),
                (ENV_DATA_DIR, "/tmp/ivoculture-test"),
                (ENV_PAYMENT_DELAY_MS, "0"),
                (ENV_API_URL, "  "),
            ]))
            .unwrap();

        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/ivoculture-test"));
        assert_eq!(config.payment_delay(), Duration::ZERO);
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_bad_number_is_a_config_error() {
        let mut config = AppConfig::default();
        let err = config
            .apply_overrides(env(&[(ENV_TIMEOUT_SECS, "soon")]))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_config_file_on_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "payment_delay_ms = 10\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.payment_delay_ms, 10);

        std::fs::write(&path, "payment_delay_ms = \"ten\"\n").unwrap();
        assert!(matches!(
            AppConfig::from_file(&path).unwrap_err(),
            AppError::Config(_)
        ));
    }
}
