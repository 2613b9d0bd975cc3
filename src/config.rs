use color_eyre::{eyre::WrapErr, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::utils::{DEFAULT_GRAPH_GRANULARITY, MAX_GRAPH_GRANULARITY, UPDATE_INTERVAL};

pub const CONFIG_ENV: &str = "SYSGAUGE_CONFIG";

/// User settings read from `config.json`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of samples visible in each graph.
    pub graph_granularity: usize,
    /// Milliseconds between two samples.
    pub update_interval_ms: u64,
    /// Hide the swap graph on machines without swap.
    pub show_swap: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graph_granularity: DEFAULT_GRAPH_GRANULARITY,
            update_interval_ms: UPDATE_INTERVAL.as_millis() as u64,
            show_swap: true,
        }
    }
}

impl Config {
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }

    /// Load the config from `path`, falling back to defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Config file not found at '{}', using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("cannot read config '{}'", path.display()))?;
        let config = Self::from_json(&raw)
            .wrap_err_with(|| format!("invalid config '{}'", path.display()))?;

        info!("Loaded config from '{}'", path.display());
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.validated())
    }

    fn validated(mut self) -> Self {
        if self.graph_granularity == 0 {
            warn!("graph_granularity must be at least 1, using 1");
            self.graph_granularity = 1;
        }
        if self.graph_granularity > MAX_GRAPH_GRANULARITY {
            warn!(
                "graph_granularity {} is too large, using {}",
                self.graph_granularity, MAX_GRAPH_GRANULARITY
            );
            self.graph_granularity = MAX_GRAPH_GRANULARITY;
        }
        if self.update_interval_ms == 0 {
            warn!(
                "update_interval_ms must be positive, using {}",
                UPDATE_INTERVAL.as_millis()
            );
            self.update_interval_ms = UPDATE_INTERVAL.as_millis() as u64;
        }
        self
    }
}

/// `$SYSGAUGE_CONFIG` if set, otherwise `$XDG_CONFIG_HOME/sysgauge/config.json`.
pub fn default_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("sysgauge").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.graph_granularity, 60);
        assert_eq!(config.update_interval(), Duration::from_secs(2));
    }

    #[test]
    fn partial_config_overrides_fields() {
        let config = Config::from_json(r#"{ "graph_granularity": 120, "show_swap": false }"#).unwrap();
        assert_eq!(config.graph_granularity, 120);
        assert!(!config.show_swap);
        assert_eq!(config.update_interval_ms, 2000);
    }

    #[test]
    fn zero_values_are_corrected() {
        let config =
            Config::from_json(r#"{ "graph_granularity": 0, "update_interval_ms": 0 }"#).unwrap();
        assert_eq!(config.graph_granularity, 1);
        assert_eq!(config.update_interval_ms, 2000);
    }

    #[test]
    fn oversized_granularity_is_capped() {
        let config = Config::from_json(r#"{ "graph_granularity": 18446744073709551615 }"#).unwrap();
        assert_eq!(config.graph_granularity, MAX_GRAPH_GRANULARITY);

        let config = Config::from_json(r#"{ "graph_granularity": 3600 }"#).unwrap();
        assert_eq!(config.graph_granularity, 3600);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Config::from_json("{ graph_granularity: ").is_err());
        assert!(Config::from_json(r#"{ "graph_granularity": -4 }"#).is_err());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("sysgauge-missing-config").join("config.json");
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = std::env::temp_dir().join(format!("sysgauge-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{ "update_interval_ms": 750 }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.update_interval(), Duration::from_millis(750));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
