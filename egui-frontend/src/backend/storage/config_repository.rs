//! # Config Repository
//!
//! Loads the app configuration from a single YAML file.
//!
//! ## Location
//!
//! 1. `$SUBSCRIPTION_CALENDAR_CONFIG` when set
//! 2. `<config dir>/subscription-calendar/config.yaml`
//!
//! A missing file is not an error: the built-in subscription list and ring
//! geometry are used instead.
//!
//! ## YAML Format
//!
//! ```yaml
//! subscriptions:
//!   - name: Netflix
//!     icon: netflix
//!     cost: 15.99
//!     due_day: 15
//! ring:
//!   radius: 40.0
//!   gap_degrees: 13.0
//! theme: dark
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::{Subscription, ThemeMode};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::backend::domain::{default_subscriptions, RingConfig};

pub const CONFIG_PATH_ENV: &str = "SUBSCRIPTION_CALENDAR_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Subscription name cannot be empty")]
    EmptyName,

    #[error("Duplicate subscription name: {0}")]
    DuplicateName(String),

    #[error("Subscription '{name}' must have a positive cost, got {cost}")]
    InvalidCost { name: String, cost: f64 },

    #[error("Subscription '{name}' has due day {due_day}, expected 1-31")]
    InvalidDueDay { name: String, due_day: u32 },

    #[error("Invalid ring geometry: {0}")]
    InvalidRing(String),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub subscriptions: Vec<Subscription>,
    pub ring: RingConfig,
    /// Theme the window opens with
    pub theme: ThemeMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            subscriptions: default_subscriptions(),
            ring: RingConfig::default(),
            theme: ThemeMode::default(),
        }
    }
}

impl AppConfig {
    /// Check the invariants the domain services rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for sub in &self.subscriptions {
            if sub.name.trim().is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if !seen.insert(sub.name.as_str()) {
                return Err(ConfigError::DuplicateName(sub.name.clone()));
            }
            if !sub.cost.is_finite() || sub.cost <= 0.0 {
                return Err(ConfigError::InvalidCost {
                    name: sub.name.clone(),
                    cost: sub.cost,
                });
            }
            if !(1..=31).contains(&sub.due_day) {
                return Err(ConfigError::InvalidDueDay {
                    name: sub.name.clone(),
                    due_day: sub.due_day,
                });
            }
        }

        let ring = &self.ring;
        if !ring.center_x.is_finite() || !ring.center_y.is_finite() {
            return Err(ConfigError::InvalidRing(format!(
                "center must be finite, got ({}, {})",
                ring.center_x, ring.center_y
            )));
        }
        if !ring.radius.is_finite() || ring.radius <= 0.0 {
            return Err(ConfigError::InvalidRing(format!("radius must be positive and finite, got {}", ring.radius)));
        }
        if !ring.gap_degrees.is_finite() || ring.gap_degrees < 0.0 {
            return Err(ConfigError::InvalidRing(format!(
                "gap must be finite and not negative, got {}",
                ring.gap_degrees
            )));
        }
        if !ring.label_offset.is_finite() || ring.label_offset < 0.0 {
            return Err(ConfigError::InvalidRing(format!(
                "label offset must be finite and not negative, got {}",
                ring.label_offset
            )));
        }
        if !ring.stroke_width.is_finite() || ring.stroke_width <= 0.0 {
            return Err(ConfigError::InvalidRing(format!(
                "stroke width must be positive and finite, got {}",
                ring.stroke_width
            )));
        }

        Ok(())
    }
}

/// File-backed configuration source
#[derive(Debug, Clone)]
pub struct ConfigRepository {
    path: Option<PathBuf>,
}

impl ConfigRepository {
    /// Repository reading from an explicit file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()) }
    }

    /// Repository at the environment override or the platform config dir
    pub fn from_environment() -> Self {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .or_else(default_config_path);
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load and validate the configuration, falling back to defaults when
    /// there is no file
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let config = match &self.path {
            Some(path) if path.exists() => {
                let yaml_content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                let config: AppConfig = serde_yaml::from_str(&yaml_content).map_err(|source| ConfigError::Parse {
                    path: path.clone(),
                    source,
                })?;
                info!("Loaded {} subscriptions from {:?}", config.subscriptions.len(), path);
                config
            }
            Some(path) => {
                info!("No config at {:?}, using built-in subscriptions", path);
                AppConfig::default()
            }
            None => {
                info!("No config directory available, using built-in subscriptions");
                AppConfig::default()
            }
        };

        config.validate()?;
        debug!("Config validated: {:?}", config.ring);
        Ok(config)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("subscription-calendar").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.yaml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ConfigRepository::new(temp_dir.path().join("absent.yaml"));

        let config = repo.load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.subscriptions.len(), 8);
        assert_eq!(config.ring.gap_degrees, 13.0);
    }

    #[test]
    fn test_load_from_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            r#"
subscriptions:
  - name: Netflix
    icon: netflix
    cost: 15.99
    due_day: 15
  - name: Gym
    icon: gym
    cost: 30.0
    due_day: 31
ring:
  gap_degrees: 8.0
theme: light
"#,
        );

        let config = ConfigRepository::new(path).load().unwrap();
        assert_eq!(config.subscriptions.len(), 2);
        assert_eq!(config.subscriptions[1].name, "Gym");
        assert_eq!(config.subscriptions[1].icon.as_str(), "gym");
        assert_eq!(config.ring.gap_degrees, 8.0);
        // Unspecified ring fields keep their defaults
        assert_eq!(config.ring.radius, 40.0);
        assert_eq!(config.theme, ThemeMode::Light);
    }

    #[test]
    fn test_partial_file_keeps_default_subscriptions() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "theme: dark\n");

        let config = ConfigRepository::new(path).load().unwrap();
        assert_eq!(config.subscriptions, default_subscriptions());
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "subscriptions: [ {name: ");

        let result = ConfigRepository::new(path).load();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_validation_rejects_bad_subscriptions() {
        let mut config = AppConfig::default();
        config.subscriptions.push(Subscription::new("Netflix", "netflix", 15.99, 15));
        assert!(matches!(config.validate(), Err(ConfigError::DuplicateName(name)) if name == "Netflix"));

        let mut config = AppConfig::default();
        config.subscriptions[0].cost = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCost { .. })));

        let mut config = AppConfig::default();
        config.subscriptions[0].due_day = 32;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDueDay { due_day: 32, .. })));

        let mut config = AppConfig::default();
        config.subscriptions[0].name = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyName)));
    }

    #[test]
    fn test_validation_rejects_bad_ring() {
        let mut config = AppConfig::default();
        config.ring.radius = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRing(_))));

        let mut config = AppConfig::default();
        config.ring.gap_degrees = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRing(_))));

        let invalid_rings = [
            RingConfig { radius: f64::INFINITY, ..RingConfig::default() },
            RingConfig { radius: f64::NAN, ..RingConfig::default() },
            RingConfig { gap_degrees: f64::NAN, ..RingConfig::default() },
            RingConfig { label_offset: -2.0, ..RingConfig::default() },
            RingConfig { label_offset: f64::INFINITY, ..RingConfig::default() },
            RingConfig { stroke_width: 0.0, ..RingConfig::default() },
            RingConfig { center_x: f64::NAN, ..RingConfig::default() },
        ];
        for ring in invalid_rings {
            let config = AppConfig { ring, ..AppConfig::default() };
            assert!(matches!(config.validate(), Err(ConfigError::InvalidRing(_))), "{:?}", ring);
        }

        let config = AppConfig {
            ring: RingConfig { label_offset: 0.0, gap_degrees: 0.0, ..RingConfig::default() },
            ..AppConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_error_surfaces_from_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            "subscriptions:\n  - { name: Bad, icon: bad, cost: -3.0, due_day: 4 }\n",
        );

        let result = ConfigRepository::new(path).load();
        assert!(matches!(result, Err(ConfigError::InvalidCost { .. })));
    }
}
