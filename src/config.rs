//! Application configuration.
//!
//! Resolved once at startup from environment variables, optionally merged
//! with a TOML file for regime-offset overrides, and passed down explicitly;
//! handlers never read configuration from ambient state.

use std::env;

use serde::Deserialize;

use crate::models::{Regime, RegimeConfig};

/// Server and engine configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind host (default: 0.0.0.0).
    pub host: String,
    /// Bind port (default: 8080).
    pub port: u16,
    /// Regime preselected for new dossiers that don't name one.
    pub default_regime: Regime,
    /// Offsets override for the 150-day regime.
    pub regime_150: RegimeConfig,
    /// Offsets override for the 90-day regime.
    pub regime_90: RegimeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            default_regime: Regime::Days150,
            regime_150: RegimeConfig::regime_150(),
            regime_90: RegimeConfig::regime_90(),
        }
    }
}

/// TOML file shape: every field optional, missing values keep defaults.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    host: Option<String>,
    port: Option<u16>,
    default_regime: Option<Regime>,
    regime_150: Option<RegimeConfig>,
    regime_90: Option<RegimeConfig>,
}

impl AppConfig {
    /// Resolve configuration from the environment.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): bind host
    /// - `PORT` (optional, default: 8080): bind port
    /// - `PRAZOS_CONFIG` (optional): path to a TOML file with overrides
    ///
    /// # Errors
    /// Returns an error if the TOML file is named but unreadable or invalid,
    /// or if an override produces an inconsistent regime.
    pub fn from_env() -> Result<Self, String> {
        let mut config = match env::var("PRAZOS_CONFIG") {
            Ok(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("cannot read config file {}: {}", path, e))?;
                Self::from_toml_str(&content)?
            }
            Err(_) => Self::default(),
        };
        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.port = port
                .parse()
                .map_err(|_| format!("invalid PORT value: {}", port))?;
        }
        Ok(config)
    }

    /// Parse a TOML override file on top of the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| format!("invalid config file: {}", e))?;
        let defaults = Self::default();
        let config = Self {
            host: file.host.unwrap_or(defaults.host),
            port: file.port.unwrap_or(defaults.port),
            default_regime: file.default_regime.unwrap_or(defaults.default_regime),
            regime_150: file.regime_150.unwrap_or(defaults.regime_150),
            regime_90: file.regime_90.unwrap_or(defaults.regime_90),
        };
        config
            .regime_150
            .validate()
            .map_err(|e| format!("regime_150 override: {}", e))?;
        config
            .regime_90
            .validate()
            .map_err(|e| format!("regime_90 override: {}", e))?;
        Ok(config)
    }

    /// Effective offsets for a regime, overrides applied.
    pub fn config_for(&self, regime: Regime) -> RegimeConfig {
        match regime {
            Regime::Days150 => self.regime_150.clone(),
            Regime::Days90 => self.regime_90.clone(),
        }
    }
}
