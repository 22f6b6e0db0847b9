// src/config/settings.rs
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "TOPTIMIZE";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Origin serving the `/api` routes.
    pub api_base_url: String,
    pub analyze_path: String,
    pub health_path: String,
    pub currency_symbol: String,
    /// `None` leaves requests without a client-side deadline.
    pub request_timeout_secs: Option<u64>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            analyze_path: "/api/analyze-tender".to_string(),
            health_path: "/api/health".to_string(),
            currency_symbol: "€".to_string(),
            request_timeout_secs: None,
            window_width: 960.0,
            window_height: 720.0,
        }
    }
}

impl Settings {
    /// Defaults, then the user settings file, then `TOPTIMIZE_*` variables.
    pub fn load() -> Result<Self> {
        match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("No config directory on this platform, using defaults");
                Self::load_sources(None)
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        Self::load_sources(Some(path))
    }

    fn load_sources(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            log::debug!("Looking for settings at {}", path.display());
            builder = builder.add_source(File::from(path).required(false));
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Failed to parse settings")?;

        Ok(settings)
    }

    pub fn analyze_url(&self) -> String {
        join_url(&self.api_base_url, &self.analyze_path)
    }

    pub fn health_url(&self) -> String {
        join_url(&self.api_base_url, &self.health_path)
    }
}

/// `<config dir>/toptimize/settings`, extension picked by the `config` crate.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("toptimize").join("settings"))
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
