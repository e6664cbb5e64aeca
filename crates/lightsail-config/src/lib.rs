//! # lightsail-config
//!
//! Layered configuration loading for the Lightsail tools using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LIGHTSAIL_*` prefix, `__` as separator)
//! 2. `AWS_REGION`, for the region only
//! 3. Project-level `.lightsail/config.toml`
//! 4. User-level `~/.config/lightsail/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LIGHTSAIL_CLIENT__REGION` -> `client.region`,
//! `LIGHTSAIL_GENERAL__OUTPUT_FORMAT` -> `general.output_format`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use lightsail_config::LightsailConfig;
//!
//! let config = LightsailConfig::load_with_dotenv().expect("config");
//! println!("endpoint: {}", config.client.resolved_endpoint().expect("endpoint"));
//! ```

mod client;
mod error;
mod general;

pub use client::ClientConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory name used for both the user-global and project-local config.
const CONFIG_DIR: &str = "lightsail";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LightsailConfig {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LightsailConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`LightsailConfig::load_with_dotenv`] for
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Figment`] if a source cannot be read or has the wrong shape.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        tracing::debug!(
            region = %config.client.region,
            endpoint_override = config.client.has_endpoint_override(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`LightsailConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so callers can merge further providers on top, e.g. CLI flags.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(format!(".{CONFIG_DIR}/config.toml"));
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: the standard AWS region variable
        figment = figment.merge(
            Env::raw()
                .only(&["AWS_REGION"])
                .map(|_| "client.region".into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("LIGHTSAIL_").split("__"))
    }

    /// Check every section, including that the client can address the
    /// service.
    ///
    /// # Errors
    ///
    /// The errors of [`LightsailConfig::validate_general`] and of
    /// [`ClientConfig::resolved_endpoint`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_general()?;
        self.client.resolved_endpoint()?;
        Ok(())
    }

    /// Check only the settings that apply without a client, leaving region
    /// and endpoint to the callers that need them.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] for an unknown output format.
    pub fn validate_general(&self) -> Result<(), ConfigError> {
        if !matches!(self.general.output_format.as_str(), "json" | "raw") {
            return Err(ConfigError::InvalidValue {
                field: "general.output_format".into(),
                reason: format!("'{}' is not one of json, raw", self.general.output_format),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(CONFIG_DIR).join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory. Silently does nothing
    /// if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    if let Err(error) = dotenvy::from_path(&env_path) {
                        tracing::warn!(path = %env_path.display(), %error, "failed to read .env");
                    }
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
