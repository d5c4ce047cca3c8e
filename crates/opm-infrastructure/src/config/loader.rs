//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables, and
//! default values using Figment.

use crate::config::AppConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use opm_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Prefixed environment variables (e.g., `OPM_LOGGING__LEVEL=debug`)
    /// 4. `OCTOPERF_API_KEY` and `OCTOPERF_PROJECT_ID`
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        match &self.config_path {
            Some(config_path) if config_path.exists() => {
                figment = figment.merge(Toml::file(config_path));
            }
            Some(config_path) => {
                return Err(Error::config(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            None => {
                if let Some(default_path) = Self::find_default_config_path() {
                    figment = figment.merge(Toml::file(&default_path));
                }
            }
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        // Read verbatim: figment's Env would turn `12345` into an integer and
        // `007` into 7.
        for (var, key) in CANONICAL_ENV_KEYS {
            if let Some(value) = read_env_var(var)? {
                figment = figment.merge(Serialized::default(key, value));
            }
        }

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.is_file())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical OctoPerf variables and the config keys they set
const CANONICAL_ENV_KEYS: [(&str, &str); 2] = [
    (API_KEY_ENV_VAR, "octoperf.api_key"),
    (PROJECT_ID_ENV_VAR, "octoperf.default_project_id"),
];

fn read_env_var(var: &str) -> Result<Option<String>> {
    match env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(Error::config(format!(
            "Environment variable {var} is not valid UTF-8"
        ))),
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_octoperf_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_octoperf_config(config: &AppConfig) -> Result<()> {
    let base_url = config.octoperf.base_url.trim();
    if base_url.is_empty() {
        return Err(Error::config("OctoPerf base URL cannot be empty"));
    }
    if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
        return Err(Error::config(format!(
            "OctoPerf base URL must use http or https: {base_url}"
        )));
    }
    Ok(())
}
