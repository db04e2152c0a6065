//! Resolver configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `CAMERA_PERSONALITY_*` environment variables.

use crate::errors::PersonalityError;
use crate::legacy::LegacyOptions;
use crate::store::is_valid_personality_name;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding `<name>.json` personality files on the device image.
pub const DEFAULT_PERSONALITIES_DIR: &str = "/vendor/etc/device_personalities";
/// Personality tried when no name is given or the named one fails.
pub const DEFAULT_PERSONALITY_NAME: &str = "default";
/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "CAMERA_PERSONALITY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Root directory of personality files
    pub personalities_dir: PathBuf,
    /// Personality name used as the last structured fallback
    pub default_personality: String,
    /// Legacy back camera setting produces a front-facing camera
    pub back_camera_reports_front: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            personalities_dir: PathBuf::from(DEFAULT_PERSONALITIES_DIR),
            default_personality: DEFAULT_PERSONALITY_NAME.to_string(),
            back_camera_reports_front: false,
        }
    }
}

impl ResolverConfig {
    /// Load configuration from a TOML file with environment overrides.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PersonalityError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
        }

        let defaults = Self::default();
        let settings = config::Config::builder()
            .set_default(
                "personalities_dir",
                defaults.personalities_dir.display().to_string(),
            )
            .and_then(|b| b.set_default("default_personality", defaults.default_personality))
            .and_then(|b| {
                b.set_default(
                    "back_camera_reports_front",
                    defaults.back_camera_reports_front,
                )
            })
            .map_err(|e| PersonalityError::Config(format!("Failed to set defaults: {}", e)))?
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| PersonalityError::Config(format!("Failed to read config file: {}", e)))?;

        let loaded: ResolverConfig = settings
            .try_deserialize()
            .map_err(|e| PersonalityError::Config(format!("Failed to parse config file: {}", e)))?;

        loaded.validate().map_err(PersonalityError::Config)?;
        log::debug!("Resolver configuration: {:?}", loaded);
        Ok(loaded)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PersonalityError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PersonalityError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| PersonalityError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, toml_string)
            .map_err(|e| PersonalityError::Config(format!("Failed to write config file: {}", e)))?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from("camera_personality.toml")
    }

    /// Load from default location, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::load_from_file(Self::default_path()).unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    pub fn legacy_options(&self) -> LegacyOptions {
        LegacyOptions {
            back_camera_reports_front: self.back_camera_reports_front,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.personalities_dir.as_os_str().is_empty() {
            return Err("Personalities directory must not be empty".to_string());
        }
        if !is_valid_personality_name(&self.default_personality) {
            return Err(format!(
                "Invalid default personality name: {:?}",
                self.default_personality
            ));
        }
        Ok(())
    }
}
