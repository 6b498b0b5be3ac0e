//! Prop configuration
//!
//! Operators running the experience can re-skin the prop without rebuilding:
//! the unlock code, the owner label on the lock screen, and the lockout
//! ruleset all come from an optional TOML file. Everything falls back to the
//! canonical defaults when the file is absent or malformed.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::auth::{LockoutPolicy, PIN_LENGTH};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "akriti-phone";

const DEFAULT_PIN_CODE: &str = "0712";
const DEFAULT_OWNER_LABEL: &str = "Akriti's Phone";

/// Runtime configuration for the prop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropConfig {
    /// Four-digit unlock code.
    #[serde(default = "default_pin_code")]
    pub pin_code: String,

    /// Label shown under the lock-screen keypad.
    #[serde(default = "default_owner_label")]
    pub owner_label: String,

    /// Lockout ruleset for failed unlock attempts.
    #[serde(default)]
    pub lockout: LockoutConfig,
}

/// Lockout section of the config file.
///
/// `enabled = false` reproduces the prop's original no-lockout behavior.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LockoutConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Failed attempts that trigger the lockout.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Lockout length in seconds.
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u32,
}

fn default_pin_code() -> String {
    DEFAULT_PIN_CODE.to_string()
}

fn default_owner_label() -> String {
    DEFAULT_OWNER_LABEL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_attempts() -> u32 {
    5
}

fn default_duration_secs() -> u32 {
    300
}

impl Default for LockoutConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_attempts: default_max_attempts(),
            duration_secs: default_duration_secs(),
        }
    }
}

impl LockoutConfig {
    /// Translate this section into the auth layer's policy.
    pub fn policy(&self) -> LockoutPolicy {
        if self.enabled {
            LockoutPolicy::custom(self.max_attempts, self.duration_secs)
        } else {
            LockoutPolicy::disabled()
        }
    }
}

impl Default for PropConfig {
    fn default() -> Self {
        Self {
            pin_code: default_pin_code(),
            owner_label: default_owner_label(),
            lockout: LockoutConfig::default(),
        }
    }
}

impl PropConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist or can't be
    /// parsed.
    pub fn load() -> Self {
        let path = match Self::config_file_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config file: {}", e);
                Self::default()
            }
        }
    }

    /// Load and validate configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config.validated())
    }

    /// Replace an unusable unlock code with the default.
    fn validated(mut self) -> Self {
        let usable = self.pin_code.len() == PIN_LENGTH
            && self.pin_code.chars().all(|c| c.is_ascii_digit());
        if !usable {
            tracing::warn!(
                "Configured PIN code {:?} is not {} digits, using default",
                self.pin_code,
                PIN_LENGTH
            );
            self.pin_code = default_pin_code();
        }
        self
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
