//! Configuration file management.
//!
//! Handles reading, writing, and validating the optional `cli-vault.toml`
//! stored in the data directory. A missing file means all defaults.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Configuration stored in `cli-vault.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Capacity and field length limits
    pub limits: Limits,
    /// Data file names, relative to the data directory
    pub files: Files,
}

/// Capacity and field length limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_subjects: usize,
    pub max_terms_per_subject: usize,
    pub max_secrets: usize,
    /// Maximum length of any stored field, in bytes
    pub max_field_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_subjects: constants::MAX_SUBJECTS,
            max_terms_per_subject: constants::MAX_TERMS_PER_SUBJECT,
            max_secrets: constants::MAX_SECRETS,
            max_field_len: constants::MAX_FIELD_LEN,
        }
    }
}

/// Data file names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Files {
    pub subjects: String,
    pub secrets: String,
}

impl Default for Files {
    fn default() -> Self {
        Self {
            subjects: constants::SUBJECT_FILE.to_string(),
            secrets: constants::SECRET_FILE.to_string(),
        }
    }
}

impl Config {
    /// Path to the configuration file in `dir`
    pub fn config_path(dir: &Path) -> PathBuf {
        dir.join(constants::CONFIG_FILE)
    }

    /// Check if a configuration file exists in `dir`
    pub fn exists(dir: &Path) -> bool {
        Self::config_path(dir).exists()
    }

    /// Load configuration from `dir`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` if the file
    /// exists but cannot be read, and `ConfigError::InvalidValue` if it
    /// fails validation.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = Self::config_path(dir);

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        config.validate()?;

        debug!(limits = ?config.limits, "config loaded");
        Ok(config)
    }

    /// Save configuration to `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self, dir: &Path) -> Result<()> {
        debug!("saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::create_dir_all(dir)?;
        std::fs::write(Self::config_path(dir), contents)?;

        Ok(())
    }

    /// Write the default configuration to `dir`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyInitialized` if a config file exists.
    pub fn init(dir: &Path) -> Result<Self> {
        let path = Self::config_path(dir);
        if path.exists() {
            return Err(ConfigError::AlreadyInitialized(path).into());
        }

        let config = Self::default();
        config.save(dir)?;
        Ok(config)
    }

    /// Full path of the subject file
    pub fn subjects_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.files.subjects)
    }

    /// Full path of the secret file
    pub fn secrets_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.files.secrets)
    }

    /// Validate limits and file names
    ///
    /// Checks:
    /// - Every limit is between 1 and `MAX_LIMIT`
    /// - File names are non-empty
    /// - The two stores do not share a file, however the names are spelled
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on validation failure.
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("limits.max_subjects", self.limits.max_subjects),
            ("limits.max_terms_per_subject", self.limits.max_terms_per_subject),
            ("limits.max_secrets", self.limits.max_secrets),
            ("limits.max_field_len", self.limits.max_field_len),
        ];
        for (field, value) in limits {
            if !(1..=constants::MAX_LIMIT).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be between 1 and {}", constants::MAX_LIMIT),
                }
                .into());
            }
        }

        let files = [
            ("files.subjects", &self.files.subjects),
            ("files.secrets", &self.files.secrets),
        ];
        for (field, name) in files {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "file name cannot be empty".to_string(),
                }
                .into());
            }
        }

        if normalize(&self.files.subjects) == normalize(&self.files.secrets) {
            return Err(ConfigError::InvalidValue {
                field: "files",
                reason: format!(
                    "subjects and secrets cannot share '{}'",
                    self.files.subjects
                ),
            }
            .into());
        }

        Ok(())
    }
}

/// Resolve `.` and `..` lexically so aliases of one file compare equal.
fn normalize(name: &str) -> PathBuf {
    let mut path = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = path.components().next_back();
                let at_root = matches!(last, Some(Component::RootDir | Component::Prefix(_)));
                let can_pop = matches!(last, Some(Component::Normal(_)));
                if can_pop {
                    path.pop();
                } else if !at_root {
                    path.push("..");
                }
            }
            other => path.push(other),
        }
    }
    path
}
