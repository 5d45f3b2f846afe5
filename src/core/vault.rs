//! The primary interface for cli-vault operations.
//!
//! A [`Vault`] is a data directory: its configuration plus one subject store
//! and one secret store. The two stores never interact.

use std::path::Path;

use tracing::{debug, warn};

use crate::core::config::Config;
use crate::core::secrets::SecretStore;
use crate::core::storage::Filesystem;
use crate::core::subjects::SubjectStore;
use crate::error::Result;

/// A data directory with both stores loaded.
#[derive(Debug)]
pub struct Vault {
    config: Config,
    subjects: SubjectStore,
    secrets: SecretStore,
}

impl Vault {
    /// Open the vault in `dir`.
    ///
    /// Loads `cli-vault.toml` if present, then both store files. Missing store
    /// files are empty stores.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration file exists but is invalid,
    /// or an I/O error if a missing data directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.exists() {
            debug!(dir = %dir.display(), "creating data directory");
            std::fs::create_dir_all(dir)?;
        }

        let config = Config::load(dir)?;
        debug!(dir = %dir.display(), "opening vault");

        let subjects = SubjectStore::open(
            Filesystem::new(config.subjects_path(dir)),
            config.limits,
        );
        let secrets = SecretStore::open(
            Filesystem::private(config.secrets_path(dir)),
            config.limits,
        );

        if subjects.was_clamped() || secrets.was_clamped() {
            warn!("stored data exceeded configured limits; extra records were not loaded");
        }

        Ok(Self {
            config,
            subjects,
            secrets,
        })
    }

    /// Effective configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn subjects(&self) -> &SubjectStore {
        &self.subjects
    }

    pub fn subjects_mut(&mut self) -> &mut SubjectStore {
        &mut self.subjects
    }

    pub fn secrets(&self) -> &SecretStore {
        &self.secrets
    }

    pub fn secrets_mut(&mut self) -> &mut SecretStore {
        &mut self.secrets
    }
}
