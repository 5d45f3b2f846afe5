//! Error types.
//!
//! The top-level [`Error`] wraps one enum per concern so the shell can match
//! on the category (e.g. to print a hint) without string inspection.

use std::path::PathBuf;

use thiserror::Error;

/// The kind of record a capacity limit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Subject,
    Term,
    Secret,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Subject => "subjects",
            Self::Term => "terms",
            Self::Secret => "secrets",
        };
        f.write_str(name)
    }
}

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Dialog(#[from] dialoguer::Error),

    #[error("interactive input needs a terminal")]
    NotInteractive,
}

/// Errors raised by store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store or subject already holds its maximum number of records.
    #[error("maximum number of {kind} ({limit}) reached")]
    CapacityExceeded { kind: RecordKind, limit: usize },

    /// A subject was selected before any subject exists.
    #[error("no subjects added yet")]
    NoSubjects,

    /// A selection that does not resolve to a subject.
    #[error("invalid selection '{selection}': choose 1-{available} or an exact subject name")]
    InvalidSelection { selection: String, available: usize },
}

/// Errors raised while validating user-supplied field values.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The flat-file format is newline-delimited, so a field cannot span lines.
    #[error("{field} cannot contain line breaks")]
    Multiline { field: &'static str },
}

/// Errors raised while loading or saving `cli-vault.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("config already exists: {}", .0.display())]
    AlreadyInitialized(PathBuf),
}

/// A mutation was applied in memory but could not be written out.
///
/// Returned alongside a successful result rather than as an error: the
/// record exists for the rest of the session, only durability failed.
#[derive(Error, Debug)]
#[error("change kept in memory but not saved to {location}: {source}")]
pub struct PersistenceFailed {
    pub location: String,
    #[source]
    pub source: std::io::Error,
}

pub type Result<T> = std::result::Result<T, Error>;
