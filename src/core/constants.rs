//! Constants used throughout cli-vault.
//!
//! Centralizes file names, environment variables and default limits.

/// Optional configuration file inside the data directory.
pub const CONFIG_FILE: &str = "cli-vault.toml";

/// Default subject file name.
pub const SUBJECT_FILE: &str = "subjects.txt";

/// Default secret file name.
pub const SECRET_FILE: &str = "secrets.txt";

/// Environment variable overriding the data directory.
pub const DIR_ENV: &str = "CLI_VAULT_DIR";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "CLI_VAULT_LOG";

/// Default maximum number of subjects.
pub const MAX_SUBJECTS: usize = 10;

/// Default maximum number of terms per subject.
pub const MAX_TERMS_PER_SUBJECT: usize = 20;

/// Default maximum number of secrets.
pub const MAX_SECRETS: usize = 50;

/// Default maximum field length in bytes.
pub const MAX_FIELD_LEN: usize = 200;

/// Largest value accepted for any configured limit.
pub const MAX_LIMIT: usize = 1_000_000;

/// Reply that cancels the reveal prompt after a secret search.
pub const CANCEL_TOKEN: &str = "q";
