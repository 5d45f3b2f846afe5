//! Config command - show or initialize cli-vault.toml.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::error::Result;

/// Show the effective configuration, or write the default file with `init`.
pub fn execute(dir: &Path, init: bool, json: bool) -> Result<()> {
    let config = if init {
        info!("Writing default config in {}", dir.display());
        let config = Config::init(dir)?;
        output::success(&format!(
            "wrote {}",
            Config::config_path(dir).display()
        ));
        config
    } else {
        Config::load(dir)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let source = if Config::exists(dir) {
        Config::config_path(dir).display().to_string()
    } else {
        "defaults".to_string()
    };

    output::section("Configuration");
    output::kv("source:", source);
    output::kv("subjects file:", config.subjects_path(dir).display());
    output::kv("secrets file:", config.secrets_path(dir).display());
    output::kv("max subjects:", config.limits.max_subjects);
    output::kv("max terms/subject:", config.limits.max_terms_per_subject);
    output::kv("max secrets:", config.limits.max_secrets);
    output::kv("max field length:", config.limits.max_field_len);
    Ok(())
}
