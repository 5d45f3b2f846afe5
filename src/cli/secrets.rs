//! Secret commands (add-secret, secrets).

use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::{Input, Password};

use crate::cli::output;
use crate::core::constants::CANCEL_TOKEN;
use crate::core::vault::Vault;
use crate::error::Result;

/// Add a service credential.
///
/// The value comes from `--secret`, else piped stdin, else a hidden prompt.
pub fn add(dir: &Path, service: &str, username: &str, secret: Option<String>) -> Result<()> {
    let mut vault = Vault::open(dir)?;

    let value = match secret {
        Some(value) => value,
        None if !io::stdin().is_terminal() => {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            input.trim_end_matches(['\n', '\r']).to_string()
        }
        None => Password::new()
            .with_prompt(format!("Secret for {}", output::name(service)))
            .allow_empty_password(true)
            .interact()?,
    };

    add_in(&mut vault, service, username, &value)
}

pub(crate) fn add_in(vault: &mut Vault, service: &str, username: &str, value: &str) -> Result<()> {
    let added = vault.secrets_mut().add_secret(service, username, value)?;
    output::persistence(added.warning());

    output::success(&format!(
        "secret for {} added successfully",
        output::name(service)
    ));
    Ok(())
}

/// Search credentials, then reveal one by exact service name.
///
/// Without `--reveal`, asks for a service name when stdin is a terminal.
/// An empty reply or `q` cancels.
pub fn search(dir: &Path, keyword: &str, reveal: Option<&str>, json: bool) -> Result<()> {
    let vault = Vault::open(dir)?;

    if json {
        return search_json(&vault, keyword, reveal);
    }

    if !search_in(&vault, keyword) {
        return Ok(());
    }

    let service = match reveal {
        Some(service) => service.to_string(),
        None if io::stdin().is_terminal() => prompt_service()?,
        None => return Ok(()),
    };
    reveal_in(&vault, &service);
    Ok(())
}

/// Print matches for `keyword`; returns whether anything matched.
pub(crate) fn search_in(vault: &Vault, keyword: &str) -> bool {
    let store = vault.secrets();
    if store.is_empty() {
        output::dimmed("No secrets saved yet.");
        return false;
    }

    let matches = store.search_by_keyword(keyword);
    println!("Searching for {}...", output::name(matches.keyword()));
    for m in matches.iter() {
        output::match_found();
        output::kv("Service:", m.service);
        output::kv("Username:", m.username);
        output::dimmed("  (Secret is hidden for security)");
    }

    println!();
    let count = matches.count();
    if count == 0 {
        output::dimmed(&format!("No matches found for {}.", output::name(keyword)));
        return false;
    }

    output::header(&format!("Found {} match(es).", count));
    true
}

/// Ask which service to reveal.
pub(crate) fn prompt_service() -> Result<String> {
    let service: String = Input::new()
        .with_prompt(format!(
            "Type the EXACT Service name to view its secret (or '{}' to cancel)",
            CANCEL_TOKEN
        ))
        .allow_empty(true)
        .interact_text()?;
    Ok(service)
}

/// Reveal a secret; `q` and empty input cancel before the store is asked.
pub(crate) fn reveal_in(vault: &Vault, service: &str) {
    if service.is_empty() || service == CANCEL_TOKEN {
        output::dimmed("Cancelled.");
        return;
    }

    match vault.secrets().reveal_by_exact_service(service) {
        Some(value) => {
            output::section(&format!("Secret for {}", output::name(service)));
            output::kv("Secret Key:", value.as_str());
        }
        None => output::dimmed("No service with that exact name found."),
    }
}

fn search_json(vault: &Vault, keyword: &str, reveal: Option<&str>) -> Result<()> {
    let matches: Vec<_> = vault.secrets().search_by_keyword(keyword).iter().collect();

    let mut result = serde_json::json!({
        "keyword": keyword,
        "count": matches.len(),
        "matches": matches,
    });

    if let Some(service) = reveal.filter(|s| !s.is_empty() && *s != CANCEL_TOKEN) {
        let value = vault.secrets().reveal_by_exact_service(service);
        result["revealed"] = serde_json::json!({
            "service": service,
            "secret": value.as_ref().map(|v| v.as_str()),
        });
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
