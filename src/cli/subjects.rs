//! Subject commands (add-subject, add-term, find, search, list).

use std::path::Path;

use crate::cli::output;
use crate::core::subjects::Selector;
use crate::core::vault::Vault;
use crate::error::Result;

/// Add a new subject.
pub fn add_subject(dir: &Path, name: &str) -> Result<()> {
    let mut vault = Vault::open(dir)?;
    add_subject_in(&mut vault, name)
}

pub(crate) fn add_subject_in(vault: &mut Vault, name: &str) -> Result<()> {
    let added = vault.subjects_mut().add_subject(name)?;
    output::persistence(added.warning());

    let subject = *added.value();
    if let Some(s) = vault.subjects().subject(subject) {
        output::success(&format!(
            "subject {} added as #{}",
            output::name(s.name()),
            subject.position()
        ));
    }
    Ok(())
}

/// Add a term to a subject.
pub fn add_term(dir: &Path, subject: &Selector, name: &str, definition: &str) -> Result<()> {
    let mut vault = Vault::open(dir)?;
    add_term_in(&mut vault, subject, name, definition)
}

pub(crate) fn add_term_in(
    vault: &mut Vault,
    subject: &Selector,
    name: &str,
    definition: &str,
) -> Result<()> {
    let target = vault.subjects().select(subject)?;
    let added = vault.subjects_mut().add_term(target, name, definition)?;
    output::persistence(added.warning());

    if let Some(s) = vault.subjects().subject(target) {
        output::success(&format!(
            "term {} added to {}",
            output::name(added.value().name()),
            output::name(s.name())
        ));
    }
    Ok(())
}

/// Look up a term by exact name within one subject.
pub fn find(dir: &Path, subject: &Selector, term: &str) -> Result<()> {
    let vault = Vault::open(dir)?;
    find_in(&vault, subject, term)
}

pub(crate) fn find_in(vault: &Vault, subject: &Selector, term: &str) -> Result<()> {
    let store = vault.subjects();
    let target = store.select(subject)?;
    let Some(s) = store.subject(target) else {
        return Ok(());
    };

    if !s.has_terms() {
        output::dimmed("This subject has no terms yet.");
        return Ok(());
    }

    match store.find_term_exact(target, term) {
        Some(found) => {
            output::match_found();
            output::kv("Subject:", s.name());
            output::kv("Term:", found.name());
            output::kv("Definition:", found.definition());
        }
        None => output::dimmed(&format!(
            "Sorry, term {} not found in {}.",
            output::name(term),
            output::name(s.name())
        )),
    }
    Ok(())
}

/// Search every subject for a keyword.
pub fn search(dir: &Path, keyword: &str, json: bool) -> Result<()> {
    let vault = Vault::open(dir)?;
    search_in(&vault, keyword, json)
}

pub(crate) fn search_in(vault: &Vault, keyword: &str, json: bool) -> Result<()> {
    let matches = vault.subjects().search_all(keyword);

    if json {
        let hits: Vec<_> = matches
            .iter()
            .map(|m| {
                serde_json::json!({
                    "subject": m.subject.name(),
                    "term": m.term.name(),
                    "definition": m.term.definition(),
                })
            })
            .collect();
        let result = serde_json::json!({
            "keyword": matches.keyword(),
            "count": hits.len(),
            "matches": hits,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if vault.subjects().is_empty() {
        output::dimmed("Dictionary is empty. Add a subject first.");
        return Ok(());
    }

    println!("Searching for {}...", output::name(matches.keyword()));
    let mut found = 0;
    for m in matches.iter() {
        output::match_found();
        output::kv("Subject:", m.subject.name());
        output::kv("Term:", m.term.name());
        output::kv("Definition:", m.term.definition());
        found += 1;
    }

    println!();
    if found == 0 {
        output::dimmed(&format!(
            "No matches found for {} anywhere in the dictionary.",
            output::name(keyword)
        ));
    } else {
        output::header(&format!("Found {} match(es).", found));
    }
    Ok(())
}

/// List all subjects and their terms.
pub fn list(dir: &Path, json: bool) -> Result<()> {
    let vault = Vault::open(dir)?;
    list_in(&vault, json)
}

pub(crate) fn list_in(vault: &Vault, json: bool) -> Result<()> {
    let subjects = vault.subjects().list_all();

    if json {
        let result = serde_json::json!({
            "count": subjects.len(),
            "subjects": subjects,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if subjects.is_empty() {
        output::dimmed("Dictionary is empty. Add a subject first.");
        return Ok(());
    }

    for subject in subjects {
        output::section(&format!("Subject: {}", subject.name()));
        if !subject.has_terms() {
            output::dimmed("  (No terms added for this subject)");
            continue;
        }
        for term in subject.terms() {
            output::kv("Term:", term.name());
            output::kv("Def:", term.definition());
            println!();
        }
    }
    Ok(())
}
