//! Interactive menu.
//!
//! Offers the eight vault operations in a loop until "Exit" is chosen. Each
//! operation reuses the same rendering as its one-shot command; a failed
//! operation is reported and the menu continues.

use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::{Input, Password, Select};
use tracing::debug;

use crate::cli::{output, secrets, subjects};
use crate::core::subjects::Selector;
use crate::core::vault::Vault;
use crate::error::{Error, Result, StoreError};

const ITEMS: &[&str] = &[
    "Add New Subject",
    "Add New Term",
    "Search in Subject",
    "Full-Text Search",
    "View All Subjects & Terms",
    "Add New Password/Secret",
    "Search Passwords & Secrets",
    "Exit",
];

/// A menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    AddSubject,
    AddTerm,
    FindTerm,
    Search,
    List,
    AddSecret,
    SearchSecrets,
    Exit,
}

impl Action {
    fn from_index(index: usize) -> Self {
        match index {
            0 => Self::AddSubject,
            1 => Self::AddTerm,
            2 => Self::FindTerm,
            3 => Self::Search,
            4 => Self::List,
            5 => Self::AddSecret,
            6 => Self::SearchSecrets,
            _ => Self::Exit,
        }
    }
}

/// Run the interactive menu.
///
/// # Errors
///
/// Returns `Error::NotInteractive` if stdin is not a terminal.
pub fn execute(dir: &Path) -> Result<()> {
    if !io::stdin().is_terminal() {
        return Err(Error::NotInteractive);
    }

    let mut vault = Vault::open(dir)?;

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("CLI VAULT MAIN MENU")
            .items(ITEMS)
            .default(0)
            .interact()?;

        let action = Action::from_index(choice);
        debug!(?action, "menu choice");
        if action == Action::Exit {
            println!("Goodbye!");
            return Ok(());
        }

        if let Err(e) = run(&mut vault, action) {
            output::error(&e.to_string());
        }
    }
}

fn run(vault: &mut Vault, action: Action) -> Result<()> {
    match action {
        Action::AddSubject => {
            let name = ask("Enter new subject name")?;
            subjects::add_subject_in(vault, &name)
        }
        Action::AddTerm => {
            let subject = choose_subject(vault)?;
            let name = ask("Enter term name")?;
            let definition = ask("Enter definition")?;
            subjects::add_term_in(vault, &subject, &name, &definition)
        }
        Action::FindTerm => {
            let subject = choose_subject(vault)?;
            let term = ask("Enter term to search for")?;
            subjects::find_in(vault, &subject, &term)
        }
        Action::Search => {
            if vault.subjects().is_empty() {
                output::dimmed("Dictionary is empty. Add a subject first.");
                return Ok(());
            }
            let keyword = ask("Enter keyword to search for")?;
            subjects::search_in(vault, &keyword, false)
        }
        Action::List => subjects::list_in(vault, false),
        Action::AddSecret => {
            let service = ask("Enter service name (e.g., 'Email', 'GitHub')")?;
            let username = ask("Enter username (or email)")?;
            let value = Password::new()
                .with_prompt("Enter secret key (or password)")
                .allow_empty_password(true)
                .interact()?;
            secrets::add_in(vault, &service, &username, &value)
        }
        Action::SearchSecrets => {
            if vault.secrets().is_empty() {
                output::dimmed("No secrets saved yet.");
                return Ok(());
            }
            let keyword = ask("Enter keyword to search (by Service or Username)")?;
            if secrets::search_in(vault, &keyword) {
                let service = secrets::prompt_service()?;
                secrets::reveal_in(vault, &service);
            }
            Ok(())
        }
        Action::Exit => Ok(()),
    }
}

/// Prompt for one line of text; empty input is allowed.
fn ask(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// List subjects and ask for a position or name.
fn choose_subject(vault: &Vault) -> Result<Selector> {
    let subjects = vault.subjects().list_all();
    if subjects.is_empty() {
        return Err(StoreError::NoSubjects.into());
    }

    output::header("Available Subjects:");
    for (i, subject) in subjects.iter().enumerate() {
        output::numbered(i + 1, subject.name());
    }

    let answer = ask(&format!("Select a subject (1-{})", subjects.len()))?;
    Ok(answer.parse().unwrap_or_else(|never| match never {}))
}
