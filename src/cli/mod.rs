//! Command-line interface.
//!
//! A thin shell over the core stores: each command opens the vault, calls one
//! store operation and renders the result.

pub mod completions;
pub mod config;
pub mod menu;
pub mod output;
pub mod secrets;
pub mod subjects;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants::DIR_ENV;
use crate::core::subjects::Selector;
use crate::error::Result;

/// cli-vault - study terms and service credentials in flat text files.
#[derive(Parser)]
#[command(
    name = "cli-vault",
    about = "Keep study terms and service credentials in flat text files",
    version,
    after_help = "Run without a command to open the interactive menu."
)]
pub struct Cli {
    /// Data directory holding subjects.txt, secrets.txt and cli-vault.toml
    #[arg(long, global = true, env = DIR_ENV, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Add a new subject
    AddSubject {
        /// Subject name (e.g., "Data Structures")
        name: String,
    },

    /// Add a term to a subject
    AddTerm {
        /// Subject position (1-based) or exact name
        subject: Selector,
        /// Term name
        name: String,
        /// Term definition
        definition: String,
    },

    /// Look up a term by exact name within one subject
    Find {
        /// Subject position (1-based) or exact name
        subject: Selector,
        /// Exact term name
        term: String,
    },

    /// Search every subject for a keyword in term names or definitions
    Search {
        /// Case-sensitive keyword
        keyword: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all subjects and their terms
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a service credential
    AddSecret {
        /// Service name (e.g., "GitHub")
        service: String,
        /// Username or email
        username: String,
        /// Secret value; read from stdin or prompted for when omitted
        #[arg(long)]
        secret: Option<String>,
    },

    /// Search credentials by service or username, then optionally reveal one
    Secrets {
        /// Case-sensitive keyword
        keyword: String,
        /// Exact service name whose secret to reveal
        #[arg(long, value_name = "SERVICE")]
        reveal: Option<String>,
        /// Output as JSON (secret values are never included)
        #[arg(long)]
        json: bool,
    },

    /// Open the interactive menu
    Menu,

    /// Show or initialize the configuration
    Config {
        /// Write a default cli-vault.toml
        #[arg(long)]
        init: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Resolve the data directory: `--dir`/`CLI_VAULT_DIR`, else the current directory.
pub fn data_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| PathBuf::from("."))
}

/// Execute a command.
pub fn execute(command: Option<Command>, dir: Option<PathBuf>) -> Result<()> {
    use Command::*;

    let dir = data_dir(dir);

    match command.unwrap_or(Menu) {
        AddSubject { name } => subjects::add_subject(&dir, &name),
        AddTerm {
            subject,
            name,
            definition,
        } => subjects::add_term(&dir, &subject, &name, &definition),
        Find { subject, term } => subjects::find(&dir, &subject, &term),
        Search { keyword, json } => subjects::search(&dir, &keyword, json),
        List { json } => subjects::list(&dir, json),
        AddSecret {
            service,
            username,
            secret,
        } => secrets::add(&dir, &service, &username, secret),
        Secrets {
            keyword,
            reveal,
            json,
        } => secrets::search(&dir, &keyword, reveal.as_deref(), json),
        Menu => menu::execute(&dir),
        Config { init, json } => config::execute(&dir, init, json),
        Completions { shell } => completions::execute(shell),
    }
}
