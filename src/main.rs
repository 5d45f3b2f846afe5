//! cli-vault - study terms and service credentials in flat text files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli_vault::cli::output;
use cli_vault::cli::{execute, Cli};
use cli_vault::core::constants::LOG_ENV;
use cli_vault::error::{ConfigError, Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("cli_vault=debug")
        } else {
            EnvFilter::new("cli_vault=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.dir) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Store(StoreError::NoSubjects) => Some("run: cli-vault add-subject <NAME>"),
            Error::Store(StoreError::InvalidSelection { .. }) => {
                Some("run: cli-vault list to see subject positions")
            }
            Error::Config(ConfigError::Parse(_) | ConfigError::InvalidValue { .. }) => {
                Some("fix cli-vault.toml or run: cli-vault config")
            }
            Error::NotInteractive => Some("pass a command, see: cli-vault --help"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
