//! Completions command - print a completion script for the chosen shell.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell as CompletionShell;

use crate::cli::{Cli, Shell};
use crate::error::Result;

impl From<Shell> for CompletionShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Self::Bash,
            Shell::Zsh => Self::Zsh,
            Shell::Fish => Self::Fish,
            Shell::PowerShell => Self::PowerShell,
        }
    }
}

/// Generate shell completions on stdout.
pub fn execute(shell: Shell) -> Result<()> {
    write_script(shell, &mut std::io::stdout());
    Ok(())
}

fn write_script(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    clap_complete::generate(CompletionShell::from(shell), &mut cmd, bin, out);
}
