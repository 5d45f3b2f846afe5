//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a cli-vault command bound to the test data directory.
    ///
    /// Colors and inherited log filters are disabled so output is stable.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("cli-vault").expect("failed to find cli-vault binary");
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("CLI_VAULT_LOG");
        cmd.env_remove("CLI_VAULT_DIR");
        cmd.arg("--dir").arg(self.dir.path());
        cmd
    }

    /// Run with arguments and empty stdin.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .write_stdin("")
            .output()
            .expect("failed to run cli-vault")
    }

    /// Shortcut for `cli-vault add-subject`.
    pub fn add_subject(&self, name: &str) -> Output {
        self.run(&["add-subject", name])
    }

    /// Shortcut for `cli-vault add-term`.
    pub fn add_term(&self, subject: &str, name: &str, definition: &str) -> Output {
        self.run(&["add-term", subject, name, definition])
    }

    /// Shortcut for `cli-vault find`.
    pub fn find(&self, subject: &str, term: &str) -> Output {
        self.run(&["find", subject, term])
    }

    /// Shortcut for `cli-vault search`.
    pub fn search(&self, keyword: &str) -> Output {
        self.run(&["search", keyword])
    }

    /// Shortcut for `cli-vault search --json`.
    pub fn search_json(&self, keyword: &str) -> Output {
        self.run(&["search", keyword, "--json"])
    }

    /// Shortcut for `cli-vault list`.
    pub fn list(&self) -> Output {
        self.run(&["list"])
    }

    /// Shortcut for `cli-vault list --json`.
    pub fn list_json(&self) -> Output {
        self.run(&["list", "--json"])
    }

    /// Shortcut for `cli-vault add-secret --secret`.
    pub fn add_secret(&self, service: &str, username: &str, value: &str) -> Output {
        self.run(&["add-secret", service, username, "--secret", value])
    }

    /// Shortcut for `cli-vault secrets`.
    pub fn secrets(&self, keyword: &str) -> Output {
        self.run(&["secrets", keyword])
    }

    /// Shortcut for `cli-vault secrets --reveal`.
    pub fn reveal(&self, keyword: &str, service: &str) -> Output {
        self.run(&["secrets", keyword, "--reveal", service])
    }
}
