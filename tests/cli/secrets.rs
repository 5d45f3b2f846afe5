//! Tests for the secret commands.

use crate::support::*;

#[test]
fn test_add_secret() {
    let t = Test::new();

    let output = t.add_secret("GitHub", "alice", "s3cr3t");
    assert_success(&output);
    assert_stdout_contains(&output, "secret for 'GitHub' added successfully");

    assert_eq!(t.read("secrets.txt"), SAMPLE_SECRETS);
}

#[test]
fn test_add_secret_from_stdin() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["add-secret", "Email", "alice@example.com"])
        .write_stdin("hunter2\n")
        .output()
        .unwrap();
    assert_success(&output);

    assert_eq!(
        t.read("secrets.txt"),
        "1\nEmail\nalice@example.com\nhunter2\n"
    );
}

#[cfg(unix)]
#[test]
fn test_secrets_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::with_secrets(&[("GitHub", "alice", "s3cr3t")]);

    let mode = std::fs::metadata(t.path("secrets.txt"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_search_hides_secret() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.secrets("alice");
    assert_success(&output);
    assert_stdout_contains(&output, "Found 2 match(es).");
    assert_eq!(match_blocks(&output), 2);
    assert_stdout_contains(&output, "(Secret is hidden for security)");
    assert_stdout_excludes(&output, "s3cr3t");
    assert_stdout_excludes(&output, "hunter2");
}

#[test]
fn test_search_is_case_sensitive() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.secrets("git");
    assert_success(&output);
    assert_stdout_contains(&output, "Found 1 match(es).");
    assert_stdout_contains(&output, "gitlab");
    assert_stdout_excludes(&output, "GitHub");
}

#[test]
fn test_search_does_not_match_secret_value() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.secrets("hunter");
    assert_success(&output);
    assert_stdout_contains(&output, "No matches found for 'hunter'.");
}

#[test]
fn test_search_empty_store() {
    let t = Test::new();

    let output = t.secrets("anything");
    assert_success(&output);
    assert_stdout_contains(&output, "No secrets saved yet.");
}

#[test]
fn test_reveal_exact_service() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.reveal("alice", "GitHub");
    assert_success(&output);
    assert_stdout_contains(&output, "Secret for 'GitHub'");
    assert_stdout_contains(&output, "s3cr3t");
}

#[test]
fn test_reveal_needs_exact_name() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.reveal("alice", "github");
    assert_success(&output);
    assert_stdout_contains(&output, "No service with that exact name found.");
    assert_stdout_excludes(&output, "s3cr3t");
}

#[test]
fn test_reveal_cancel() {
    let t = Test::with_secrets(&[("q", "odd", "not-shown")]);

    let output = t.reveal("odd", "q");
    assert_success(&output);
    assert_stdout_contains(&output, "Cancelled.");
    assert_stdout_excludes(&output, "not-shown");
}

#[test]
fn test_reveal_first_duplicate_wins() {
    let t = Test::with_secrets(&[
        ("GitHub", "alice", "first"),
        ("GitHub", "bob", "second"),
    ]);

    let output = t.reveal("GitHub", "GitHub");
    assert_success(&output);
    assert_stdout_contains(&output, "first");
    assert_stdout_excludes(&output, "second");
}

#[test]
fn test_search_json_withholds_secret() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.run(&["secrets", "alice", "--json"]);
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["count"], 2);
    assert_eq!(json["matches"][0]["service"], "GitHub");
    assert!(json["matches"][0].get("secret").is_none());
    assert!(json.get("revealed").is_none());
    assert_stdout_excludes(&output, "s3cr3t");
}

#[test]
fn test_search_json_reveal() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.run(&["secrets", "alice", "--json", "--reveal", "Email"]);
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["revealed"]["service"], "Email");
    assert_eq!(json["revealed"]["secret"], "hunter2");
}

#[test]
fn test_secret_capacity() {
    let t = Test::new();
    t.write("cli-vault.toml", "[limits]\nmax_secrets = 2\n");
    assert_success(&t.add_secret("a", "u", "1"));
    assert_success(&t.add_secret("b", "u", "2"));

    let output = t.add_secret("c", "u", "3");
    assert_failure(&output);
    assert_stderr_contains(&output, "maximum number of secrets (2) reached");
    assert!(t.read("secrets.txt").starts_with("2\n"));
}
