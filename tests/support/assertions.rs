//! Test assertion helpers.

use std::process::Output;

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Exit status 0; shows stderr otherwise.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "cli-vault exited with {:?}:\n{}",
        output.status.code(),
        stderr(output)
    );
}

/// Non-zero exit status.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "expected cli-vault to fail, stdout was:\n{}",
        stdout(output)
    );
}

pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let text = stdout(output);
    assert!(text.contains(expected), "stdout lacks {:?}:\n{}", expected, text);
}

pub fn assert_stdout_excludes(output: &Output, unexpected: &str) {
    let text = stdout(output);
    assert!(
        !text.contains(unexpected),
        "stdout unexpectedly has {:?}:\n{}",
        unexpected,
        text
    );
}

pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let text = stderr(output);
    assert!(text.contains(expected), "stderr lacks {:?}:\n{}", expected, text);
}

/// Number of "--- Match Found ---" blocks printed by a search.
pub fn match_blocks(output: &Output) -> usize {
    stdout(output).matches("--- Match Found ---").count()
}

/// Parse stdout of a `--json` command.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout)
        .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, stdout(output)))
}
