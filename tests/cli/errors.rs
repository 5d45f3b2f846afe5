//! Tests for error reporting and exit codes.

use crate::support::*;

#[test]
fn test_add_term_without_subjects() {
    let t = Test::new();

    let output = t.add_term("1", "pi", "3.14");
    assert_failure(&output);
    assert_stderr_contains(&output, "no subjects added yet");
    assert_stderr_contains(&output, "cli-vault add-subject");
}

#[test]
fn test_invalid_position() {
    let t = Test::with_subjects(&["Math"]);

    let output = t.add_term("5", "pi", "3.14");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid selection '5': choose 1-1");
}

#[test]
fn test_position_zero_is_invalid() {
    let t = Test::with_subjects(&["Math"]);

    let output = t.find("0", "pi");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid selection '0'");
}

#[test]
fn test_unknown_subject_name() {
    let t = Test::with_subjects(&["Math"]);

    let output = t.find("math", "pi");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid selection 'math'");
}

#[test]
fn test_subject_capacity() {
    let t = Test::new();
    for i in 0..10 {
        assert_success(&t.add_subject(&format!("S{}", i)));
    }

    let output = t.add_subject("Extra");
    assert_failure(&output);
    assert_stderr_contains(&output, "maximum number of subjects (10) reached");
    assert!(t.read("subjects.txt").starts_with("10\n"));
}

#[test]
fn test_term_capacity() {
    let t = Test::with_subjects(&["Math"]);
    t.write("cli-vault.toml", "[limits]\nmax_terms_per_subject = 1\n");
    assert_success(&t.add_term("1", "pi", "3.14"));

    let output = t.add_term("1", "e", "2.71");
    assert_failure(&output);
    assert_stderr_contains(&output, "maximum number of terms (1) reached");
}

#[test]
fn test_multiline_field_rejected() {
    let t = Test::new();

    let output = t.add_subject("two\nlines");
    assert_failure(&output);
    assert_stderr_contains(&output, "subject name cannot contain line breaks");
    assert!(!t.path("subjects.txt").exists());
}

#[test]
fn test_unsaved_change_warns() {
    let t = Test::new();
    std::fs::create_dir(t.path("subjects.txt")).unwrap();

    let output = t.add_subject("Math");
    assert_success(&output);
    assert_stderr_contains(&output, "change kept in memory but not saved");
}

#[test]
fn test_menu_needs_terminal() {
    let t = Test::new();

    let output = t.run(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "interactive input needs a terminal");
}

#[test]
fn test_invalid_config_reports_hint() {
    let t = Test::new();
    t.write("cli-vault.toml", "[limits\n");

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
    assert_stderr_contains(&output, "fix cli-vault.toml");
}

#[test]
fn test_unknown_command() {
    let t = Test::new();

    let output = t.run(&["frobnicate"]);
    assert_failure(&output);
}
