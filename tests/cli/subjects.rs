//! Tests for the subject commands.

use crate::support::*;

#[test]
fn test_add_subject() {
    let t = Test::new();

    let output = t.add_subject("Math");
    assert_success(&output);
    assert_stdout_contains(&output, "subject 'Math' added as #1");

    assert_eq!(t.read("subjects.txt"), "1\nMath\n0\n");
}

#[test]
fn test_add_subject_positions_increase() {
    let t = Test::with_subjects(&["Math"]);

    let output = t.add_subject("CS");
    assert_success(&output);
    assert_stdout_contains(&output, "added as #2");
}

#[test]
fn test_add_term_by_position_and_name() {
    let t = Test::with_subjects(&["Math", "CS"]);

    assert_success(&t.add_term("2", "O(n)", "linear time"));
    let output = t.add_term("Math", "pi", "3.14159");
    assert_success(&output);
    assert_stdout_contains(&output, "term 'pi' added to 'Math'");

    assert_eq!(
        t.read("subjects.txt"),
        "2\nMath\n1\npi\n3.14159\nCS\n1\nO(n)\nlinear time\n"
    );
}

#[test]
fn test_find_exact_term() {
    let t = Test::with_subjects(&["CS"]);
    assert_success(&t.add_term("1", "O(n)", "linear time"));

    let output = t.find("CS", "O(n)");
    assert_success(&output);
    assert_stdout_contains(&output, "--- Match Found ---");
    assert_stdout_contains(&output, "linear time");
}

#[test]
fn test_find_is_exact_and_case_sensitive() {
    let t = Test::with_subjects(&["CS"]);
    assert_success(&t.add_term("1", "O(n)", "linear time"));

    let output = t.find("1", "o(n)");
    assert_success(&output);
    assert_stdout_contains(&output, "Sorry, term 'o(n)' not found in 'CS'.");
}

#[test]
fn test_find_in_empty_subject() {
    let t = Test::with_subjects(&["Math"]);

    let output = t.find("1", "pi");
    assert_success(&output);
    assert_stdout_contains(&output, "This subject has no terms yet.");
}

#[test]
fn test_search_across_subjects() {
    let t = Test::with_subjects(&["Math", "CS"]);
    assert_success(&t.add_term("Math", "Big O", "growth rate"));
    assert_success(&t.add_term("CS", "O(n)", "linear time"));
    assert_success(&t.add_term("CS", "byte", "eight bits"));

    let output = t.search("O");
    assert_success(&output);
    assert_stdout_contains(&output, "Found 2 match(es).");
    assert_eq!(match_blocks(&output), 2);
    assert_stdout_excludes(&output, "eight bits");
}

#[test]
fn test_search_no_match() {
    let t = Test::with_subjects(&["Math"]);

    let output = t.search("zzz");
    assert_success(&output);
    assert_stdout_contains(&output, "Searching for 'zzz'...");
    assert_stdout_contains(&output, "No matches found for 'zzz' anywhere in the dictionary.");
}

#[test]
fn test_search_json() {
    let t = Test::with_subjects(&["CS"]);
    assert_success(&t.add_term("CS", "O(n)", "linear time"));
    assert_success(&t.add_term("CS", "O(1)", "constant time"));

    let output = t.search_json("time");
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["keyword"], "time");
    assert_eq!(json["count"], 2);
    assert_eq!(json["matches"][0]["subject"], "CS");
    assert_eq!(json["matches"][1]["term"], "O(1)");
}

#[test]
fn test_list_empty() {
    let t = Test::new();

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "Dictionary is empty. Add a subject first.");
}

#[test]
fn test_list_shows_terms_and_empty_subjects() {
    let t = Test::with_subjects(&["Math", "CS"]);
    assert_success(&t.add_term("CS", "byte", "eight bits"));

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "Subject: Math");
    assert_stdout_contains(&output, "(No terms added for this subject)");
    assert_stdout_contains(&output, "Subject: CS");
    assert_stdout_contains(&output, "eight bits");
}

#[test]
fn test_list_json() {
    let t = Test::new();
    t.write("subjects.txt", SAMPLE_SUBJECTS);

    let output = t.list_json();
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["count"], 2);
    assert_eq!(json["subjects"][0]["name"], "CS");
    assert_eq!(json["subjects"][0]["terms"][1]["definition"], "eight bits");
    assert_eq!(json["subjects"][1]["terms"].as_array().unwrap().len(), 0);
}

#[test]
fn test_reads_existing_file() {
    let t = Test::new();
    t.write("subjects.txt", SAMPLE_SUBJECTS);

    let output = t.find("CS", "byte");
    assert_success(&output);
    assert_stdout_contains(&output, "eight bits");
}

#[test]
fn test_crlf_file_is_readable() {
    let t = Test::new();
    t.write("subjects.txt", "1\r\nCS\r\n1\r\nbyte\r\neight bits\r\n");

    let output = t.find("1", "byte");
    assert_success(&output);
    assert_stdout_contains(&output, "eight bits");
}

#[test]
fn test_dir_from_env() {
    let t = Test::new();

    #[allow(deprecated)]
    let output = assert_cmd::Command::cargo_bin("cli-vault")
        .unwrap()
        .env("NO_COLOR", "1")
        .env("CLI_VAULT_DIR", t.dir.path())
        .args(["add-subject", "Math"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.path("subjects.txt").exists());
}
