//! Test fixtures and constants.

/// Credentials used across secret tests: (service, username, secret).
pub const STANDARD_SECRETS: &[(&str, &str, &str)] = &[
    ("GitHub", "alice", "s3cr3t"),
    ("Email", "alice@example.com", "hunter2"),
    ("gitlab", "bob", "glpat-123"),
];

/// A subject file with two subjects, the second empty.
pub const SAMPLE_SUBJECTS: &str = "2\nCS\n2\nO(n)\nlinear time\nbyte\neight bits\nMath\n0\n";

/// A secret file with one credential.
pub const SAMPLE_SECRETS: &str = "1\nGitHub\nalice\ns3cr3t\n";
