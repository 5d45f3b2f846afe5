//! Shared CLI output helpers for consistent terminal output.
//!
//! Results go to stdout; errors, warnings and hints go to stderr so that
//! `--json` output stays parseable. Colour is dropped when `NO_COLOR` is set
//! or the stream is not a terminal.

use std::fmt::Display;

use console::Style;

use crate::error::PersistenceFailed;

const RULE_WIDTH: usize = 42;

/// Which stream a line is headed for; colour support is checked per stream.
#[derive(Clone, Copy)]
enum Stream {
    Out,
    Err,
}

fn paint(stream: Stream, style: Style, text: impl Display) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        return text.to_string();
    }
    let style = match stream {
        Stream::Out => style,
        Stream::Err => style.for_stderr(),
    };
    style.apply_to(text).to_string()
}

fn status(symbol: &str, color: Style, msg: &str) {
    eprintln!("{} {}", paint(Stream::Err, color, symbol), msg);
}

/// `✓ subject 'Math' added as #1`
pub fn success(msg: &str) {
    println!("{} {}", paint(Stream::Out, Style::new().green(), "✓"), msg);
}

/// `✗ maximum number of subjects (10) reached`
pub fn error(msg: &str) {
    status("✗", Style::new().red(), msg);
}

/// `⚠ change kept in memory but not saved to ...`
pub fn warn(msg: &str) {
    status("⚠", Style::new().yellow(), msg);
}

/// `→ run: cli-vault add-subject <NAME>`
pub fn hint(msg: &str) {
    let cyan = Style::new().cyan();
    eprintln!(
        "{} {}",
        paint(Stream::Err, cyan.clone(), "→"),
        paint(Stream::Err, cyan, msg)
    );
}

pub fn header(title: &str) {
    println!("{}", paint(Stream::Out, Style::new().bold(), title));
}

/// A labelled value, indented: `  Term:  O(n)`
pub fn kv(label: &str, value: impl Display) {
    println!(
        "  {}  {}",
        paint(Stream::Out, Style::new().dim(), label),
        paint(Stream::Out, Style::new().bold(), value)
    );
}

/// `  1. Math`
pub fn numbered(position: usize, item: &str) {
    println!("  {}. {}", position, item);
}

/// A quoted name for inline use: `'GitHub'`
pub fn name(n: &str) -> String {
    paint(Stream::Out, Style::new().cyan(), format!("'{}'", n))
}

/// Secondary text, such as empty-store and not-found notices.
pub fn dimmed(msg: &str) {
    println!("{}", paint(Stream::Out, Style::new().dim(), msg));
}

/// A title framed by rules, used per subject in `list` and for revealed
/// secrets.
pub fn section(title: &str) {
    let rule = paint(Stream::Out, Style::new().dim(), "=".repeat(RULE_WIDTH));
    println!();
    println!("{}", rule);
    header(title);
    println!("{}", rule);
}

/// Opening line of one search hit.
pub fn match_found() {
    println!();
    header("--- Match Found ---");
}

/// Report a save that failed after the change was applied in memory.
pub fn persistence(warning: Option<&PersistenceFailed>) {
    if let Some(warning) = warning {
        warn(&warning.to_string());
    }
}
