//! Flat-file codec.
//!
//! Encodes an ordered collection of fixed-shape records as newline-delimited
//! text: a count line, then every field of every record on its own line.
//!
//! ```text
//! <count>
//! <field1_of_record1>
//! <field2_of_record1>
//! ...
//! <fieldK_of_recordN>
//! ```
//!
//! Decoding never fails. Missing or unparseable counts read as zero, a file
//! that ends early keeps every record that was fully read, an oversized
//! count is clamped to the capacity, and an overlong line is truncated to
//! the maximum field length.

use std::str::Lines;

use tracing::warn;

use crate::core::config::Limits;
use crate::core::validation::truncate_field;
use crate::error::RecordKind;

/// A record with a fixed line layout.
pub trait Record: Sized {
    /// Which capacity limit applies to this record.
    const KIND: RecordKind;

    /// Append this record's lines.
    fn encode(&self, out: &mut LineWriter);

    /// Read one record.
    ///
    /// Returns `None` if the input ran out before the record's required
    /// fields were read.
    fn decode(input: &mut LineReader<'_>, limits: &Limits) -> Option<Self>;
}

/// Line-oriented output buffer.
#[derive(Debug, Default)]
pub struct LineWriter {
    buf: String,
}

impl LineWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a field value followed by a newline.
    pub fn field(&mut self, value: &str) {
        self.buf.push_str(value);
        self.buf.push('\n');
    }

    /// Write a count line.
    pub fn count(&mut self, n: usize) {
        self.field(&n.to_string());
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Line-oriented input cursor.
///
/// Line terminators (`\n` or `\r\n`) are stripped.
#[derive(Debug)]
pub struct LineReader<'a> {
    lines: Lines<'a>,
    max_field_len: usize,
    clamped: bool,
    truncated: usize,
}

impl<'a> LineReader<'a> {
    pub fn new(text: &'a str, max_field_len: usize) -> Self {
        Self {
            lines: text.lines(),
            max_field_len,
            clamped: false,
            truncated: 0,
        }
    }

    /// Next field value, truncated to the maximum field length.
    pub fn field(&mut self) -> Option<String> {
        let line = self.lines.next()?;
        if line.len() > self.max_field_len {
            self.truncated += 1;
        }
        Some(truncate_field(line, self.max_field_len))
    }

    /// Next count line.
    ///
    /// A count that does not parse, or is negative, reads as zero.
    pub fn count(&mut self) -> Option<usize> {
        self.lines.next().map(parse_count)
    }

    /// Next count line, clamped to `max`.
    ///
    /// Clamping is recorded so the caller can report it.
    pub fn bounded_count(&mut self, kind: RecordKind, max: usize) -> Option<usize> {
        let declared = self.count()?;
        Some(self.clamp(kind, declared, max))
    }

    /// Clamp a declared count to `max`, recording that data was dropped.
    pub fn clamp(&mut self, kind: RecordKind, declared: usize, max: usize) -> usize {
        if declared <= max {
            return declared;
        }

        warn!(
            %kind,
            declared,
            max,
            "declared record count exceeds capacity, extra records dropped"
        );
        self.clamped = true;
        max
    }

    /// Discard `n` lines.
    pub fn skip(&mut self, n: usize) {
        for _ in 0..n {
            if self.lines.next().is_none() {
                break;
            }
        }
    }

    /// Whether any count was clamped so far.
    pub fn clamped(&self) -> bool {
        self.clamped
    }

    /// Number of field lines truncated so far.
    pub fn truncated(&self) -> usize {
        self.truncated
    }
}

/// Parse a count the way `%d` would: optional sign and leading digits,
/// trailing garbage ignored.
fn parse_count(line: &str) -> usize {
    let line = line.trim_start();
    let (negative, digits) = match line.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, line.strip_prefix('+').unwrap_or(line)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }

    // Anything too large for usize is certainly over capacity.
    digits[..end].parse().unwrap_or(usize::MAX)
}

/// Result of decoding a store file.
#[derive(Debug)]
pub struct Decoded<R> {
    pub records: Vec<R>,
    /// A declared count was larger than its capacity.
    pub clamped: bool,
    /// Number of field lines cut to the maximum field length.
    pub truncated: usize,
}

/// Encode records into the flat-file format.
pub fn encode<R: Record>(records: &[R]) -> String {
    let mut out = LineWriter::new();
    out.count(records.len());
    for record in records {
        record.encode(&mut out);
    }
    out.finish()
}

/// Decode records from the flat-file format.
///
/// Reads at most `capacity` records. Storage grows with the records actually
/// present, never with the declared count.
pub fn decode<R: Record>(text: &str, capacity: usize, limits: &Limits) -> Decoded<R> {
    let mut input = LineReader::new(text, limits.max_field_len);
    let declared = input.bounded_count(R::KIND, capacity).unwrap_or(0);

    let mut records = Vec::new();
    for _ in 0..declared {
        match R::decode(&mut input, limits) {
            Some(record) => records.push(record),
            None => break,
        }
    }

    Decoded {
        records,
        clamped: input.clamped(),
        truncated: input.truncated(),
    }
}
