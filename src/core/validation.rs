//! Field validation and length limits.
//!
//! Every stored string is a single line no longer than the configured
//! maximum field length.

use crate::error::{Result, ValidationError};

/// Validate a field value before it is stored.
///
/// Fields are written one per line, so a value containing `\n` or `\r`
/// would corrupt the file layout.
///
/// # Arguments
///
/// * `field` - Field label used in the error message
/// * `value` - The value to validate
///
/// # Errors
///
/// Returns `ValidationError::Multiline` if the value contains a line break.
pub fn validate_field(field: &'static str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(ValidationError::Multiline { field }.into());
    }

    Ok(())
}

/// Truncate a value to at most `max_len` bytes.
///
/// Cuts on the nearest UTF-8 character boundary at or below the limit, so
/// the result may be a few bytes shorter than `max_len`.
pub fn truncate_field(value: &str, max_len: usize) -> String {
    if value.len() <= max_len {
        return value.to_string();
    }

    let cut = (0..=max_len)
        .rev()
        .find(|&i| value.is_char_boundary(i))
        .unwrap_or(0);
    value[..cut].to_string()
}

/// Validate then truncate a field in one step.
///
/// # Errors
///
/// Returns `ValidationError::Multiline` if the value contains a line break.
pub fn prepare_field(field: &'static str, value: &str, max_len: usize) -> Result<String> {
    validate_field(field, value)?;
    Ok(truncate_field(value, max_len))
}
