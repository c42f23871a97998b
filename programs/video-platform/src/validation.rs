//! Argument checks shared by the text-carrying instructions.

use anchor_lang::prelude::*;

use crate::errors::PlatformError;

/// Reject the whole call with `missing` if any field is empty or whitespace.
pub fn require_present(fields: &[&str], missing: PlatformError) -> Result<()> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(missing.into());
    }
    Ok(())
}

/// Reject `value` with `too_long` if its UTF-8 byte length exceeds `max_len`.
pub fn require_max_len(value: &str, max_len: usize, too_long: PlatformError) -> Result<()> {
    if value.len() > max_len {
        return Err(too_long.into());
    }
    Ok(())
}
