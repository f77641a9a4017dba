//! Registration number engine.
//!
//! Generates and validates the human-facing `SPMB-<YYYY>-<NNNN>` identifiers
//! applicants use for public status tracking. The database's unique index is
//! the source of truth for uniqueness; this module only produces candidate
//! values and the retry policy constants the repository layer applies.

use std::sync::LazyLock;

use crate::error::CoreError;

/// Prefix shared by every registration number.
pub const REGISTRATION_PREFIX: &str = "SPMB";

/// How many times the repository retries candidate generation when the
/// unique index rejects an insert before giving up with an internal error.
pub const MAX_GENERATION_ATTEMPTS: u32 = 5;

/// Regex matching a well-formed registration number. The sequence accepts
/// four *or more* digits: sequences past 9999 widen rather than wrap.
static REGISTRATION_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^SPMB-(\d{4})-(\d{4,})$").expect("valid regex"));

/// Format a registration number from a year and a per-year sequence value.
///
/// The sequence is zero-padded to four digits; values past 9999 keep their
/// natural width so no two sequences ever collide.
///
/// # Examples
///
/// ```
/// use spmb_core::registration::format_registration_number;
///
/// assert_eq!(format_registration_number(2025, 935), "SPMB-2025-0935");
/// assert_eq!(format_registration_number(2025, 1), "SPMB-2025-0001");
/// assert_eq!(format_registration_number(2025, 12345), "SPMB-2025-12345");
/// ```
pub fn format_registration_number(year: i32, sequence: u32) -> String {
    format!("{REGISTRATION_PREFIX}-{year:04}-{sequence:04}")
}

/// Check whether a string is a well-formed registration number.
pub fn is_valid_registration_number(value: &str) -> bool {
    REGISTRATION_RE.is_match(value)
}

/// Parse a registration number into its year and sequence components.
///
/// Input is matched case-sensitively against the canonical uppercase form;
/// callers doing user-facing lookups should rely on the store's
/// case-insensitive match instead of normalizing here.
pub fn parse_registration_number(value: &str) -> Result<(i32, u32), CoreError> {
    let caps = REGISTRATION_RE.captures(value).ok_or_else(|| {
        CoreError::Validation(format!(
            "Invalid registration number '{value}'. Expected {REGISTRATION_PREFIX}-YYYY-NNNN"
        ))
    })?;

    let year: i32 = caps[1]
        .parse()
        .map_err(|_| CoreError::Validation(format!("Invalid year in '{value}'")))?;
    let sequence: u32 = caps[2]
        .parse()
        .map_err(|_| CoreError::Validation(format!("Invalid sequence in '{value}'")))?;

    Ok((year, sequence))
}

/// Compute the next candidate sequence after the highest one issued so far.
///
/// `None` means no number has been issued for the year yet.
pub fn next_sequence(highest_issued: Option<u32>) -> u32 {
    highest_issued.map_or(1, |n| n + 1)
}
