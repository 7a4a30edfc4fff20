//! Field-level parsing for whitespace-delimited interval lines.
//!
//! Lines are split on runs of any whitespace, so tab- and space-separated
//! input are both accepted. Only the first three fields are ever looked at.

use crate::bed::{BedError, Result};
use std::str::SplitWhitespace;

/// Split off the chromosome label, returning it with the remaining fields.
///
/// Returns None for a line with no fields at all.
#[inline]
pub fn split_chrom(line: &str) -> Option<(&str, SplitWhitespace<'_>)> {
    let mut fields = line.split_whitespace();
    let chrom = fields.next()?;
    Some((chrom, fields))
}

/// Parse a position field as an unsigned integer.
///
/// `field` is None when the line ran out of fields. Positions are
/// non-negative, so a signed value such as `-5` is rejected like any other
/// non-integer field and ends the run.
#[inline]
pub fn parse_position(field: Option<&str>, field_name: &str, line: usize) -> Result<u64> {
    let s = field.ok_or_else(|| BedError::Parse {
        line,
        message: format!("Expected at least 3 fields, missing {} position", field_name),
    })?;

    s.parse().map_err(|_| BedError::Parse {
        line,
        message: format!("Invalid {} position: '{}'", field_name, s),
    })
}
