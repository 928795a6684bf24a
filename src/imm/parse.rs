use std::num::IntErrorKind;

use thiserror::Error;

use super::{Imm, ImmWidth};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseImmError {
    #[error("Empty immediate literal")]
    Empty,
    #[error("Invalid immediate literal: {0}")]
    InvalidLiteral(String),
    #[error("Immediate literal does not fit in 64 bits: {0}")]
    Overflow(String),
}

/// Split a literal into its radix and digits, e.g. `0x1f` into `(16, "1f")`.
fn split_radix(literal: &str) -> (u32, &str) {
    let prefixes = [
        ("0x", 16),
        ("0X", 16),
        ("0b", 2),
        ("0B", 2),
        ("0o", 8),
        ("0O", 8),
    ];
    for (prefix, radix) in prefixes {
        if let Some(digits) = literal.strip_prefix(prefix) {
            return (radix, digits);
        }
    }
    (10, literal)
}

/// Parse a literal into a 64-bit payload.
///
/// A leading `$` is the AT&T immediate marker and is skipped. Non-negative literals are
/// zero-extended and must fit in 64 unsigned bits. Negative literals are sign-extended and must
/// fit in 64 signed bits.
pub(super) fn parse_payload(literal: &str) -> Result<u64, ParseImmError> {
    let trimmed = literal.trim();
    if trimmed.is_empty() {
        return Err(ParseImmError::Empty);
    }

    let number = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let (negative, unsigned) = match number.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, number),
    };
    let (radix, digits) = split_radix(unsigned);
    let digits = digits.replace('_', "");
    if digits.is_empty() || digits.starts_with('+') {
        return Err(ParseImmError::InvalidLiteral(trimmed.to_owned()));
    }

    let magnitude = u64::from_str_radix(&digits, radix).map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => ParseImmError::Overflow(trimmed.to_owned()),
        _ => ParseImmError::InvalidLiteral(trimmed.to_owned()),
    })?;

    if !negative {
        return Ok(magnitude);
    }
    // i64::MIN has no positive counterpart, so compare against its magnitude
    if magnitude > i64::MIN.unsigned_abs() {
        return Err(ParseImmError::Overflow(trimmed.to_owned()));
    }
    Ok(magnitude.wrapping_neg())
}

impl Imm {
    /// Parse an immediate literal of the given width.
    ///
    /// Parsing only fails on malformed text. A literal that does not fit the width still yields
    /// an immediate; its [`check`](Imm::check) reports the problem.
    #[tracing::instrument]
    pub fn parse(literal: &str, width: ImmWidth) -> Result<Imm, ParseImmError> {
        let payload = parse_payload(literal)?;
        Ok(Imm::with_width(width, payload))
    }
}
