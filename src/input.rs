use crate::errors::PowerCalcError;
use std::num::IntErrorKind;

/// Parses user text into the calculator's input.
///
/// Accepts plain integers with an optional sign, and decimals whose fractional part is all
/// zeros (`3.0`, `-2.`).
pub fn parse_number(text: &str) -> Result<i64, PowerCalcError> {
    let trimmed = text.trim();

    let (integral, fraction) = match trimmed.find('.') {
        Some(dot) => (&trimmed[..dot], Some(&trimmed[(dot + 1)..])),
        None => (trimmed, None),
    };

    let digits = integral
        .strip_prefix('+')
        .or_else(|| integral.strip_prefix('-'))
        .unwrap_or(integral);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PowerCalcError::InvalidNumber(trimmed.to_string()));
    }

    if let Some(fraction) = fraction {
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PowerCalcError::InvalidNumber(trimmed.to_string()));
        }
        if fraction.bytes().any(|b| b != b'0') {
            return Err(PowerCalcError::NotAnInteger(trimmed.to_string()));
        }
    }

    // i64's parser takes the leading `+` as well.
    let n = integral.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            PowerCalcError::OutOfRange(trimmed.to_string())
        }
        _ => PowerCalcError::InvalidNumber(trimmed.to_string()),
    })?;

    tracing::debug!(input = trimmed, n, "parsed number");
    Ok(n)
}

/// Parses a session step size. Steps must be positive.
pub fn parse_step(text: &str) -> Result<i64, PowerCalcError> {
    match parse_number(text) {
        Ok(step) if step > 0 => Ok(step),
        _ => Err(PowerCalcError::InvalidStep(text.trim().to_string())),
    }
}
