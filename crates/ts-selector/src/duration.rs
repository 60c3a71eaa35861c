//! Time window duration parsing.

use crate::error::{ValidationError, ValidationResult};

/// Parse a time window duration into a whole day count.
///
/// The accepted form is `<positive integer>d`, e.g. `"30d"`. Zero,
/// negative, fractional, and suffix-free values are rejected.
pub fn parse_duration(field: &str, raw: &str) -> ValidationResult<u32> {
    let malformed = || ValidationError::MalformedDuration {
        field: field.to_string(),
        value: raw.to_string(),
    };

    let digits = raw.strip_suffix('d').ok_or_else(malformed)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let days: u32 = digits.parse().map_err(|_| malformed())?;
    if days == 0 {
        return Err(malformed());
    }

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_valid_durations() {
        assert_eq!(parse_duration("duration", "30d").unwrap(), 30);
        assert_eq!(parse_duration("duration", "1d").unwrap(), 1);
        assert_eq!(parse_duration("duration", "365d").unwrap(), 365);
    }

    #[test]
    fn test_parse_rejects_invalid_durations() {
        for raw in ["", "30", "0d", "-5d", "d", "3.5d", "30 d", "30h", "+30d"] {
            let err = parse_duration("duration", raw)
                .expect_err(&format!("{:?} should be rejected", raw));
            assert_eq!(err.kind(), ErrorKind::MalformedDuration);
            assert_eq!(err.field(), Some("duration"));
        }
    }

    #[test]
    fn test_parse_accepts_leading_zeros() {
        assert_eq!(parse_duration("duration", "030d").unwrap(), 30);
    }
}
