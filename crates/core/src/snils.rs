//! SNILS (individual insurance account number) normalization.
//!
//! Accepted input: 11 digits, optionally formatted as `XXX-XXX-XXX YY`.
//! Stored form is always the formatted 14-character variant.

use crate::error::CoreError;

/// Number of digits in a SNILS.
pub const SNILS_DIGITS: usize = 11;

/// Normalize a SNILS into the `XXX-XXX-XXX YY` form.
///
/// ```
/// use mfc_core::snils::normalize_snils;
/// assert_eq!(normalize_snils("12345678901").unwrap(), "123-456-789 01");
/// assert_eq!(normalize_snils("123-456-789 01").unwrap(), "123-456-789 01");
/// assert!(normalize_snils("123").is_err());
/// ```
pub fn normalize_snils(raw: &str) -> Result<String, CoreError> {
    let raw = raw.trim();
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let only_separators = raw
        .chars()
        .all(|c| c.is_ascii_digit() || c == '-' || c == ' ');

    if !only_separators || digits.len() != SNILS_DIGITS {
        return Err(CoreError::Validation(
            "snils must contain exactly 11 digits (XXX-XXX-XXX YY)".into(),
        ));
    }

    Ok(format!(
        "{}-{}-{} {}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_length_is_fourteen() {
        assert_eq!(normalize_snils("12345678902").unwrap().len(), 14);
    }

    #[test]
    fn letters_are_rejected() {
        assert!(normalize_snils("12345678a01").is_err());
        assert!(normalize_snils("123-456-789 0x").is_err());
    }

    #[test]
    fn too_many_digits_rejected() {
        assert!(normalize_snils("123456789012").is_err());
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(normalize_snils(" 123 456 789 05 ").unwrap(), "123-456-789 05");
    }
}
