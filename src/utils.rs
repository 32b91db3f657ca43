//! Parsing and validation for the display-dimension inputs.

use crate::config::{MAX_VISIBLE_COLS, MAX_VISIBLE_ROWS, MIN_VISIBLE_DIM};
use std::fmt;

/// Dimension parsing error types for better error handling
#[derive(Debug, PartialEq, Eq)]
pub enum DimensionError {
    Empty,
    NotANumber(String),
    OutOfRange { value: usize, max: usize },
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionError::Empty => write!(f, "Value cannot be empty"),
            DimensionError::NotANumber(input) => {
                write!(f, "'{}' is not a whole number", input)
            }
            DimensionError::OutOfRange { value, max } => write!(
                f,
                "Must be between {} and {}, got {}",
                MIN_VISIBLE_DIM, max, value
            ),
        }
    }
}

impl std::error::Error for DimensionError {}

/// Parse a display-dimension input, accepting whole numbers in
/// `[MIN_VISIBLE_DIM, max]` only.
pub fn parse_dimension(input: &str, max: usize) -> Result<usize, DimensionError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DimensionError::Empty);
    }
    let value: usize = trimmed
        .parse()
        .map_err(|_| DimensionError::NotANumber(trimmed.to_string()))?;
    if !(MIN_VISIBLE_DIM..=max).contains(&value) {
        return Err(DimensionError::OutOfRange { value, max });
    }
    Ok(value)
}

/// Validate the rows-to-display input
pub fn validate_rows(input: &str) -> Result<usize, String> {
    parse_dimension(input, MAX_VISIBLE_ROWS).map_err(|e| e.to_string())
}

/// Validate the cols-to-display input
pub fn validate_cols(input: &str) -> Result<usize, String> {
    parse_dimension(input, MAX_VISIBLE_COLS).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_in_range_numbers_and_trims_whitespace() {
        assert_eq!(parse_dimension("50", 100), Ok(50));
        assert_eq!(parse_dimension(" 7 ", 100), Ok(7));
        assert_eq!(parse_dimension("1", 100), Ok(1));
        assert_eq!(parse_dimension("100", 100), Ok(100));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_dimension("", 100), Err(DimensionError::Empty));
        assert_eq!(parse_dimension("   ", 100), Err(DimensionError::Empty));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(
            parse_dimension("abc", 100),
            Err(DimensionError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_dimension("-3", 100),
            Err(DimensionError::NotANumber("-3".to_string()))
        );
        assert_eq!(
            parse_dimension("2.5", 100),
            Err(DimensionError::NotANumber("2.5".to_string()))
        );
    }

    #[test]
    fn rejects_values_outside_the_bounds() {
        assert_eq!(
            parse_dimension("0", 100),
            Err(DimensionError::OutOfRange { value: 0, max: 100 })
        );
        assert_eq!(
            parse_dimension("101", 100),
            Err(DimensionError::OutOfRange {
                value: 101,
                max: 100
            })
        );
    }

    #[test]
    fn wrappers_surface_readable_messages() {
        let err = validate_rows("0").unwrap_err();
        assert!(err.contains("between 1 and 100"), "unexpected message: {}", err);
        let err = validate_cols("nope").unwrap_err();
        assert!(err.contains("not a whole number"), "unexpected message: {}", err);
        assert_eq!(validate_rows("42"), Ok(42));
        assert_eq!(validate_cols("100"), Ok(100));
    }
}
