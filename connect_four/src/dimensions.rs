use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DimensionsError;

pub const MIN_SIZE: usize = 5;
pub const MAX_SIZE: usize = 9;

/// The size of a board, as rows x columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Default for BoardDimensions {
    fn default() -> Self {
        Self {
            rows: 6,
            columns: 7,
        }
    }
}

impl BoardDimensions {
    /// Checks that both sides are within [`MIN_SIZE`] and [`MAX_SIZE`].
    ///
    /// Rows are checked first.
    pub fn validate(self) -> Result<Self, DimensionsError> {
        let range = MIN_SIZE..=MAX_SIZE;
        if !range.contains(&self.rows) {
            Err(DimensionsError::RowsOutOfRange)
        } else if !range.contains(&self.columns) {
            Err(DimensionsError::ColumnsOutOfRange)
        } else {
            Ok(self)
        }
    }
}

impl std::fmt::Display for BoardDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} X {}", self.rows, self.columns)
    }
}

/// Parses `"<rows> x <columns>"`, with either case of `x` and any
/// whitespace around the numbers, and validates the result.
impl FromStr for BoardDimensions {
    type Err = DimensionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rows, columns) = s
            .split_once(|c: char| c == 'x' || c == 'X')
            .ok_or(DimensionsError::InvalidFormat)?;
        let parse = |part: &str| -> Result<usize, DimensionsError> {
            let part = part.trim();
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(DimensionsError::InvalidFormat);
            }
            // Digits only, so the only failure left is overflow, which is out of range anyway.
            Ok(part.parse().unwrap_or(usize::MAX))
        };
        BoardDimensions {
            rows: parse(rows)?,
            columns: parse(columns)?,
        }
        .validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_whitespace_and_either_case() {
        let expected = BoardDimensions {
            rows: 5,
            columns: 9,
        };
        assert_eq!("5x9".parse::<BoardDimensions>(), Ok(expected));
        assert_eq!("  5 X 9 ".parse::<BoardDimensions>(), Ok(expected));
        assert_eq!("5\tx  9".parse::<BoardDimensions>(), Ok(expected));
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "5", "5 by 9", "x9", "5x", "5x9x", "-5x9", "five x nine"] {
            assert_eq!(
                input.parse::<BoardDimensions>(),
                Err(DimensionsError::InvalidFormat),
                "{input:?}"
            );
        }
    }

    #[test]
    fn rows_are_checked_before_columns() {
        assert_eq!(
            "4 x 10".parse::<BoardDimensions>(),
            Err(DimensionsError::RowsOutOfRange)
        );
        assert_eq!(
            "9 x 10".parse::<BoardDimensions>(),
            Err(DimensionsError::ColumnsOutOfRange)
        );
        assert_eq!(
            "99999999999999999999999 x 7".parse::<BoardDimensions>(),
            Err(DimensionsError::RowsOutOfRange)
        );
    }

    #[test]
    fn default_is_six_by_seven() {
        assert_eq!(BoardDimensions::default().to_string(), "6 X 7");
        assert!(BoardDimensions::default().validate().is_ok());
    }
}
