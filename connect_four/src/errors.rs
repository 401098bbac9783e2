use crate::{MAX_SIZE, MIN_SIZE};

/// The error type for parsing and validating [`BoardDimensions`](crate::BoardDimensions).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionsError {
    InvalidFormat,
    RowsOutOfRange,
    ColumnsOutOfRange,
}

impl std::error::Error for DimensionsError {}

impl std::fmt::Display for DimensionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DimensionsError::InvalidFormat => write!(f, "Invalid input"),
            DimensionsError::RowsOutOfRange => {
                write!(f, "Board rows should be from {} to {}", MIN_SIZE, MAX_SIZE)
            }
            DimensionsError::ColumnsOutOfRange => {
                write!(f, "Board columns should be from {} to {}", MIN_SIZE, MAX_SIZE)
            }
        }
    }
}
