#[derive(Debug, PartialEq, Eq)]
/// Why a line typed in for a move was rejected.
pub enum IllegalColumn {
    NotANumber,
    OutOfRange { width: usize },
    /// Holds the 1-based column number as it was typed.
    ColumnFull { column: usize },
}

impl std::error::Error for IllegalColumn {}

impl std::fmt::Display for IllegalColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalColumn::NotANumber => write!(f, "Incorrect column number"),
            IllegalColumn::OutOfRange { width } => {
                write!(f, "The column number is out of range (1 - {})", width)
            }
            IllegalColumn::ColumnFull { column } => write!(f, "Column {} is full", column),
        }
    }
}
