use crate::BoardDimensions;

/// How many discs in a line are needed to win.
pub const LINE_LENGTH: usize = 4;

/// The `(row_step, column_step)` vectors along which a line can run.
///
/// Rows grow downwards, so `(1, 1)` is the down-right diagonal and
/// `(1, -1)` the down-left (equivalently, up-right) one.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// The content of a single cell of the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    /// The mark used by the player with index `player_idx` (0 or 1).
    pub fn of_player(player_idx: usize) -> Cell {
        debug_assert!(player_idx < 2);
        if player_idx == 0 {
            Cell::PlayerA
        } else {
            Cell::PlayerB
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The result of evaluating a board.
///
/// This is computed from scratch after every placement and never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WinCondition {
    /// Nobody has won yet and there is still room on the board.
    None,
    PlayerAWon,
    PlayerBWon,
    /// The board is full and nobody has four in a row.
    Draw,
}

impl WinCondition {
    /// Whether the game is over.
    pub fn is_terminal(self) -> bool {
        self != WinCondition::None
    }
}

/// A gravity-fed grid of `width` columns and `height` rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// One entry per column, each holding `height` cells.
    ///
    /// Index 0 of a column is the top row. The non-empty cells of a
    /// column always form a contiguous run ending at the bottom row.
    columns: Vec<Vec<Cell>>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            columns: vec![vec![Cell::Empty; height]; width],
        }
    }

    pub fn with_dimensions(dimensions: BoardDimensions) -> Self {
        Self::new(dimensions.columns, dimensions.rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell at `column` and `row`, with row 0 at the top.
    pub fn get(&self, column: usize, row: usize) -> Option<Cell> {
        self.columns.get(column)?.get(row).copied()
    }

    /// The columns from left to right, each listed top to bottom.
    pub fn columns(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.columns.iter().map(Vec::as_slice)
    }

    /// Drops a disc into `column` and returns the row it landed in.
    ///
    /// Callers are expected to check the column beforehand. Dropping into a
    /// full or nonexistent column, or dropping an empty cell, changes nothing
    /// and returns `None`.
    pub fn place(&mut self, column: usize, cell: Cell) -> Option<usize> {
        if cell.is_empty() {
            return None;
        }
        let cells = self.columns.get_mut(column)?;
        let row = cells.iter().rposition(|c| c.is_empty())?;
        cells[row] = cell;
        Some(row)
    }

    /// Whether every cell of `column` is occupied.
    ///
    /// A column that does not exist counts as full, since nothing can be
    /// placed there.
    pub fn is_column_full(&self, column: usize) -> bool {
        match self.columns.get(column) {
            Some(cells) => cells.iter().all(|c| !c.is_empty()),
            None => true,
        }
    }

    pub fn is_full(&self) -> bool {
        (0..self.width).all(|column| self.is_column_full(column))
    }

    /// Checks for four in a row, then for a draw.
    ///
    /// A win takes priority over a full board, and if both players somehow
    /// have a line, player A is reported.
    pub fn evaluate_outcome(&self) -> WinCondition {
        if self.has_line(Cell::PlayerA) {
            WinCondition::PlayerAWon
        } else if self.has_line(Cell::PlayerB) {
            WinCondition::PlayerBWon
        } else if self.is_full() {
            WinCondition::Draw
        } else {
            WinCondition::None
        }
    }

    fn has_line(&self, player: Cell) -> bool {
        DIRECTIONS.iter().any(|&(row_step, column_step)| {
            (0..self.height).any(|row| {
                (0..self.width).any(|column| {
                    self.window_matches(row, column, row_step, column_step, player)
                })
            })
        })
    }

    // Checks the LINE_LENGTH cells starting at (row, column) and stepping by
    // (row_step, column_step). Windows that leave the board never match.
    fn window_matches(
        &self,
        row: usize,
        column: usize,
        row_step: isize,
        column_step: isize,
        player: Cell,
    ) -> bool {
        (0..LINE_LENGTH as isize).all(|k| {
            let r = row as isize + k * row_step;
            let c = column as isize + k * column_step;
            if r < 0 || c < 0 {
                return false;
            }
            self.get(c as usize, r as usize) == Some(player)
        })
    }
}
