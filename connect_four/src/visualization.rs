use crate::{Board, Cell};

fn icon(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::PlayerA => 'o',
        Cell::PlayerB => '*',
    }
}

/// Draws the board with 1-based column numbers on top.
///
/// ```text
///  1 2 3 4 5
/// ║ ║ ║ ║ ║ ║
/// ║ ║ ║*║ ║ ║
/// ║o║ ║o║ ║ ║
/// ╚═╩═╩═╩═╩═╝
/// ```
pub fn visualize_board(board: &Board) -> String {
    let mut result = String::new();
    for column in 1..=board.width() {
        result += &format!(" {}", column);
    }
    result += "\n";

    for row in 0..board.height() {
        result.push('║');
        for cells in board.columns() {
            result.push(icon(cells[row]));
            result.push('║');
        }
        result.push('\n');
    }

    // Draw the bottom of the box
    result.push('╚');
    for _ in 1..board.width() {
        result += "═╩";
    }
    result += "═╝";
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}
