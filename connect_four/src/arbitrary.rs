use quickcheck::Arbitrary;

use crate::{Board, Cell};

/// A random board size together with a sequence of column choices.
#[derive(Clone, Debug)]
pub struct MoveSequence {
    pub width: usize,
    pub height: usize,
    pub moves: Vec<usize>,
}

impl MoveSequence {
    /// Plays the moves with alternating players, ignoring wins.
    ///
    /// A move into a full column goes to the next column to the right that
    /// still has room (wrapping around), so long sequences fill the board.
    pub fn play(&self) -> Board {
        let mut board = Board::new(self.width, self.height);
        let mut player_idx = 0;
        for &mv in &self.moves {
            let Some(column) = (0..self.width)
                .map(|offset| (mv + offset) % self.width)
                .find(|&column| !board.is_column_full(column))
            else {
                break;
            };
            board.place(column, Cell::of_player(player_idx));
            player_idx = 1 - player_idx;
        }
        board
    }
}

impl Arbitrary for MoveSequence {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let width = (u8::arbitrary(g) % 6) as usize + 4;
        let height = (u8::arbitrary(g) % 6) as usize + 4;
        // Sometimes more moves than cells, so that full boards show up.
        let num_moves = usize::arbitrary(g) % (width * height + 8);
        let moves = (0..num_moves)
            .map(|_| usize::arbitrary(g) % width)
            .collect();
        MoveSequence {
            width,
            height,
            moves,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let width = self.width;
        let height = self.height;
        Box::new(self.moves.shrink().map(move |moves| MoveSequence {
            width,
            height,
            moves: moves.into_iter().map(|mv| mv % width).collect(),
        }))
    }
}
