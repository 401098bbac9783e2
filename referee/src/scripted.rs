use std::collections::VecDeque;

use connect_four::Board;

use crate::{InputProvider, MoveChoice};

/// Plays back a fixed list of choices and remembers who was asked.
///
/// Once the script runs out, the session is ended.
pub struct ScriptedInput {
    choices: VecDeque<MoveChoice>,
    pub prompted: Vec<usize>,
}

impl ScriptedInput {
    pub fn new(choices: impl IntoIterator<Item = MoveChoice>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
            prompted: Vec::new(),
        }
    }

    /// Plays these 0-based columns.
    pub fn columns(columns: &[usize]) -> Self {
        Self::new(columns.iter().map(|&column| MoveChoice::Column(column)))
    }
}

impl InputProvider for ScriptedInput {
    fn choose_column(
        &mut self,
        current_player: usize,
        _player_names: &[String; 2],
        _board: &Board,
    ) -> anyhow::Result<MoveChoice> {
        self.prompted.push(current_player);
        Ok(self.choices.pop_front().unwrap_or(MoveChoice::EndSession))
    }
}

/// Player A stacks four discs in the first column while player B stacks
/// three in the second.
pub const QUICK_WIN: [usize; 7] = [0, 1, 0, 1, 0, 1, 0];

/// Fills a 5 x 5 board without anybody getting four in a row, whoever starts.
pub const FULL_DRAW: [usize; 25] = [
    0, 1, 0, 0, 2, 0, 0, 1, 1, 3, 1, 1, 2, 2, 4, 2, 2, 3, 4, 4, 3, 4, 3, 3, 4,
];
