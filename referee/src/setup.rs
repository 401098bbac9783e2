use std::io::{BufRead, Write};

use connect_four::BoardDimensions;
use tracing::debug;

use crate::player::Console;
use crate::series::SeriesConfig;

const GREETING: &str = "Connect Four\nFirst player's name:";
const DIMENSIONS_PROMPT: &str =
    "Set the board dimensions (Rows x Columns)\nPress Enter for default (6 x 7)";
const NUM_GAMES_PROMPT: &str = "Do you want to play single or multiple games?\n\
    For a single game, input 1 or press Enter\n\
    Input a number of games:";

impl<R: BufRead, W: Write> Console<R, W> {
    /// Asks for the player names, the board size and the number of games.
    ///
    /// Invalid answers are reported and asked again. Running out of input is
    /// an error, since there is nothing to play without a configuration.
    pub fn read_series_config(&mut self) -> anyhow::Result<SeriesConfig> {
        self.say(GREETING)?;
        let name_1 = self.expect_line()?;
        self.say("Second player's name:")?;
        let name_2 = self.expect_line()?;

        let dimensions = self.read_dimensions()?;
        let num_games = self.read_num_games()?;

        Ok(SeriesConfig {
            player_names: [name_1, name_2],
            dimensions,
            num_games,
        })
    }

    fn read_dimensions(&mut self) -> anyhow::Result<BoardDimensions> {
        loop {
            self.say(DIMENSIONS_PROMPT)?;
            let line = self.expect_line()?;
            if line.is_empty() {
                return Ok(BoardDimensions::default());
            }
            match line.parse::<BoardDimensions>() {
                Ok(dimensions) => return Ok(dimensions),
                Err(err) => {
                    debug!(input = %line, %err, "Rejected board dimensions");
                    self.say(err)?;
                }
            }
        }
    }

    fn read_num_games(&mut self) -> anyhow::Result<usize> {
        loop {
            self.say(NUM_GAMES_PROMPT)?;
            let line = self.expect_line()?;
            if line.is_empty() {
                return Ok(1);
            }
            match line.parse::<i32>() {
                Ok(num_games) if num_games > 0 => return Ok(num_games as usize),
                _ => {
                    debug!(input = %line, "Rejected number of games");
                    self.say("Invalid input")?;
                }
            }
        }
    }

    fn expect_line(&mut self) -> anyhow::Result<String> {
        match self.read_line()? {
            Some(line) => Ok(line),
            None => anyhow::bail!("Input ended before the game was set up"),
        }
    }
}
