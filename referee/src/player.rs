use std::io::{BufRead, Write};

use connect_four::Board;
use tracing::{debug, trace};

use crate::error::IllegalColumn;

/// Typing this instead of a column number ends the whole session.
pub const END_COMMAND: &str = "end";

/// What a player wants to do on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveChoice {
    /// A 0-based column that exists and still has room.
    Column(usize),
    /// Stop playing, including any remaining games of the series.
    EndSession,
}

/// Supplies the moves of both players.
///
/// Implementations are responsible for rejecting and re-asking for bad
/// input; the game loop only ever sees valid columns or the end signal.
pub trait InputProvider {
    fn choose_column(
        &mut self,
        current_player: usize,
        player_names: &[String; 2],
        board: &Board,
    ) -> anyhow::Result<MoveChoice>;
}

/// Validates a typed, 1-based column number against the board and returns
/// the 0-based column.
///
/// Numbers that do not fit in an `i32` are not numbers at all, so they are
/// reported as such rather than as out of range.
pub fn parse_column(input: &str, board: &Board) -> Result<usize, IllegalColumn> {
    let number: i32 = input.parse().map_err(|_| IllegalColumn::NotANumber)?;
    if number < 1 || number as usize > board.width() {
        return Err(IllegalColumn::OutOfRange {
            width: board.width(),
        });
    }
    let column = number as usize - 1;
    if board.is_column_full(column) {
        return Err(IllegalColumn::ColumnFull {
            column: number as usize,
        });
    }
    Ok(column)
}

/// Line-based text I/O with the players, e.g. over stdin/stdout.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    // A re-usable buffer for reading.
    // Should always be empty before and after read_line().
    buf: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            buf: String::new(),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Prints a line and flushes, so that prompts show up before blocking on input.
    pub(crate) fn say(&mut self, text: impl std::fmt::Display) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Reads one line without its line terminator, or `None` at the end of input.
    pub(crate) fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let num_bytes_read = self.reader.read_line(&mut self.buf)?;
        if num_bytes_read == 0 {
            return Ok(None);
        }
        let line = String::from(self.buf.trim_end_matches(&['\n', '\r'][..]));
        self.buf.clear();
        trace!(name: "Received line", line = %line);
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> InputProvider for Console<R, W> {
    fn choose_column(
        &mut self,
        current_player: usize,
        player_names: &[String; 2],
        board: &Board,
    ) -> anyhow::Result<MoveChoice> {
        let name = &player_names[current_player];
        loop {
            self.say(format_args!("{}'s turn:", name))?;
            let Some(line) = self.read_line()? else {
                debug!(player = name, "Input closed, ending the session");
                return Ok(MoveChoice::EndSession);
            };
            if line == END_COMMAND {
                return Ok(MoveChoice::EndSession);
            }
            match parse_column(&line, board) {
                Ok(column) => return Ok(MoveChoice::Column(column)),
                Err(err) => {
                    debug!(player = name, input = %line, %err, "Rejected column");
                    self.say(err)?;
                }
            }
        }
    }
}
