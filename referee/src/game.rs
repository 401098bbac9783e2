use std::io::Write;

use connect_four::{Board, Cell, WinCondition};
use tracing::{debug, info, warn};

use crate::player::{InputProvider, MoveChoice};

pub const POINTS_FOR_WIN: u32 = 2;
pub const POINTS_FOR_DRAW: u32 = 1;

pub enum GameResult {
    /// The game was played to the end. `points` is indexed by player.
    Finished {
        outcome: WinCondition,
        points: [u32; 2],
    },
    /// A player ended the session in the middle of the game. Nobody scores.
    SessionEnded,
}

enum TurnState {
    AwaitingMove,
    Evaluating,
    Finished(WinCondition),
}

/// The points each player gets for a terminal outcome.
pub fn points_for(outcome: WinCondition) -> [u32; 2] {
    match outcome {
        WinCondition::PlayerAWon => [POINTS_FOR_WIN, 0],
        WinCondition::PlayerBWon => [0, POINTS_FOR_WIN],
        WinCondition::Draw => [POINTS_FOR_DRAW, POINTS_FOR_DRAW],
        WinCondition::None => [0, 0],
    }
}

/// Plays a single game on `board`, with `starting_player` moving first.
///
/// Returns an error only on I/O failure.
pub fn play_game<I, W>(
    mut board: Board,
    player_names: &[String; 2],
    starting_player: usize,
    input: &mut I,
    out: &mut W,
) -> anyhow::Result<GameResult>
where
    I: InputProvider + ?Sized,
    W: Write,
{
    writeln!(out, "{}", board)?;
    let mut current_player = starting_player;
    let mut state = TurnState::AwaitingMove;

    loop {
        state = match state {
            TurnState::AwaitingMove => {
                match input.choose_column(current_player, player_names, &board)? {
                    MoveChoice::EndSession => {
                        info!(player = player_names[current_player], "Session ended");
                        return Ok(GameResult::SessionEnded);
                    }
                    MoveChoice::Column(column) => {
                        match board.place(column, Cell::of_player(current_player)) {
                            Some(row) => {
                                debug!(player = player_names[current_player], column, row);
                                writeln!(out, "{}", board)?;
                                TurnState::Evaluating
                            }
                            None => {
                                // The provider broke its contract. Ask the same player again.
                                warn!(column, "No room in the chosen column");
                                TurnState::AwaitingMove
                            }
                        }
                    }
                }
            }
            TurnState::Evaluating => {
                let outcome = board.evaluate_outcome();
                if outcome.is_terminal() {
                    TurnState::Finished(outcome)
                } else {
                    current_player = 1 - current_player;
                    TurnState::AwaitingMove
                }
            }
            TurnState::Finished(outcome) => {
                match outcome {
                    WinCondition::PlayerAWon => writeln!(out, "Player {} won", player_names[0])?,
                    WinCondition::PlayerBWon => writeln!(out, "Player {} won", player_names[1])?,
                    _ => writeln!(out, "It is a draw")?,
                }
                return Ok(GameResult::Finished {
                    outcome,
                    points: points_for(outcome),
                });
            }
        };
    }
}
