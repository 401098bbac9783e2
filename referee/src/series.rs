use std::io::Write;
use std::path::Path;

use connect_four::{Board, BoardDimensions, WinCondition};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::game::{play_game, GameResult};
use crate::player::InputProvider;

/// Everything needed to play a series of games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub player_names: [String; 2],
    #[serde(default)]
    pub dimensions: BoardDimensions,
    #[serde(default = "default_num_games")]
    pub num_games: usize,
}

fn default_num_games() -> usize {
    1
}

impl SeriesConfig {
    /// Reads a config from a JSON file and validates it.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        let config: SeriesConfig = serde_json::from_reader(std::io::BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.num_games == 0 {
            anyhow::bail!("At least one game must be played");
        }
        if self.player_names.iter().any(|name| name.is_empty()) {
            anyhow::bail!("Player names must not be empty");
        }
        self.dimensions.validate()?;
        Ok(())
    }
}

/// A finished game of a series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub starting_player: usize,
    pub outcome: WinCondition,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeriesReport {
    /// Total points per player.
    pub scores: [u32; 2],
    /// Only the games that were played to the end.
    pub games: Vec<GameSummary>,
    /// Whether a player ended the session before all games were played.
    pub ended_early: bool,
}

/// Plays `config.num_games` games, alternating who starts, and keeps score.
///
/// Returns an error only on I/O failure.
pub fn play_series<I, W>(
    config: &SeriesConfig,
    input: &mut I,
    out: &mut W,
) -> anyhow::Result<SeriesReport>
where
    I: InputProvider + ?Sized,
    W: Write,
{
    let [name_1, name_2] = &config.player_names;
    let single_game = config.num_games == 1;

    writeln!(out, "{} VS {}", name_1, name_2)?;
    writeln!(out, "{} board", config.dimensions)?;
    if single_game {
        writeln!(out, "Single game")?;
    } else {
        writeln!(out, "Total {} games", config.num_games)?;
    }

    let mut report = SeriesReport::default();
    let mut starting_player = 0;
    for game_idx in 0..config.num_games {
        if !single_game {
            writeln!(out, "Game #{}", game_idx + 1)?;
        }
        let board = Board::with_dimensions(config.dimensions);
        match play_game(board, &config.player_names, starting_player, input, out)? {
            GameResult::Finished { outcome, points } => {
                debug!(game_idx, starting_player, ?outcome, "Game finished");
                report.scores[0] += points[0];
                report.scores[1] += points[1];
                report.games.push(GameSummary {
                    starting_player,
                    outcome,
                });
                writeln!(out, "Score")?;
                writeln!(
                    out,
                    "{}: {} {}: {}",
                    name_1, report.scores[0], name_2, report.scores[1]
                )?;
            }
            GameResult::SessionEnded => {
                info!(game_idx, "Series ended early");
                report.ended_early = true;
                break;
            }
        }
        starting_player = 1 - starting_player;
    }

    writeln!(out, "Game over!")?;
    out.flush()?;
    info!(
        scores = ?report.scores,
        games_played = report.games.len(),
        "End result"
    );
    Ok(report)
}
