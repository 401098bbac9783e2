use std::path::PathBuf;

use clap::Parser;
use referee::{play_series, Console, SeriesConfig};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to a JSON file with the player names, board dimensions and
    /// number of games. Without it, these are asked for interactively.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let mut console = Console::new(std::io::stdin().lock(), std::io::stdout());

    let config = match args.config {
        Some(path) => SeriesConfig::load(&path)?,
        None => console.read_series_config()?,
    };
    info!(
        players = ?config.player_names,
        dimensions = %config.dimensions,
        num_games = config.num_games,
        "Starting series"
    );

    let report = play_series(&config, &mut console, &mut std::io::stdout())?;
    if report.ended_early {
        info!("Session ended by a player");
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    // Logs go to stderr, the game itself is played on stdout.
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
