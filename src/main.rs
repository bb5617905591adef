//! battle-vote: a terminal vote card
//! Two contenders, a countdown, one vote per session and three reaction counters.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use battle_vote::commands::{handle_cast_command, handle_config_command, handle_play_command};
use battle_vote::core::{init_logging, CardConfig, ConfigOverrides};
use battle_vote::countdown::TimeLeft;

#[derive(Parser)]
#[command(name = "battle-vote", version, about = "Vote between two contenders before the clock runs out")]
struct Cli {
    #[command(flatten)]
    card: CardArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the card and take keyboard input (default)
    Play,
    /// Cast a single vote and print the new tally
    Cast,
    /// Print the effective configuration
    Config {
        /// Print as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct CardArgs {
    /// Config file to read instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Starting vote tally
    #[arg(long, global = true, value_name = "N")]
    votes: Option<u64>,

    /// Starting countdown as D:H:M
    #[arg(long, global = true, value_name = "D:H:M")]
    time: Option<TimeLeft>,

    /// Real seconds per countdown minute
    #[arg(long, global = true, value_name = "SECS")]
    tick_secs: Option<u64>,

    /// Simulated submission latency in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    latency_ms: Option<u64>,

    /// Let closing the success dialog enable voting again
    #[arg(long, global = true)]
    allow_revote: bool,
}

impl CardArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            total_votes: self.votes,
            time_left: self.time,
            tick_interval_secs: self.tick_secs,
            submit_latency_ms: self.latency_ms,
            allow_revote_on_dismiss: self.allow_revote,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = CardConfig::load(cli.card.config.as_deref())
        .await?
        .apply(&cli.card.overrides());
    config.validate()?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => handle_play_command(config).await,
        Commands::Cast => handle_cast_command(config).await,
        Commands::Config { json } => handle_config_command(&config, json),
    }
}
