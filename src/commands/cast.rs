//! One-shot vote command
//!
//! Mounts a card, casts its vote behind a spinner and prints the new tally.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::card::renderer::{SUCCESS_HEADLINE, VOTING_LABEL};
use crate::card::VoteCard;
use crate::core::{format_vote_count, CardConfig, REDRAW_INTERVAL_MS};
use crate::vote::VoteOutcome;

const SPINNER_TEMPLATE: &str = "{spinner} {msg}";

/// Handles the cast command
pub async fn handle_cast_command(config: CardConfig) -> Result<()> {
    let title = config.title();
    let card = VoteCard::mount_simulated(config);

    let spinner = create_spinner(&format!("{VOTING_LABEL} {title}"))?;
    let result = card.cast_vote().await;
    spinner.finish_and_clear();
    card.unmount().await;

    let outcome = result?;
    match &outcome {
        VoteOutcome::Accepted { total_votes } => {
            println!("{} {SUCCESS_HEADLINE}", outcome.symbol());
            println!("   {title}: {} Vote", format_vote_count(*total_votes));
        }
        VoteOutcome::AlreadyVoted => println!("{} Already voted in {title}", outcome.symbol()),
        VoteOutcome::InFlight => println!("{} A vote is still being submitted", outcome.symbol()),
    }

    Ok(())
}

/// Creates a ticking spinner showing `message`
fn create_spinner(message: &str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template(SPINNER_TEMPLATE)?);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(REDRAW_INTERVAL_MS));
    Ok(spinner)
}
