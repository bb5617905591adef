//! Interactive card session
//!
//! Mounts one card, redraws it on a fixed interval and maps typed keys to card
//! actions. Votes are polled from the same loop as input, so reacting and
//! closing the dialog keep working while a vote is in flight.

use anyhow::{Context, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::card::{CardRenderer, Reaction, VoteCard};
use crate::core::{set_terminal_title, set_terminal_title_and_flush, CardConfig, REDRAW_INTERVAL_MS};
use crate::utils::redraw;
use crate::vote::VoteError;

/// A keyboard command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Vote,
    React(Reaction),
    Close,
    Quit,
}

/// Maps one line of input to a command; unknown input maps to `None`
pub fn parse_key(input: &str) -> Option<Key> {
    let input = input.trim().to_ascii_lowercase();
    match input.as_str() {
        "v" | "vote" => Some(Key::Vote),
        "1" | "f" => Some(Key::React(Reaction::Fire)),
        "2" | "x" => Some(Key::React(Reaction::Fox)),
        "3" | "s" => Some(Key::React(Reaction::Snake)),
        "c" | "close" => Some(Key::Close),
        "q" | "quit" | "exit" => Some(Key::Quit),
        other => other.parse::<Reaction>().ok().map(Key::React),
    }
}

/// Handles the interactive play command
pub async fn handle_play_command(config: CardConfig) -> Result<()> {
    set_terminal_title("🗳️ battle-vote");

    let renderer = CardRenderer::new(&config);
    let card = VoteCard::mount_simulated(config);

    let result = run_session(&card, &renderer).await;

    card.unmount().await;
    set_terminal_title_and_flush("✅ battle-vote")?;
    result
}

async fn run_session(card: &VoteCard, renderer: &CardRenderer) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut votes = FuturesUnordered::new();
    let mut redraw_interval = tokio::time::interval(Duration::from_millis(REDRAW_INTERVAL_MS));
    let mut frame: usize = 0;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = redraw_interval.tick() => {
                frame = frame.wrapping_add(1);
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };
                match parse_key(&line) {
                    Some(Key::Vote) => votes.push(card.cast_vote()),
                    Some(Key::React(reaction)) => {
                        card.react(reaction);
                    }
                    Some(Key::Close) => {
                        card.dismiss_confirmation();
                    }
                    Some(Key::Quit) => break,
                    None => {}
                }
            }
            Some(result) = votes.next(), if !votes.is_empty() => {
                match result {
                    Ok(outcome) => tracing::debug!(?outcome, "vote finished"),
                    Err(VoteError::Cancelled) => break,
                    Err(e) => tracing::debug!(error = %e, retryable = e.is_retryable(), "vote finished"),
                }
            }
            _ = &mut ctrl_c => break,
        }

        redraw(&renderer.render(&card.snapshot(), frame)).context("Failed to draw card")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vote_and_quit() {
        assert_eq!(parse_key("v"), Some(Key::Vote));
        assert_eq!(parse_key(" VOTE \n"), Some(Key::Vote));
        assert_eq!(parse_key("q"), Some(Key::Quit));
        assert_eq!(parse_key("exit"), Some(Key::Quit));
        assert_eq!(parse_key("c"), Some(Key::Close));
    }

    #[test]
    fn test_parse_reactions() {
        assert_eq!(parse_key("1"), Some(Key::React(Reaction::Fire)));
        assert_eq!(parse_key("x"), Some(Key::React(Reaction::Fox)));
        assert_eq!(parse_key("3"), Some(Key::React(Reaction::Snake)));
        assert_eq!(parse_key("fire"), Some(Key::React(Reaction::Fire)));
        assert_eq!(parse_key("Snake"), Some(Key::React(Reaction::Snake)));
    }

    #[test]
    fn test_reaction_keys_never_vote() {
        for key in ["1", "2", "3", "f", "x", "s", "fire", "fox", "snake"] {
            assert_ne!(parse_key(key), Some(Key::Vote), "key {key}");
        }
    }

    #[test]
    fn test_unknown_input_ignored() {
        assert_eq!(parse_key(""), None);
        assert_eq!(parse_key("hello"), None);
    }
}
