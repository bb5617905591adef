//! # battle-vote
//!
//! `battle-vote` is a small library for a "vote between two contenders" card.
//! It powers the `battle-vote` CLI.
//!
//! ## Core Features
//!
//! - **Countdown**: a day/hour/minute clock that ticks down once per interval and stops at zero.
//! - **One vote per session**: re-entrancy guarded, submitted through a swappable [`vote::VoteSubmitter`].
//! - **Reactions**: three ungated counters that never touch voting state.
//! - **Rendering**: a pure text renderer for the card and its success dialog.
//!
//! ## Example
//!
//! ```rust,no_run
//! use battle_vote::card::{Reaction, VoteCard};
//! use battle_vote::core::CardConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     let card = VoteCard::mount_simulated(CardConfig::default());
//!     card.react(Reaction::Fire);
//!     let outcome = card.cast_vote().await;
//!     println!("{outcome:?}: {} votes", card.snapshot().voting.total_votes);
//!     card.unmount().await;
//! }
//! ```

pub mod card;
pub mod commands;
pub mod core;
pub mod countdown;
pub mod utils;
pub mod vote;
