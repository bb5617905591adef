//! State bundles for one mounted vote card.
//!
//! Every bundle is a small value. Writers derive a new value from the old one
//! and store it whole, so each transition can be tested on its own.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::{CardConfig, ConfigError};
use crate::countdown::TimeLeft;

/// Tally, countdown and the per-session voted latch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VotingState {
    pub total_votes: u64,
    pub time_left: TimeLeft,
    pub has_user_voted: bool,
}

impl VotingState {
    pub fn new(total_votes: u64, time_left: TimeLeft) -> Self {
        Self {
            total_votes,
            time_left,
            has_user_voted: false,
        }
    }

    /// Counts this session's vote. `tally` replaces the local count when the
    /// submitter reports one.
    pub fn with_vote(self, tally: Option<u64>) -> Self {
        Self {
            total_votes: tally.unwrap_or_else(|| self.total_votes.saturating_add(1)),
            has_user_voted: true,
            ..self
        }
    }

    pub fn with_tick(self) -> Self {
        Self {
            time_left: self.time_left.tick(),
            ..self
        }
    }

    pub fn with_latch_cleared(self) -> Self {
        Self {
            has_user_voted: false,
            ..self
        }
    }
}

/// The three reaction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Fire,
    Fox,
    Snake,
}

impl Reaction {
    pub const ALL: [Reaction; 3] = [Reaction::Fire, Reaction::Fox, Reaction::Snake];

    pub fn emoji(&self) -> &'static str {
        match self {
            Reaction::Fire => "🔥",
            Reaction::Fox => "🦊",
            Reaction::Snake => "🐍",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Reaction::Fire => "fire",
            Reaction::Fox => "fox",
            Reaction::Snake => "snake",
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Reaction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fire" => Ok(Reaction::Fire),
            "fox" => Ok(Reaction::Fox),
            "snake" => Ok(Reaction::Snake),
            other => Err(ConfigError::UnknownReaction(other.to_string())),
        }
    }
}

/// Reaction tallies; only ever go up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ActionCounts {
    pub fire: u64,
    pub fox: u64,
    pub snake: u64,
}

impl ActionCounts {
    pub fn get(&self, reaction: Reaction) -> u64 {
        match reaction {
            Reaction::Fire => self.fire,
            Reaction::Fox => self.fox,
            Reaction::Snake => self.snake,
        }
    }

    pub fn incremented(self, reaction: Reaction) -> Self {
        match reaction {
            Reaction::Fire => Self {
                fire: self.fire.saturating_add(1),
                ..self
            },
            Reaction::Fox => Self {
                fox: self.fox.saturating_add(1),
                ..self
            },
            Reaction::Snake => Self {
                snake: self.snake.saturating_add(1),
                ..self
            },
        }
    }
}

/// Visual state of the vote button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VoteButton {
    /// Clickable
    Idle,
    /// Disabled, spinner
    InProgress,
    /// Disabled, affirmative label
    Voted,
}

impl VoteButton {
    pub fn from_flags(has_user_voted: bool, in_progress: bool) -> Self {
        if in_progress {
            VoteButton::InProgress
        } else if has_user_voted {
            VoteButton::Voted
        } else {
            VoteButton::Idle
        }
    }

    pub fn is_enabled(&self) -> bool {
        *self == VoteButton::Idle
    }
}

/// Everything one card tracks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardState {
    pub voting: VotingState,
    pub reactions: ActionCounts,
    pub in_progress: bool,
    pub confirmation_visible: bool,
    pub last_error: Option<String>,
}

impl CardState {
    pub fn new(voting: VotingState) -> Self {
        Self {
            voting,
            reactions: ActionCounts::default(),
            in_progress: false,
            confirmation_visible: false,
            last_error: None,
        }
    }

    pub fn from_config(config: &CardConfig) -> Self {
        Self::new(VotingState::new(config.total_votes, config.time_left))
    }

    pub fn button(&self) -> VoteButton {
        VoteButton::from_flags(self.voting.has_user_voted, self.in_progress)
    }
}
