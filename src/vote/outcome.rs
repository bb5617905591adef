//! Results of a vote attempt

use thiserror::Error;

/// What a call to `cast_vote` did when it did not fail
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The vote was counted
    Accepted { total_votes: u64 },
    /// This session already voted; nothing happened
    AlreadyVoted,
    /// Another vote from this card is still being submitted; nothing happened
    InFlight,
}

impl VoteOutcome {
    /// Returns the emoji symbol for this outcome
    pub fn symbol(&self) -> &str {
        match self {
            VoteOutcome::Accepted { .. } => "🟢",
            VoteOutcome::AlreadyVoted => "🟠",
            VoteOutcome::InFlight => "🟡",
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, VoteOutcome::Accepted { .. })
    }
}

/// A vote attempt that ended without counting the vote
///
/// The card is left votable after any of these.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VoteError {
    #[error("vote submission failed: {0}")]
    SubmissionFailed(String),

    #[error("vote rejected: {0}")]
    Rejected(String),

    #[error("card was closed before the vote completed")]
    Cancelled,
}

impl VoteError {
    /// Whether the user can sensibly try again
    pub fn is_retryable(&self) -> bool {
        matches!(self, VoteError::SubmissionFailed(_))
    }
}
