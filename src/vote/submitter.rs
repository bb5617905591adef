//! Vote submission boundary
//!
//! The card hands every vote to a [`VoteSubmitter`]. A real voting service
//! plugs in here; the card's state transitions do not depend on which
//! submitter is used.

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use crate::core::CardConfig;

/// What gets sent for one vote
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ballot {
    /// Poll headline, e.g. "Naruto Vs Sasuke"
    pub poll: String,
}

impl Ballot {
    pub fn new(poll: impl Into<String>) -> Self {
        Self { poll: poll.into() }
    }
}

/// Service response to a submitted ballot
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Counted. `tally` is the service's total, if it reports one
    Accepted { tally: Option<u64> },
    /// Refused by the service
    Rejected { reason: String },
}

/// Trait for anything that can take a ballot
#[async_trait]
pub trait VoteSubmitter: Send + Sync {
    /// Returns the display name for this submitter
    fn name(&self) -> &str;

    /// Submits the ballot. `Err` means the service could not be reached.
    async fn submit(&self, ballot: &Ballot) -> Result<Submission>;
}

/// Stand-in service: waits a fixed latency, then accepts
#[derive(Clone, Debug)]
pub struct SimulatedSubmitter {
    latency: Duration,
}

impl SimulatedSubmitter {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn from_config(config: &CardConfig) -> Self {
        Self::new(config.submit_latency())
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl VoteSubmitter for SimulatedSubmitter {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn submit(&self, ballot: &Ballot) -> Result<Submission> {
        tracing::debug!(poll = %ballot.poll, latency = ?self.latency, "submitting ballot");
        tokio::time::sleep(self.latency).await;
        Ok(Submission::Accepted { tally: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submitter_waits_then_accepts() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1000));
        let started = tokio::time::Instant::now();

        let submission = submitter.submit(&Ballot::new("A Vs B")).await.unwrap();

        assert_eq!(submission, Submission::Accepted { tally: None });
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[test]
    fn test_simulated_submitter_from_config() {
        let config = CardConfig {
            submit_latency_ms: 250,
            ..CardConfig::default()
        };
        let submitter = SimulatedSubmitter::from_config(&config);
        assert_eq!(submitter.latency(), Duration::from_millis(250));
        assert_eq!(submitter.name(), "simulated");
    }
}
