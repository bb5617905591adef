//! Test doubles for the vote submission boundary

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use battle_vote::vote::{Ballot, Submission, VoteSubmitter};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Always fails after `latency`, as if the service were unreachable
pub struct FailingSubmitter {
    pub latency: Duration,
    pub calls: AtomicUsize,
}

impl FailingSubmitter {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl VoteSubmitter for FailingSubmitter {
    fn name(&self) -> &str {
        "failing"
    }

    async fn submit(&self, _ballot: &Ballot) -> Result<Submission> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        Err(anyhow!("connection refused"))
    }
}

/// Replays a fixed list of responses, one per call
pub struct ScriptedSubmitter {
    pub latency: Duration,
    responses: Mutex<VecDeque<Result<Submission, String>>>,
    pub ballots: Mutex<Vec<Ballot>>,
}

impl ScriptedSubmitter {
    pub fn new(latency: Duration, responses: Vec<Result<Submission, String>>) -> Self {
        Self {
            latency,
            responses: Mutex::new(responses.into()),
            ballots: Mutex::new(Vec::new()),
        }
    }

    pub fn ballots(&self) -> Vec<Ballot> {
        self.ballots.lock().unwrap().clone()
    }
}

#[async_trait]
impl VoteSubmitter for ScriptedSubmitter {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn submit(&self, ballot: &Ballot) -> Result<Submission> {
        self.ballots.lock().unwrap().push(ballot.clone());
        tokio::time::sleep(self.latency).await;
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Submission::Accepted { tally: None }));
        next.map_err(|message| anyhow!(message))
    }
}
