//! A mounted vote card: owns the state, the countdown task and the vote flow.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::card::state::{ActionCounts, CardState, Reaction};
use crate::core::CardConfig;
use crate::vote::{Ballot, SimulatedSubmitter, Submission, VoteError, VoteOutcome, VoteSubmitter};

pub struct VoteCard {
    state: Arc<Mutex<CardState>>,
    config: CardConfig,
    submitter: Arc<dyn VoteSubmitter>,
    shutdown_tx: watch::Sender<bool>,
    countdown: Option<JoinHandle<()>>,
}

impl VoteCard {
    /// Mounts a card and starts its countdown.
    ///
    /// Must be called from inside a tokio runtime.
    pub fn mount(config: CardConfig, submitter: Arc<dyn VoteSubmitter>) -> Self {
        let state = Arc::new(Mutex::new(CardState::from_config(&config)));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let countdown = spawn_countdown(Arc::clone(&state), config.tick_interval(), shutdown_rx);

        tracing::debug!(
            title = %config.title(),
            submitter = submitter.name(),
            "card mounted"
        );

        Self {
            state,
            config,
            submitter,
            shutdown_tx,
            countdown: Some(countdown),
        }
    }

    /// Mounts a card backed by the simulated submitter
    pub fn mount_simulated(config: CardConfig) -> Self {
        let submitter = Arc::new(SimulatedSubmitter::from_config(&config));
        Self::mount(config, submitter)
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> CardState {
        self.lock_state().clone()
    }

    /// Casts this session's single vote.
    ///
    /// Calls made after the session voted, or while a vote is being
    /// submitted, change nothing. The lock is released during submission so
    /// reactions and the dialog stay usable.
    pub async fn cast_vote(&self) -> Result<VoteOutcome, VoteError> {
        let mut shutdown = self.shutdown_tx.subscribe();
        if *shutdown.borrow() {
            return Err(VoteError::Cancelled);
        }

        {
            let mut state = self.lock_state();
            if state.voting.has_user_voted {
                tracing::debug!("vote ignored, session already voted");
                return Ok(VoteOutcome::AlreadyVoted);
            }
            if state.in_progress {
                tracing::debug!("vote ignored, submission in flight");
                return Ok(VoteOutcome::InFlight);
            }
            state.in_progress = true;
            state.last_error = None;
        }
        let mut in_flight = InFlightGuard::new(&self.state);

        let ballot = Ballot::new(self.config.title());
        let submission = tokio::select! {
            result = self.submitter.submit(&ballot) => result,
            _ = shutdown.wait_for(|stopped| *stopped) => {
                tracing::debug!("vote cancelled, card torn down");
                return Err(VoteError::Cancelled);
            }
        };

        in_flight.disarm();
        let mut state = self.lock_state();
        state.in_progress = false;
        match submission {
            Ok(Submission::Accepted { tally }) => {
                state.voting = state.voting.with_vote(tally);
                state.confirmation_visible = true;
                let total_votes = state.voting.total_votes;
                tracing::info!(total_votes, poll = %ballot.poll, "vote accepted");
                Ok(VoteOutcome::Accepted { total_votes })
            }
            Ok(Submission::Rejected { reason }) => {
                tracing::warn!(%reason, "vote rejected");
                state.last_error = Some(reason.clone());
                Err(VoteError::Rejected(reason))
            }
            Err(e) => {
                let message = format!("{e:#}");
                tracing::warn!(error = %message, "vote submission failed");
                state.last_error = Some(message.clone());
                Err(VoteError::SubmissionFailed(message))
            }
        }
    }

    /// Records one reaction and returns the updated counts
    pub fn react(&self, reaction: Reaction) -> ActionCounts {
        let mut state = self.lock_state();
        state.reactions = state.reactions.incremented(reaction);
        tracing::debug!(
            reaction = reaction.name(),
            count = state.reactions.get(reaction),
            "reaction"
        );
        state.reactions
    }

    /// Closes the success dialog. Returns false when it was not showing.
    ///
    /// The voted latch is only cleared when `allow_revote_on_dismiss` is set.
    pub fn dismiss_confirmation(&self) -> bool {
        let mut state = self.lock_state();
        if !state.confirmation_visible {
            return false;
        }
        state.confirmation_visible = false;
        if self.config.allow_revote_on_dismiss {
            state.voting = state.voting.with_latch_cleared();
            tracing::debug!("confirmation dismissed, voting re-enabled");
        }
        true
    }

    /// Stops the countdown and abandons any vote in flight. Safe to call twice.
    pub fn teardown(&self) {
        self.shutdown_tx.send_replace(true);
    }

    pub fn is_torn_down(&self) -> bool {
        *self.shutdown_tx.borrow()
    }

    /// Tears the card down and waits for the countdown task to finish
    pub async fn unmount(mut self) {
        self.teardown();
        if let Some(countdown) = self.countdown.take() {
            if let Err(e) = countdown.await {
                tracing::warn!(error = %e, "countdown task ended abnormally");
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, CardState> {
        lock(&self.state)
    }
}

impl Drop for VoteCard {
    fn drop(&mut self) {
        self.teardown();
        if let Some(countdown) = self.countdown.take() {
            countdown.abort();
        }
    }
}

/// Clears the in-flight flag if a vote is abandoned before it completes,
/// whether by teardown or by the caller dropping the future
struct InFlightGuard<'a> {
    state: &'a Mutex<CardState>,
    armed: bool,
}

impl<'a> InFlightGuard<'a> {
    fn new(state: &'a Mutex<CardState>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            lock(self.state).in_progress = false;
            tracing::debug!("vote abandoned before completion");
        }
    }
}

// State writes never panic midway, so a poisoned lock still holds a whole value
fn lock(state: &Mutex<CardState>) -> MutexGuard<'_, CardState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn spawn_countdown(
    state: Arc<Mutex<CardState>>,
    period: Duration,
    mut stop_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let mut guard = lock(&state);
                    let before = guard.voting.time_left;
                    guard.voting = guard.voting.with_tick();
                    let after = guard.voting.time_left;
                    drop(guard);
                    if before != after && after.is_expired() {
                        tracing::info!("countdown reached zero");
                    }
                }
                _ = stop_rx.wait_for(|stopped| *stopped) => {
                    break;
                }
            }
        }
        tracing::debug!("countdown stopped");
    })
}
