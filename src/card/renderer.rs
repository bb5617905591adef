//! Text renderer for the vote card.

use crate::card::state::{CardState, Reaction, VoteButton};
use crate::core::{format_time, format_vote_count, CardConfig};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const TIMER_DOT: &str = "🔴";
const TALLY_ICON: &str = "▁▃▅";
const DIALOG_RULE: &str = "────────────────────────────────────────";
const KEY_HELP: &str = "[v] vote  [1] fire  [2] fox  [3] snake  [c] close  [q] quit";

pub const VOTE_LABEL: &str = "Cast Vote →";
pub const VOTING_LABEL: &str = "Voting...";
pub const VOTED_LABEL: &str = "Voted!";
pub const SUCCESS_HEADLINE: &str = "Vote Cast Successfully!";
pub const SUCCESS_MESSAGE: &str = "Thank you for participating in the battle!";

#[derive(Clone, Debug)]
pub struct CardRenderer {
    title: String,
    left_initial: String,
    right_initial: String,
}

impl CardRenderer {
    pub fn new(config: &CardConfig) -> Self {
        Self {
            title: config.title(),
            left_initial: initial(&config.left),
            right_initial: initial(&config.right),
        }
    }

    /// Renders the whole card. `frame` advances the spinner.
    pub fn render(&self, state: &CardState, frame: usize) -> String {
        let mut lines = vec![
            format!("{TIMER_DOT} {}", format_time(&state.voting.time_left)),
            String::new(),
            format!(
                "      ( {} )      vs      ( {} )",
                self.left_initial, self.right_initial
            ),
            String::new(),
            reaction_row(state),
            self.title.clone(),
            format!(
                "[ {} ]    {TALLY_ICON} {} Vote",
                button_label(state.button(), frame),
                format_vote_count(state.voting.total_votes)
            ),
        ];

        if let Some(error) = &state.last_error {
            lines.push(format!("⚠️  Vote failed: {error} (press v to retry)"));
        }

        if state.confirmation_visible {
            lines.push(String::new());
            lines.push(DIALOG_RULE.to_string());
            lines.push(format!("  ✅ {SUCCESS_HEADLINE}"));
            lines.push(format!("  {SUCCESS_MESSAGE}"));
            lines.push("  [c] close".to_string());
            lines.push(DIALOG_RULE.to_string());
        }

        lines.push(String::new());
        lines.push(KEY_HELP.to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Button text for a given state
pub fn button_label(button: VoteButton, frame: usize) -> String {
    match button {
        VoteButton::Idle => VOTE_LABEL.to_string(),
        VoteButton::InProgress => {
            format!("{} {VOTING_LABEL}", SPINNER_FRAMES[frame % SPINNER_FRAMES.len()])
        }
        VoteButton::Voted => VOTED_LABEL.to_string(),
    }
}

// Counts appear as a badge only once a reaction has been clicked
fn reaction_row(state: &CardState) -> String {
    Reaction::ALL
        .iter()
        .map(|reaction| match state.reactions.get(*reaction) {
            0 => format!("[{}]", reaction.emoji()),
            count => format!("[{} {count}]", reaction.emoji()),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}
