//! The vote card: state, renderer and the mounted card itself.

pub mod coordinator;
pub mod renderer;
pub mod state;


pub use coordinator::VoteCard;
pub use renderer::CardRenderer;
pub use state::{ActionCounts, CardState, Reaction, VoteButton, VotingState};
