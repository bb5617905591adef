pub mod outcome;
pub mod submitter;

// Re-export commonly used items
pub use outcome::*;
pub use submitter::*;
