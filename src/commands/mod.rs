//! Command implementations behind the CLI

pub mod cast;
pub mod config;
pub mod play;

pub use cast::handle_cast_command;
pub use config::handle_config_command;
pub use play::handle_play_command;
