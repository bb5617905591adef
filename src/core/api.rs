//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Card configuration and its validation errors
//! - Timer badge and tally formatting
//! - Logging setup shared by every command

// Configuration
pub use super::config::{default_config_path, CardConfig, ConfigError, ConfigOverrides};
pub use super::config::{REDRAW_INTERVAL_MS, DEFAULT_LOG_FILTER};

// Formatting
pub use super::format::{format_time, format_vote_count};

// Terminal utilities (re-exported from utils)
pub use crate::utils::{init_logging, set_terminal_title, set_terminal_title_and_flush};
