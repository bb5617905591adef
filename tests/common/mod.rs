//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod submitters;

pub use self::submitters::{FailingSubmitter, ScriptedSubmitter};

use battle_vote::core::CardConfig;
use battle_vote::countdown::TimeLeft;
use std::time::Duration;

pub const TICK: Duration = Duration::from_secs(60);
pub const LATENCY: Duration = Duration::from_millis(1000);

/// Default card settings with a chosen starting clock
pub fn config_with_time(days: u32, hours: u32, minutes: u32) -> CardConfig {
    CardConfig {
        time_left: TimeLeft::new(days, hours, minutes).expect("valid test clock"),
        ..CardConfig::default()
    }
}

/// Sleeps past `ticks` countdown ticks without landing on a tick boundary
pub async fn advance_ticks(ticks: u32) {
    tokio::time::sleep(TICK * ticks + TICK / 2).await;
}
