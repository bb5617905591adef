//! Countdown clock shown in the card's timer badge
//!
//! The clock only ever moves one minute at a time. A tick borrows from the
//! next larger unit when the smaller one is already zero, and a clock that
//! has reached `0D:0H:0M` stays there.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::config::{HOURS_PER_DAY, MINUTES_PER_HOUR};
use crate::core::ConfigError;

/// Time remaining before voting closes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeLeft {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
}

impl TimeLeft {
    pub const ZERO: TimeLeft = TimeLeft {
        days: 0,
        hours: 0,
        minutes: 0,
    };

    /// Builds a clock, rejecting hours above 23 or minutes above 59
    pub fn new(days: u32, hours: u32, minutes: u32) -> Result<Self, ConfigError> {
        if hours >= HOURS_PER_DAY {
            return Err(ConfigError::HoursOutOfRange(hours));
        }
        if minutes >= MINUTES_PER_HOUR {
            return Err(ConfigError::MinutesOutOfRange(minutes));
        }
        Ok(Self {
            days,
            hours,
            minutes,
        })
    }

    /// Returns the clock one minute later
    pub fn tick(self) -> TimeLeft {
        if self.minutes > 0 {
            return TimeLeft {
                minutes: self.minutes - 1,
                ..self
            };
        }

        if self.hours > 0 {
            return TimeLeft {
                hours: self.hours - 1,
                minutes: MINUTES_PER_HOUR - 1,
                ..self
            };
        }

        if self.days > 0 {
            return TimeLeft {
                days: self.days - 1,
                hours: HOURS_PER_DAY - 1,
                minutes: MINUTES_PER_HOUR - 1,
            };
        }

        self
    }

    pub fn is_expired(&self) -> bool {
        *self == Self::ZERO
    }

    /// Total remaining minutes, i.e. how many ticks until the clock expires
    pub fn total_minutes(&self) -> u64 {
        let hours = u64::from(self.days) * u64::from(HOURS_PER_DAY) + u64::from(self.hours);
        hours * u64::from(MINUTES_PER_HOUR) + u64::from(self.minutes)
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.days, self.hours, self.minutes)
    }
}

/// Parses `D:H:M`, `H:M` or `M`, read right to left
impl FromStr for TimeLeft {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.is_empty() || parts.len() > 3 {
            return Err(ConfigError::InvalidTime(s.to_string()));
        }

        let mut fields = [0u32; 3];
        for (slot, part) in fields.iter_mut().rev().zip(parts.iter().rev()) {
            *slot = part
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidTime(s.to_string()))?;
        }

        let [days, hours, minutes] = fields;
        TimeLeft::new(days, hours, minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(days: u32, hours: u32, minutes: u32) -> TimeLeft {
        TimeLeft {
            days,
            hours,
            minutes,
        }
    }

    #[test]
    fn test_tick_decrements_minutes() {
        assert_eq!(t(3, 5, 23).tick(), t(3, 5, 22));
    }

    #[test]
    fn test_tick_borrows_from_hours() {
        assert_eq!(t(3, 5, 0).tick(), t(3, 4, 59));
    }

    #[test]
    fn test_tick_borrows_from_days() {
        assert_eq!(t(1, 0, 0).tick(), t(0, 23, 59));
    }

    #[test]
    fn test_tick_is_frozen_at_zero() {
        assert_eq!(TimeLeft::ZERO.tick(), TimeLeft::ZERO);
        assert!(TimeLeft::ZERO.tick().is_expired());
    }

    #[test]
    fn test_total_minutes() {
        assert_eq!(t(0, 0, 0).total_minutes(), 0);
        assert_eq!(t(0, 1, 1).total_minutes(), 61);
        assert_eq!(t(3, 5, 23).total_minutes(), 3 * 1440 + 5 * 60 + 23);
    }

    #[test]
    fn test_parse_full_and_partial() {
        assert_eq!("3:5:23".parse::<TimeLeft>().unwrap(), t(3, 5, 23));
        assert_eq!("5:23".parse::<TimeLeft>().unwrap(), t(0, 5, 23));
        assert_eq!("45".parse::<TimeLeft>().unwrap(), t(0, 0, 45));
        assert_eq!(" 0:00:07 ".parse::<TimeLeft>().unwrap(), t(0, 0, 7));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            "1:24:00".parse::<TimeLeft>(),
            Err(ConfigError::HoursOutOfRange(24))
        ));
        assert!(matches!(
            "0:1:60".parse::<TimeLeft>(),
            Err(ConfigError::MinutesOutOfRange(60))
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<TimeLeft>().is_err());
        assert!("a:b".parse::<TimeLeft>().is_err());
        assert!("1:2:3:4".parse::<TimeLeft>().is_err());
        assert!("-1:0".parse::<TimeLeft>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let time = t(12, 7, 3);
        assert_eq!(time.to_string(), "12:07:03");
        assert_eq!(time.to_string().parse::<TimeLeft>().unwrap(), time);
    }
}
