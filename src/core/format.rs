//! Text formatting for the timer badge and vote tally

use super::config::THOUSANDS_THRESHOLD;
use crate::countdown::TimeLeft;

/// Formats the countdown badge; minutes are tracked but not shown
pub fn format_time(time: &TimeLeft) -> String {
    format!("{}D:{}HRS", time.days, time.hours)
}

/// Formats a tally, abbreviating thousands to the nearest whole `K`
///
/// Halves round up, so 1500 shows as `2K`.
pub fn format_vote_count(count: u64) -> String {
    if count >= THOUSANDS_THRESHOLD {
        let thousands = count / THOUSANDS_THRESHOLD
            + u64::from(count % THOUSANDS_THRESHOLD >= THOUSANDS_THRESHOLD / 2);
        return format!("{thousands}K");
    }
    count.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        let time = TimeLeft {
            days: 3,
            hours: 5,
            minutes: 23,
        };
        assert_eq!(format_time(&time), "3D:5HRS");
        assert_eq!(format_time(&TimeLeft::ZERO), "0D:0HRS");
    }

    #[test]
    fn test_format_vote_count_below_threshold() {
        assert_eq!(format_vote_count(0), "0");
        assert_eq!(format_vote_count(1), "1");
        assert_eq!(format_vote_count(999), "999");
    }

    #[test]
    fn test_format_vote_count_thousands() {
        assert_eq!(format_vote_count(1000), "1K");
        assert_eq!(format_vote_count(20000), "20K");
        assert_eq!(format_vote_count(20001), "20K");
    }

    #[test]
    fn test_format_vote_count_rounding() {
        assert_eq!(format_vote_count(1499), "1K");
        assert_eq!(format_vote_count(1500), "2K");
        assert_eq!(format_vote_count(2500), "3K");
        assert_eq!(format_vote_count(999_500), "1000K");
    }

    #[test]
    fn test_format_vote_count_does_not_overflow() {
        assert_eq!(format_vote_count(u64::MAX), format!("{}K", u64::MAX / 1000 + 1));
    }
}
