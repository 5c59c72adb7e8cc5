//! Worklog duration parsing.

use std::sync::LazyLock;

use regex::Regex;

static HOURS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)\s*h").unwrap());

static MINUTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)\s*m").unwrap());

/// Parse a human-readable duration such as `2h 30m`, `45m` or `1h` into seconds.
///
/// Only the first hour and minute amounts are used. Returns `None` when
/// the total is zero or nothing could be parsed.
///
/// ```
/// use md2adf_jira::parse_time_spent;
///
/// assert_eq!(parse_time_spent("2h 30m"), Some(9000));
/// assert_eq!(parse_time_spent("soon"), None);
/// ```
pub fn parse_time_spent(input: &str) -> Option<u64> {
    let amount = |re: &Regex| -> u64 {
        re.captures(input)
            .and_then(|caps| caps[1].parse::<u64>().ok())
            .unwrap_or(0)
    };

    let seconds = amount(&HOURS)
        .saturating_mul(3600)
        .saturating_add(amount(&MINUTES).saturating_mul(60));
    (seconds > 0).then_some(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(parse_time_spent("1h 15m"), Some(4500));
    }

    #[test]
    fn test_minutes_only() {
        assert_eq!(parse_time_spent("45m"), Some(2700));
    }

    #[test]
    fn test_space_before_unit() {
        assert_eq!(parse_time_spent("3 h"), Some(10800));
    }

    #[test]
    fn test_zero_is_rejected() {
        assert_eq!(parse_time_spent("0h 0m"), None);
        assert_eq!(parse_time_spent(""), None);
    }
}
