//! Day-boundary streak arithmetic.
//!
//! The decision is a pure function of the caller-supplied "today" and the
//! stored last-active date. Wall-clock time is never read here, which keeps
//! streak behavior fully deterministic under test.

use chrono::NaiveDate;

/// How a new activity on `today` affects the session/streak counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakDecision {
    /// First rewarded activity ever: start the streak at 1.
    FirstActivity,
    /// Activity already counted for this calendar date; counters unchanged.
    /// Also covers clock skew where `today` precedes the last active date.
    AlreadyCounted,
    /// Exactly one day since the last activity: streak continues.
    Continued,
    /// Gap of more than one day: streak restarts at 1.
    Broken,
}

impl StreakDecision {
    /// Whether this decision bumps the session counter and stamps
    /// `last_active_date`.
    pub fn counts_new_day(self) -> bool {
        !matches!(self, StreakDecision::AlreadyCounted)
    }
}

/// Evaluate the streak rule for an activity happening on `today`.
pub fn evaluate(today: NaiveDate, last_active: Option<NaiveDate>) -> StreakDecision {
    let Some(last) = last_active else {
        return StreakDecision::FirstActivity;
    };
    let diff_days = (today - last).num_days();
    if diff_days == 1 {
        StreakDecision::Continued
    } else if diff_days > 1 {
        StreakDecision::Broken
    } else {
        // diff_days <= 0: same day, or the clock moved backwards.
        StreakDecision::AlreadyCounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn first_activity_starts_streak() {
        assert_eq!(evaluate(d(2025, 3, 10), None), StreakDecision::FirstActivity);
    }

    #[test]
    fn same_day_is_already_counted() {
        let today = d(2025, 3, 10);
        assert_eq!(evaluate(today, Some(today)), StreakDecision::AlreadyCounted);
    }

    #[test]
    fn next_day_continues() {
        assert_eq!(
            evaluate(d(2025, 3, 11), Some(d(2025, 3, 10))),
            StreakDecision::Continued
        );
    }

    #[test]
    fn gap_breaks_streak() {
        assert_eq!(
            evaluate(d(2025, 3, 15), Some(d(2025, 3, 10))),
            StreakDecision::Broken
        );
    }

    #[test]
    fn clock_skew_counts_as_same_day() {
        // "Today" before the last active date must not disturb counters.
        assert_eq!(
            evaluate(d(2025, 3, 9), Some(d(2025, 3, 10))),
            StreakDecision::AlreadyCounted
        );
    }

    #[test]
    fn continues_across_month_boundary() {
        assert_eq!(
            evaluate(d(2025, 4, 1), Some(d(2025, 3, 31))),
            StreakDecision::Continued
        );
    }
}
