//! Longest run of qualifying days.

use crate::daily::DailyLedger;

/// Minutes a day must exceed to count toward a streak.
pub const DEFAULT_STREAK_THRESHOLD_MINUTES: u32 = 5;

/// Longest run of recorded days, in calendar order, each holding strictly
/// more than `threshold_minutes` of work.
///
/// Only days present in the ledger are walked; a calendar day with no entry
/// does not break a run.
pub fn longest_streak(ledger: &DailyLedger, threshold_minutes: u32) -> u32 {
    let mut days: Vec<_> = ledger.iter().collect();
    days.sort_by_key(|(day, _)| **day);

    let mut current = 0u32;
    let mut longest = 0u32;
    for (_, aggregate) in days {
        if aggregate.exceeds_minutes(threshold_minutes) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
