//! Cadence-aware streak calculation.
//!
//! A streak is a maximal run of check-ins where the gap between consecutive
//! check-ins never exceeds the habit's cadence, anchored at the most recent
//! check-in at or before the reference date. The same comparison works for
//! daily habits (cadence 1) and lower-frequency habits (e.g. every 3 days)
//! without branching.

use crate::date::DateKey;
use crate::habit::CheckInRecord;

/// Current streak length for `history` as of `current_date`.
///
/// Records dated after `current_date` never count. The streak is 0 when the
/// history is empty, when every record is in the future, or when more than
/// `cadence_days` have passed since the most recent qualifying check-in.
pub fn calculate_streak(history: &[CheckInRecord], current_date: DateKey, cadence_days: u32) -> u32 {
    if history.is_empty() {
        return 0;
    }

    let cadence = i64::from(cadence_days.max(1));

    let mut dates: Vec<DateKey> = history
        .iter()
        .map(|record| record.date)
        .filter(|date| *date <= current_date)
        .collect();
    if dates.is_empty() {
        return 0;
    }
    dates.sort_unstable_by(|a, b| b.cmp(a));

    let most_recent = dates[0];
    if most_recent.day_diff(current_date) > cadence {
        // Broken by absence since the last check-in.
        return 0;
    }

    let mut streak = 1;
    let mut previous = most_recent;
    for date in dates.into_iter().skip(1) {
        if date.day_diff(previous) > cadence {
            // First over-cadence gap ends the streak; no skip-and-resume.
            break;
        }
        streak += 1;
        previous = date;
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    fn record(date: &str) -> CheckInRecord {
        CheckInRecord {
            date: key(date),
            value: 1.0,
        }
    }

    #[test]
    fn empty_history_has_no_streak() {
        assert_eq!(calculate_streak(&[], key("2025-05-10"), 1), 0);
    }

    #[test]
    fn three_consecutive_daily_check_ins() {
        let history = vec![
            record("2025-05-01"),
            record("2025-05-02"),
            record("2025-05-03"),
        ];
        assert_eq!(calculate_streak(&history, key("2025-05-03"), 1), 3);
    }

    #[test]
    fn skipped_day_resets_a_daily_streak() {
        let history = vec![record("2025-05-01"), record("2025-05-03")];
        assert_eq!(calculate_streak(&history, key("2025-05-03"), 1), 1);
    }

    #[test]
    fn cadence_three_tolerates_three_day_gaps() {
        let history = vec![
            record("2025-05-01"),
            record("2025-05-04"),
            record("2025-05-07"),
        ];
        assert_eq!(calculate_streak(&history, key("2025-05-07"), 3), 3);
    }

    #[test]
    fn absence_past_cadence_breaks_the_streak() {
        let history = vec![record("2025-05-01"), record("2025-05-02")];
        assert_eq!(calculate_streak(&history, key("2025-05-04"), 1), 0);
        // Still within cadence the day after.
        assert_eq!(calculate_streak(&history, key("2025-05-03"), 1), 2);
    }

    #[test]
    fn future_records_never_count() {
        let history = vec![record("2025-05-08"), record("2025-05-09")];
        assert_eq!(calculate_streak(&history, key("2025-05-05"), 1), 0);
    }

    #[test]
    fn future_records_are_ignored_not_counted() {
        let history = vec![
            record("2025-05-04"),
            record("2025-05-05"),
            record("2025-05-09"),
        ];
        assert_eq!(calculate_streak(&history, key("2025-05-05"), 1), 2);
    }

    #[test]
    fn first_gap_over_cadence_stops_the_walk() {
        // Older run beyond the gap must not be resumed.
        let history = vec![
            record("2025-04-28"),
            record("2025-04-29"),
            record("2025-05-02"),
            record("2025-05-03"),
        ];
        assert_eq!(calculate_streak(&history, key("2025-05-03"), 1), 2);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let history = vec![
            record("2025-05-03"),
            record("2025-05-01"),
            record("2025-05-02"),
        ];
        assert_eq!(calculate_streak(&history, key("2025-05-03"), 1), 3);
    }

    fn arb_history() -> impl Strategy<Value = Vec<CheckInRecord>> {
        // Day offsets from a fixed anchor, unique by construction.
        prop::collection::btree_set(0i64..60, 0..20).prop_map(|offsets| {
            let anchor: DateKey = "2025-01-01".parse().unwrap();
            offsets
                .into_iter()
                .map(|n| CheckInRecord {
                    date: anchor.add_days(n),
                    value: 1.0,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn streak_never_exceeds_history_size(history in arb_history(), day in 0i64..70, cadence in 1u32..10) {
            let current = "2025-01-01".parse::<DateKey>().unwrap().add_days(day);
            let streak = calculate_streak(&history, current, cadence);
            prop_assert!(streak as usize <= history.len());
        }

        #[test]
        fn streak_is_non_decreasing_in_cadence(history in arb_history(), day in 0i64..70, cadence in 1u32..10) {
            let current = "2025-01-01".parse::<DateKey>().unwrap().add_days(day);
            let lower = calculate_streak(&history, current, cadence);
            let higher = calculate_streak(&history, current, cadence + 1);
            prop_assert!(higher >= lower);
        }

        #[test]
        fn all_future_records_mean_zero(history in arb_history()) {
            let before_all = "2024-12-31".parse::<DateKey>().unwrap();
            prop_assert_eq!(calculate_streak(&history, before_all, 3), 0);
        }
    }
}
