//! Check-in eligibility rules.
//!
//! Eligibility is advisory: the presentation layer asks before offering a
//! check-in, but [`HabitStore::check_in`](crate::store::HabitStore::check_in)
//! does not gate on it. The store guarantees data consistency; cadence
//! enforcement is UI policy.

use serde::{Deserialize, Serialize};

use crate::date::DateKey;

/// Outcome of an eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    /// Whether a new check-in is currently permitted.
    pub allowed: bool,
    /// Whole days until the next check-in becomes permitted (0 when allowed).
    pub days_remaining: u32,
}

/// Decide whether a habit may be checked in on `current_date`.
///
/// With no prior check-in the habit is always eligible. Otherwise a new
/// check-in is allowed once at least `cadence_days` whole days have elapsed
/// since the last one.
pub fn can_check_in(
    last_checked_in: Option<DateKey>,
    cadence_days: u32,
    current_date: DateKey,
) -> Eligibility {
    let Some(last) = last_checked_in else {
        return Eligibility {
            allowed: true,
            days_remaining: 0,
        };
    };

    let cadence = i64::from(cadence_days.max(1));
    let elapsed = last.day_diff(current_date);
    Eligibility {
        allowed: elapsed >= cadence,
        days_remaining: (cadence - elapsed).max(0) as u32,
    }
}
