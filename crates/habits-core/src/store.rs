//! The habit store: all habits plus the shared reference date.
//!
//! Single-writer, synchronous mutation semantics. Every operation completes
//! within the calling turn and either applies fully or leaves the store
//! unchanged. The cached `streak` on each habit is recomputed on every
//! mutation to its history and on every reference-date change, so it is
//! never stale.

use uuid::Uuid;

use crate::date::DateKey;
use crate::eligibility::{can_check_in, Eligibility};
use crate::error::{Result, StoreError, ValidationError};
use crate::habit::{CheckInRecord, Habit, NewHabit};
use crate::streak::calculate_streak;

/// State container owning all habits and the shared reference date.
///
/// The reference date is "today" for all eligibility and streak
/// computations. It normally tracks the real current date but can be set to
/// any value for testing or simulation; all habits share the same clock.
#[derive(Debug, Clone)]
pub struct HabitStore {
    habits: Vec<Habit>,
    reference_date: DateKey,
}

impl HabitStore {
    /// Empty store with the given reference date.
    pub fn new(reference_date: DateKey) -> Self {
        Self {
            habits: Vec::new(),
            reference_date,
        }
    }

    /// Rebuild a store from persisted parts, repairing derived fields.
    ///
    /// Cached streaks are recomputed against `reference_date` so that data
    /// written under a different date loads consistent.
    pub fn from_parts(habits: Vec<Habit>, reference_date: DateKey) -> Self {
        let mut store = Self {
            habits,
            reference_date,
        };
        for habit in &mut store.habits {
            habit.cadence_days = habit.cadence_days.max(1);
            habit.streak = calculate_streak(&habit.history, reference_date, habit.cadence_days);
        }
        store
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn reference_date(&self) -> DateKey {
        self.reference_date
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    /// Create a habit from a user-supplied definition.
    ///
    /// `name`, `goal`, `frequency_label`, and `why` must be non-empty and
    /// `cadence_days`, when given, must be at least 1 (it defaults to daily).
    /// On failure no habit is created.
    pub fn add_habit(&mut self, definition: NewHabit) -> Result<&Habit> {
        require_non_empty("name", &definition.name)?;
        require_non_empty("goal", &definition.goal)?;
        require_non_empty("frequency_label", &definition.frequency_label)?;
        require_non_empty("why", &definition.why)?;

        let cadence_days = match definition.cadence_days {
            Some(0) => {
                return Err(ValidationError::InvalidValue {
                    field: "cadence_days",
                    message: "must be at least 1".into(),
                }
                .into())
            }
            Some(n) => n,
            None => 1,
        };

        self.habits.push(Habit {
            id: Uuid::new_v4().to_string(),
            name: definition.name,
            kind: definition.kind,
            tracking: definition.tracking,
            goal: definition.goal,
            frequency_label: definition.frequency_label,
            why: definition.why,
            cadence_days,
            history: Vec::new(),
            last_checked_in: None,
            streak: 0,
        });
        Ok(self.habits.last().expect("habit was just pushed"))
    }

    /// Record a check-in for the reference date.
    ///
    /// An existing record for the reference date is overwritten in place
    /// (idempotent replace); otherwise a new record is appended. The habit's
    /// streak and `last_checked_in` are recomputed afterwards.
    ///
    /// Eligibility is not consulted here: the store guarantees data
    /// consistency, cadence gating is the presentation layer's job (see
    /// [`can_check_in`]).
    pub fn check_in(&mut self, id: &str, value: f64) -> Result<&Habit> {
        let today = self.reference_date;
        let habit = self
            .habits
            .iter_mut()
            .find(|habit| habit.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        match habit.history.iter_mut().find(|record| record.date == today) {
            Some(record) => record.value = value,
            None => habit.history.push(CheckInRecord { date: today, value }),
        }

        habit.streak = calculate_streak(&habit.history, today, habit.cadence_days);
        habit.last_checked_in = Some(today);
        Ok(habit)
    }

    /// Remove a habit. A no-op when the id is unknown.
    pub fn remove_habit(&mut self, id: &str) {
        self.habits.retain(|habit| habit.id != id);
    }

    /// Replace the shared reference date.
    ///
    /// Every habit's cached streak is recomputed against the new date, so
    /// reads immediately reflect the change.
    pub fn set_reference_date(&mut self, date: DateKey) {
        self.reference_date = date;
        for habit in &mut self.habits {
            habit.streak = calculate_streak(&habit.history, date, habit.cadence_days);
        }
    }

    /// Eligibility of a habit for a new check-in on the reference date.
    ///
    /// A record already existing for the reference date means not allowed:
    /// re-checking-in that day goes through [`Self::check_in`]'s update path,
    /// not a fresh eligibility decision.
    pub fn eligibility(&self, id: &str) -> Result<Eligibility> {
        let habit = self
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let mut eligibility = can_check_in(
            habit.last_checked_in,
            habit.cadence_days,
            self.reference_date,
        );
        if habit.record_for(self.reference_date).is_some() {
            eligibility.allowed = false;
        }
        Ok(eligibility)
    }

    /// Consume the store into its persistable parts.
    pub fn into_parts(self) -> (Vec<Habit>, DateKey) {
        (self.habits, self.reference_date)
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}
