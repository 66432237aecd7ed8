//! Habit and check-in record types.

use serde::{Deserialize, Serialize};

use crate::date::DateKey;

/// Sentinel value recorded by boolean-style check-ins.
pub const DONE_VALUE: f64 = 1.0;

/// Intent of a habit: something to start doing or something to stop.
///
/// Carried through for display; does not alter streak math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitKind {
    Build,
    Break,
}

/// How the presentation layer collects a check-in value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingKind {
    /// A fixed "done" value ([`DONE_VALUE`]) per check-in
    Boolean,
    /// An arbitrary numeric value per check-in
    Metric,
}

/// One check-in on one calendar day.
///
/// At most one record exists per `(habit, date)` pair; a repeat check-in on
/// the same date updates the existing record's value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckInRecord {
    pub date: DateKey,
    pub value: f64,
}

/// A tracked habit.
///
/// `streak` and `last_checked_in` are derived from `history`; they are
/// recomputed by the store on every mutation and never edited directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    /// Opaque unique id, assigned at creation
    pub id: String,
    pub name: String,
    pub kind: HabitKind,
    pub tracking: TrackingKind,
    /// Free-text target description
    pub goal: String,
    /// Human-readable cadence description; display-only, may drift from
    /// `cadence_days`
    pub frequency_label: String,
    /// Free-text motivation
    pub why: String,
    /// Required check-in interval in days (1 = daily).
    /// Defaults to 1 for records persisted before cadence existed.
    #[serde(default = "default_cadence_days")]
    pub cadence_days: u32,
    /// Check-in records in insertion order, unique by date
    #[serde(default)]
    pub history: Vec<CheckInRecord>,
    #[serde(default)]
    pub last_checked_in: Option<DateKey>,
    #[serde(default)]
    pub streak: u32,
}

pub(crate) fn default_cadence_days() -> u32 {
    1
}

impl Habit {
    /// The check-in record for `date`, if one exists.
    pub fn record_for(&self, date: DateKey) -> Option<&CheckInRecord> {
        self.history.iter().find(|record| record.date == date)
    }
}

/// User-supplied definition for a new habit.
///
/// Fields are immutable once the habit is created; there is no edit
/// operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHabit {
    pub name: String,
    pub kind: HabitKind,
    pub tracking: TrackingKind,
    pub goal: String,
    pub frequency_label: String,
    pub why: String,
    /// Defaults to 1 (daily) when not supplied
    #[serde(default)]
    pub cadence_days: Option<u32>,
}
