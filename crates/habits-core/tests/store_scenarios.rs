//! End-to-end scenarios through the habit store.
//!
//! These tests exercise the complete workflow of creating habits, checking
//! in across simulated days, and reading back streaks and eligibility.

use habits_core::{HabitKind, HabitStore, NewHabit, TrackingKind, DONE_VALUE};

fn day(n: i64) -> habits_core::DateKey {
    let anchor: habits_core::DateKey = "2025-06-01".parse().unwrap();
    anchor.add_days(n - 1)
}

fn definition(name: &str, cadence_days: Option<u32>) -> NewHabit {
    NewHabit {
        name: name.into(),
        kind: HabitKind::Build,
        tracking: TrackingKind::Boolean,
        goal: "Show up".into(),
        frequency_label: "Regularly".into(),
        why: "Because it matters".into(),
        cadence_days,
    }
}

#[test]
fn daily_check_ins_on_three_consecutive_days_reach_streak_three() {
    let mut store = HabitStore::new(day(1));
    let id = store.add_habit(definition("Jog", Some(1))).unwrap().id.clone();

    for n in 1..=3 {
        store.set_reference_date(day(n));
        assert!(store.eligibility(&id).unwrap().allowed);
        store.check_in(&id, DONE_VALUE).unwrap();
    }

    assert_eq!(store.get(&id).unwrap().streak, 3);
}

#[test]
fn skipping_a_day_resets_a_daily_streak_to_one() {
    let mut store = HabitStore::new(day(1));
    let id = store.add_habit(definition("Jog", Some(1))).unwrap().id.clone();

    store.check_in(&id, DONE_VALUE).unwrap();
    store.set_reference_date(day(3));
    store.check_in(&id, DONE_VALUE).unwrap();

    assert_eq!(store.get(&id).unwrap().streak, 1);
}

#[test]
fn cadence_three_streak_survives_three_day_gaps() {
    let mut store = HabitStore::new(day(1));
    let id = store.add_habit(definition("Gym", Some(3))).unwrap().id.clone();

    for n in [1, 4, 7] {
        store.set_reference_date(day(n));
        assert!(store.eligibility(&id).unwrap().allowed);
        store.check_in(&id, DONE_VALUE).unwrap();
    }

    assert_eq!(store.get(&id).unwrap().streak, 3);
}

#[test]
fn untouched_habit_has_no_streak_and_is_always_eligible() {
    let mut store = HabitStore::new(day(1));
    let id = store.add_habit(definition("Write", None)).unwrap().id.clone();

    for n in [1, 5, 40] {
        store.set_reference_date(day(n));
        let habit = store.get(&id).unwrap();
        assert_eq!(habit.streak, 0);
        let eligibility = store.eligibility(&id).unwrap();
        assert!(eligibility.allowed);
        assert_eq!(eligibility.days_remaining, 0);
    }
}

#[test]
fn two_day_cadence_reports_one_day_remaining() {
    let mut store = HabitStore::new(day(5));
    let id = store.add_habit(definition("Swim", Some(2))).unwrap().id.clone();
    store.check_in(&id, DONE_VALUE).unwrap();

    store.set_reference_date(day(6));
    let eligibility = store.eligibility(&id).unwrap();
    assert!(!eligibility.allowed);
    assert_eq!(eligibility.days_remaining, 1);

    store.set_reference_date(day(7));
    let eligibility = store.eligibility(&id).unwrap();
    assert!(eligibility.allowed);
    assert_eq!(eligibility.days_remaining, 0);
}

#[test]
fn repeat_check_in_on_one_day_is_an_idempotent_replace() {
    let mut store = HabitStore::new(day(1));
    let mut def = definition("Read", Some(1));
    def.tracking = TrackingKind::Metric;
    let id = store.add_habit(def).unwrap().id.clone();

    store.check_in(&id, 12.0).unwrap();
    let streak_after_first = store.get(&id).unwrap().streak;

    // Eligibility says no (same-day record exists) ...
    assert!(!store.eligibility(&id).unwrap().allowed);

    // ... and a second check-in must not grow the history.
    store.check_in(&id, 30.0).unwrap();
    let habit = store.get(&id).unwrap();
    assert_eq!(habit.history.len(), 1);
    assert_eq!(habit.history[0].value, 30.0);
    assert_eq!(habit.streak, streak_after_first);
}

#[test]
fn streaks_of_independent_habits_do_not_interact() {
    let mut store = HabitStore::new(day(1));
    let daily = store.add_habit(definition("Jog", Some(1))).unwrap().id.clone();
    let weekly = store.add_habit(definition("Review", Some(7))).unwrap().id.clone();

    store.check_in(&daily, DONE_VALUE).unwrap();
    store.check_in(&weekly, DONE_VALUE).unwrap();

    store.set_reference_date(day(6));
    // Daily streak broke days ago; weekly is still alive.
    assert_eq!(store.get(&daily).unwrap().streak, 0);
    assert_eq!(store.get(&weekly).unwrap().streak, 1);
    assert!(store.eligibility(&daily).unwrap().allowed);
    assert!(!store.eligibility(&weekly).unwrap().allowed);
}

#[test]
fn moving_the_reference_date_back_hides_future_check_ins() {
    let mut store = HabitStore::new(day(4));
    let id = store.add_habit(definition("Jog", Some(1))).unwrap().id.clone();
    store.check_in(&id, DONE_VALUE).unwrap();

    store.set_reference_date(day(2));
    assert_eq!(store.get(&id).unwrap().streak, 0);
}
