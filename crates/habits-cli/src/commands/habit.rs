//! Habit management commands for CLI.

use clap::Subcommand;
use habits_core::{Eligibility, Habit, HabitKind, NewHabit, TrackingKind, DONE_VALUE};
use serde::Serialize;

use super::{load_store, save_store};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Add {
        /// Habit name
        name: String,
        /// Target description, e.g. "Run 5km"
        #[arg(long)]
        goal: String,
        /// Human-readable cadence, e.g. "Daily at 7am"
        #[arg(long)]
        frequency: String,
        /// Your motivation for this habit
        #[arg(long)]
        why: String,
        /// Habit kind: build or break (default: build)
        #[arg(long, default_value = "build")]
        kind: String,
        /// Tracking method: boolean or metric (default: boolean)
        #[arg(long, default_value = "boolean")]
        tracking: String,
        /// Required check-in interval in days (default: 1)
        #[arg(long)]
        cadence: Option<u32>,
    },
    /// List habits with streaks and eligibility
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one habit in full
    Show {
        /// Habit ID
        id: String,
    },
    /// Check in against a habit for the current reference date
    CheckIn {
        /// Habit ID
        id: String,
        /// Measured value (required for metric habits)
        #[arg(long)]
        value: Option<f64>,
    },
    /// Delete a habit
    Remove {
        /// Habit ID
        id: String,
    },
}

/// Read-side view of a habit for display.
#[derive(Serialize)]
struct HabitView<'a> {
    #[serde(flatten)]
    habit: &'a Habit,
    eligibility: Eligibility,
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, path) = load_store()?;

    match action {
        HabitAction::Add {
            name,
            goal,
            frequency,
            why,
            kind,
            tracking,
            cadence,
        } => {
            let habit = store.add_habit(NewHabit {
                name,
                kind: match kind.as_str() {
                    "break" => HabitKind::Break,
                    _ => HabitKind::Build,
                },
                tracking: match tracking.as_str() {
                    "metric" => TrackingKind::Metric,
                    _ => TrackingKind::Boolean,
                },
                goal,
                frequency_label: frequency,
                why,
                cadence_days: cadence,
            })?;
            println!("Habit created: {}", habit.id);
            println!("{}", serde_json::to_string_pretty(habit)?);
            save_store(&path, &store)?;
        }
        HabitAction::List { json } => {
            let views: Vec<HabitView> = store
                .habits()
                .iter()
                .map(|habit| {
                    Ok(HabitView {
                        habit,
                        eligibility: store.eligibility(&habit.id)?,
                    })
                })
                .collect::<Result<_, habits_core::StoreError>>()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else if views.is_empty() {
                println!("No habits tracked yet (reference date: {})", store.reference_date());
            } else {
                println!("Reference date: {}", store.reference_date());
                for view in views {
                    let status = if view.habit.record_for(store.reference_date()).is_some() {
                        "checked in today".to_string()
                    } else if view.eligibility.allowed {
                        "eligible".to_string()
                    } else {
                        format!("{} day(s) remaining", view.eligibility.days_remaining)
                    };
                    println!(
                        "{}  {}  streak {}  [{}]",
                        view.habit.id, view.habit.name, view.habit.streak, status
                    );
                }
            }
        }
        HabitAction::Show { id } => match store.get(&id) {
            Some(habit) => {
                let view = HabitView {
                    habit,
                    eligibility: store.eligibility(&id)?,
                };
                println!("{}", serde_json::to_string_pretty(&view)?);
            }
            None => println!("Habit not found: {id}"),
        },
        HabitAction::CheckIn { id, value } => {
            let eligibility = store.eligibility(&id)?;
            let amending = store
                .get(&id)
                .is_some_and(|habit| habit.record_for(store.reference_date()).is_some());

            if !eligibility.allowed && !amending {
                println!(
                    "Not eligible yet: {} day(s) remaining until the next check-in",
                    eligibility.days_remaining
                );
                return Ok(());
            }

            let value = match store.get(&id).map(|habit| habit.tracking) {
                Some(TrackingKind::Metric) => value.ok_or("--value is required for metric habits")?,
                _ => value.unwrap_or(DONE_VALUE),
            };

            let habit = store.check_in(&id, value)?;
            if amending {
                println!("Updated today's check-in for: {}", habit.name);
            } else {
                println!("Checked in: {} (streak {})", habit.name, habit.streak);
            }
            println!("{}", serde_json::to_string_pretty(habit)?);
            save_store(&path, &store)?;
        }
        HabitAction::Remove { id } => {
            store.remove_habit(&id);
            println!("Habit removed: {id}");
            save_store(&path, &store)?;
        }
    }
    Ok(())
}
