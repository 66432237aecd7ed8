//! Reference date controls for CLI.
//!
//! The reference date is "today" for every streak and eligibility
//! computation. It normally tracks the real calendar but can be moved
//! around to simulate the passage of days.

use clap::Subcommand;
use habits_core::DateKey;

use super::{load_store, save_store};

#[derive(Subcommand)]
pub enum DateAction {
    /// Show the current reference date
    Show,
    /// Set the reference date to a specific day (YYYY-MM-DD)
    Set {
        /// Date key, e.g. 2025-06-01
        date: String,
    },
    /// Shift the reference date by a number of days (may be negative)
    Shift {
        /// Days to shift by
        days: i64,
    },
    /// Reset the reference date to the real current date
    Reset,
}

pub fn run(action: DateAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, path) = load_store()?;

    match action {
        DateAction::Show => {
            println!("{}", store.reference_date());
        }
        DateAction::Set { date } => {
            let date: DateKey = date.parse()?;
            store.set_reference_date(date);
            println!("Reference date set to {date}");
            save_store(&path, &store)?;
        }
        DateAction::Shift { days } => {
            let date = store.reference_date().add_days(days);
            store.set_reference_date(date);
            println!("Reference date set to {date}");
            save_store(&path, &store)?;
        }
        DateAction::Reset => {
            let date = DateKey::today();
            store.set_reference_date(date);
            println!("Reference date reset to {date}");
            save_store(&path, &store)?;
        }
    }
    Ok(())
}
