//! # Habit Horizon Core Library
//!
//! This library provides the core business logic for the Habit Horizon
//! habit tracker. It implements a CLI-first philosophy where all operations
//! are available via a standalone CLI binary, with any GUI being a thin
//! presentation layer over the same core library.
//!
//! ## Architecture
//!
//! - **Streak Engine**: Pure cadence-aware streak calculation over a
//!   per-habit check-in history
//! - **Eligibility Rules**: Advisory check-in gating based on cadence
//! - **Habit Store**: Single-writer in-memory state container
//! - **Storage**: JSON-based persistence of the whole store
//!
//! ## Key Components
//!
//! - [`HabitStore`]: State container owning all habits and the reference date
//! - [`calculate_streak`]: Cadence-aware streak calculation
//! - [`can_check_in`]: Eligibility decision for a new check-in

pub mod date;
pub mod eligibility;
pub mod error;
pub mod habit;
pub mod storage;
pub mod store;
pub mod streak;

pub use date::DateKey;
pub use eligibility::{can_check_in, Eligibility};
pub use error::{Result, StoreError, ValidationError};
pub use habit::{CheckInRecord, Habit, HabitKind, NewHabit, TrackingKind, DONE_VALUE};
pub use storage::StoreFile;
pub use store::HabitStore;
pub use streak::calculate_streak;
