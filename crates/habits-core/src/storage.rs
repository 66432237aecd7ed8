//! JSON persistence for the habit store.
//!
//! The whole store is a single document `{ habits, simulated_date }` at
//! `~/.config/habits/habits.json`, loaded at startup and written after every
//! mutation. Loading favors graceful degradation: a missing file yields an
//! empty store, and legacy records missing `cadence_days` are normalized to
//! daily as a one-time migration step rather than branching on the field
//! later.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::date::DateKey;
use crate::error::Result;
use crate::habit::Habit;
use crate::store::HabitStore;

/// Returns `~/.config/habits[-dev]/` based on HABITS_ENV.
///
/// Set HABITS_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HABITS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("habits-dev")
    } else {
        base_dir.join("habits")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default location of the persisted store.
pub fn default_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("habits.json"))
}

/// On-disk shape of the persisted store.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreFile {
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default = "DateKey::today")]
    pub simulated_date: DateKey,
}

impl StoreFile {
    /// Load the store from `path`.
    ///
    /// A missing file yields an empty store with today's date. Legacy data
    /// is repaired on the way in (absent or zero cadence becomes 1, cached
    /// streaks are recomputed against the stored reference date).
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<HabitStore> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(HabitStore::new(DateKey::today()));
            }
            Err(err) => return Err(err.into()),
        };
        let file: StoreFile = serde_json::from_str(&content)?;
        Ok(HabitStore::from_parts(file.habits, file.simulated_date))
    }

    /// Persist `store` to `path`.
    ///
    /// # Errors
    /// Returns an error if the store cannot be serialized or written.
    pub fn save(path: &Path, store: &HabitStore) -> Result<()> {
        let file = StoreFile {
            habits: store.habits().to_vec(),
            simulated_date: store.reference_date(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
