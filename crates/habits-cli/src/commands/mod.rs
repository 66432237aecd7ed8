pub mod date;
pub mod habit;

use std::path::PathBuf;

use habits_core::{HabitStore, StoreFile};

/// Load the persisted store, or an empty one on first run.
pub fn load_store() -> Result<(HabitStore, PathBuf), Box<dyn std::error::Error>> {
    let path = habits_core::storage::default_path()?;
    let store = StoreFile::load(&path)?;
    Ok((store, path))
}

/// Write the store back after a mutation.
pub fn save_store(path: &PathBuf, store: &HabitStore) -> Result<(), Box<dyn std::error::Error>> {
    StoreFile::save(path, store)?;
    Ok(())
}
