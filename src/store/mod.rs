//! Persistence for the alert debounce flag

use std::io;

use crate::models::AlertState;

pub mod json_file;

pub use json_file::JsonFileStore;

/// Storage for the single `AlertState` of this job
pub trait StateStore {
    /// Load the stored state. Never fails: anything unreadable is the default state.
    fn load(&self) -> AlertState;

    fn save(&self, state: &AlertState) -> io::Result<()>;
}
