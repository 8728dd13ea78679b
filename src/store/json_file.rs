use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::StateStore;
use crate::models::AlertState;

/// `AlertState` kept as pretty-printed JSON in a local file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub const DEFAULT_PATH: &'static str = "state.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the new contents are written to before the rename
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| Self::DEFAULT_PATH.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> AlertState {
        let data = match fs::read_to_string(&self.path) {
            Ok(d) => d,
            Err(e) => {
                debug!("No state loaded from {}: {}", self.path.display(), e);
                return AlertState::default();
            }
        };

        match serde_json::from_str::<AlertState>(&data) {
            Ok(state) => {
                debug!("Loaded state from {}: {:?}", self.path.display(), state);
                state
            }
            Err(e) => {
                warn!("Ignoring corrupt state file {}: {}", self.path.display(), e);
                AlertState::default()
            }
        }
    }

    /// Write via temp file + rename so a crash never leaves a half-written file.
    fn save(&self, state: &AlertState) -> io::Result<()> {
        let data = serde_json::to_string_pretty(state)?;
        let tmp = self.temp_path();

        fs::write(&tmp, data)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        debug!("Saved state to {}: {:?}", self.path.display(), state);
        Ok(())
    }
}
