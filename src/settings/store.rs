// File-backed persistence for the settings snapshot. Best-effort by
// contract: a missing or unreadable file falls back to defaults, and a
// failed write never interrupts the UI.

use std::path::PathBuf;

use log::warn;

use crate::errors::RaceweekError;
use crate::settings::Snapshot;

const SETTINGS_FILE_NAME: &str = "settings.json";

pub struct SettingsStore {
    settings_path: PathBuf,
}

impl SettingsStore {
    /// Store rooted at an explicit directory. Used by tests and the
    /// `--settings-dir` flag.
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            settings_path: base_dir.join(SETTINGS_FILE_NAME),
        }
    }

    /// Store under the platform config directory.
    pub fn new_default() -> Result<Self, RaceweekError> {
        let base_dir = dirs::config_dir()
            .ok_or(RaceweekError::NoConfigDir)?
            .join("raceweek");
        Ok(Self::new(base_dir))
    }

    pub fn path(&self) -> &PathBuf {
        &self.settings_path
    }

    /// Reads the stored snapshot. `None` when the file is absent or does
    /// not parse; a malformed file is logged and otherwise treated as
    /// absent so a bad snapshot can never take the app down.
    pub fn load(&self) -> Option<Snapshot> {
        if !self.settings_path.exists() {
            return None;
        }
        let file = match std::fs::File::open(&self.settings_path) {
            Ok(file) => file,
            Err(e) => {
                warn!("Could not open settings file, using defaults: {}", e);
                return None;
            }
        };
        match serde_json::from_reader(file) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("Ignoring malformed settings file: {}", e);
                None
            }
        }
    }

    /// Writes the snapshot, overwriting any previous file unconditionally.
    /// Last write wins; the stored shape carries no schema version.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), RaceweekError> {
        if !self.settings_path.exists()
            && let Some(parent) = self.settings_path.parent()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| RaceweekError::SettingsIOError { source: e })?;
        }

        let file = std::fs::File::create(&self.settings_path)
            .map_err(|e| RaceweekError::SettingsIOError { source: e })?;
        serde_json::to_writer(file, snapshot)
            .map_err(|e| RaceweekError::SettingsSerializeError { source: e })
    }
}
