//! Ledger persistence module
//!
//! This module handles persistence of the registration ledger as a JSON
//! file: load at startup, save after every mutation. The storage handle
//! is passed explicitly into the facade rather than accessed as ambient
//! global state.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::config::StorageConfig;
use crate::ledger::RegistrationLedger;
use crate::models::Registration;
use crate::utils::errors::Result;

/// JSON-file-backed storage for the registration ledger.
#[derive(Debug, Clone)]
pub struct LedgerStorage {
    path: PathBuf,
}

impl LedgerStorage {
    /// Create a storage handle from configuration.
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            path: PathBuf::from(&config.path),
        }
    }

    /// Create a storage handle for an explicit path.
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file the ledger is persisted to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger from disk. A missing file yields an empty ledger.
    pub fn load(&self) -> Result<RegistrationLedger> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No persisted ledger, starting empty");
            return Ok(RegistrationLedger::new());
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to read persisted ledger");
                return Err(e.into());
            }
        };

        let records: Vec<Registration> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to deserialize persisted ledger");
                return Err(e.into());
            }
        };

        info!(path = %self.path.display(), count = records.len(), "Loaded registration ledger");
        Ok(RegistrationLedger::from_records(records))
    }

    /// Persist the full ledger, replacing the previous contents.
    pub fn save(&self, ledger: &RegistrationLedger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let serialized = serde_json::to_string_pretty(ledger.records())?;

        match fs::write(&self.path, serialized) {
            Ok(()) => {
                debug!(path = %self.path.display(), count = ledger.len(), "Saved registration ledger");
                Ok(())
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to save registration ledger");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_empty_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LedgerStorage::with_path(dir.path().join("registrations.json"));

        let ledger = storage.load().unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LedgerStorage::with_path(dir.path().join("nested/data/registrations.json"));

        let mut ledger = RegistrationLedger::new();
        ledger.register("u1", "1");
        storage.save(&ledger).unwrap();

        assert!(storage.path().exists());
        assert_eq!(storage.load().unwrap(), ledger);
    }
}
