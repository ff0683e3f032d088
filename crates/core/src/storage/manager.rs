use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::ledger::Ledger;

use super::format;

/// Load/save of the whole expense collection to a single file.
///
/// The path is fixed at construction so tests can point the store at a
/// temporary directory.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the collection from disk.
    ///
    /// A missing file is an empty collection. A file that cannot be parsed,
    /// including one that is not UTF-8, is logged and also treated as empty;
    /// the next save overwrites it. A file written by a newer schema version
    /// is an error so it is never clobbered.
    pub fn load(&self) -> Result<Ledger, CoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "data file not found, starting empty");
                return Ok(Ledger::default());
            }
            Err(e) => return Err(e.into()),
        };

        let decoded = String::from_utf8(bytes)
            .map_err(|e| CoreError::InvalidFileFormat(format!("File is not valid UTF-8: {e}")))
            .and_then(|text| format::decode(&text));

        match decoded {
            Ok((version, ledger)) => {
                debug!(
                    path = %self.path.display(),
                    version,
                    expenses = ledger.len(),
                    "loaded expenses"
                );
                Ok(ledger)
            }
            Err(CoreError::UnsupportedVersion(v)) => Err(CoreError::UnsupportedVersion(v)),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "The expense tracker file is empty or contains invalid JSON. Initializing with an empty list"
                );
                Ok(Ledger::default())
            }
        }
    }

    /// Overwrite the file with the full collection.
    ///
    /// Writes to a temporary file next to the target and renames it into
    /// place, so a crash mid-write leaves the previous file intact. An
    /// existing file's permissions carry over to the replacement.
    pub fn save(&self, ledger: &Ledger) -> Result<(), CoreError> {
        let text = format::encode(ledger)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(text.as_bytes())?;
        // The temp file is created owner-only; keep whatever mode the data file had.
        if let Ok(existing) = fs::metadata(&self.path) {
            tmp.as_file().set_permissions(existing.permissions())?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        debug!(path = %self.path.display(), expenses = ledger.len(), "saved expenses");
        Ok(())
    }
}
