//! JSON file-backed sheet store.
//!
//! The whole sheet lives in one pretty-printed JSON document so it can
//! be inspected or hand-edited between sessions. Writes replace the
//! file contents; the file is read once per command.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{info, warn};
use shared::FinancialState;

use crate::storage::traits::SheetStore;

/// File name of the sheet document inside the data directory.
pub const STATE_FILE_NAME: &str = "daily-web-financials.json";

/// Environment variable that overrides the default data directory.
pub const DATA_DIR_ENV: &str = "DAILY_FINANCIALS_DATA_DIR";

/// Sheet store backed by a single JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store in the given data directory, creating the
    /// directory if it doesn't exist.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let dir = data_dir.as_ref().to_path_buf();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self {
            path: dir.join(STATE_FILE_NAME),
        })
    }

    /// Create a store in the default data directory.
    ///
    /// Resolution order: the `DAILY_FINANCIALS_DATA_DIR` environment
    /// variable, then "Daily Financials" under the user's Documents
    /// folder, falling back to the home directory when no Documents
    /// folder exists.
    pub fn new_default() -> Result<Self> {
        let data_dir = Self::default_data_dir()?;
        info!("Using data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn default_data_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }
        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(base.join("Daily Financials"))
    }
}

impl SheetStore for JsonFileStore {
    fn load(&self) -> Result<Option<FinancialState>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                warn!(
                    "Stored sheet at {} is unreadable ({}), starting fresh",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    fn save(&self, state: &FinancialState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
