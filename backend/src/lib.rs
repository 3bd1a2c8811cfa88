//! # Daily Financials Backend
//!
//! This crate provides the domain services and storage for the daily
//! web/financials sheet. It has no UI of its own:
//! - Uses synchronous operations (no async/await)
//! - Provides direct access to domain services
//! - Persists through a pluggable [`SheetStore`]
//! - Is optimized for single-user desktop operation

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use log::info;

// Domain modules
pub mod domain;
pub mod storage;

// Re-export the main types that other modules need
pub use domain::{ExportService, SheetService};
pub use storage::{JsonFileStore, MemorySheetStore, SheetStore};

/// Main backend struct that orchestrates all services
#[derive(Clone)]
pub struct Backend {
    pub sheet_service: SheetService,
    pub export_service: ExportService,
}

impl Backend {
    /// Create a backend persisting to the default data directory.
    pub fn new() -> Result<Self> {
        let store = JsonFileStore::new_default()?;
        info!("Storing sheet at {}", store.path().display());
        Ok(Self::with_store(Arc::new(store)))
    }

    /// Create a backend persisting under the given directory.
    pub fn with_data_dir<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let store = JsonFileStore::new(data_dir)?;
        info!("Storing sheet at {}", store.path().display());
        Ok(Self::with_store(Arc::new(store)))
    }

    /// Create a backend on top of any store implementation.
    pub fn with_store(store: Arc<dyn SheetStore>) -> Self {
        Self {
            sheet_service: SheetService::new(store),
            export_service: ExportService::new(),
        }
    }
}
