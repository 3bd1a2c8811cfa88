//! In-memory sheet store.

use std::sync::Mutex;

use anyhow::Result;
use shared::FinancialState;

use crate::storage::traits::SheetStore;

/// Sheet store that keeps the document in memory. Used by tests and
/// anywhere persistence across processes is not wanted.
#[derive(Debug, Default)]
pub struct MemorySheetStore {
    state: Mutex<Option<FinancialState>>,
}

impl MemorySheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a document.
    pub fn with_state(state: FinancialState) -> Self {
        Self {
            state: Mutex::new(Some(state)),
        }
    }
}

impl SheetStore for MemorySheetStore {
    fn load(&self) -> Result<Option<FinancialState>> {
        Ok(self.state.lock().unwrap().clone())
    }

    fn save(&self, state: &FinancialState) -> Result<()> {
        *self.state.lock().unwrap() = Some(state.clone());
        Ok(())
    }
}
