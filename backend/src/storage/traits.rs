//! # Storage Traits
//!
//! This module defines the storage abstraction that allows different
//! persistence backends to be used interchangeably by the domain layer.

use anyhow::Result;
use shared::FinancialState;

/// Trait defining the interface for sheet document persistence
///
/// The sheet is a single document with last-write-wins semantics; there
/// is exactly one mutator at a time, so implementations do not need any
/// transactional machinery beyond replacing the stored document whole.
pub trait SheetStore: Send + Sync {
    /// Load the stored sheet
    ///
    /// Returns None when nothing has been saved yet or when the stored
    /// document cannot be read as a sheet, in which case the caller
    /// starts from defaults.
    fn load(&self) -> Result<Option<FinancialState>>;

    /// Persist the sheet, replacing whatever was stored before
    fn save(&self, state: &FinancialState) -> Result<()>;
}
