//! # Storage Module
//!
//! Handles persistence of the sheet document.
//!
//! The domain layer talks to the [`SheetStore`] trait rather than a
//! concrete backend, so the same services run against the JSON file
//! store in production and the in-memory store in tests.
//!
//! ## Key Responsibilities
//!
//! - **Persistence**: Writing the sheet document back out after every change
//! - **Retrieval**: Loading the stored document when a command starts
//! - **Degradation**: Treating a missing or unreadable document as "first run"
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: A single pretty-printed JSON file in the data directory
//! - **Test Storage**: An in-memory store with the same interface

pub mod json_file;
pub mod memory;
pub mod traits;

// Re-export the main types that other modules need
pub use json_file::JsonFileStore;
pub use memory::MemorySheetStore;
pub use traits::SheetStore;
