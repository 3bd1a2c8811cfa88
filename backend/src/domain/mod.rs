//! # Domain Module
//!
//! Contains all business logic for the daily financials sheet.
//!
//! This module encapsulates the rules that define how the rolling
//! three-day sheet behaves: how free-text cells turn into dollar
//! amounts, when the window rolls forward, and what the exported
//! report looks like. It operates independently of any specific UI
//! or storage mechanism.
//!
//! ## Module Organization
//!
//! - **sheet_service**: Sheet lifecycle and all editing operations
//! - **export_service**: Fixed-width text report rendering and file export
//! - **rollover**: The date-driven window shift state machine
//! - **totals**: Per-day totals and goal progress calculations
//! - **money**: Amount extraction from free text and currency formatting
//! - **commands**: Input and result types for every operation
//!
//! ## Key Responsibilities
//!
//! - **Rollover**: Shifting Tomorrow and Next Day toward Today as calendar days pass
//! - **Totals**: Summing the parseable part of each listed stream's cells
//! - **Goal Progress**: Comparing today's total against the daily goal text
//! - **Collection Editing**: Adding and removing streams and programs without losing data
//! - **Export**: Producing the printable report byte for byte
//!
//! ## Core Concepts
//!
//! - **Sheet**: The single persistent document holding goals, cells, and rosters
//! - **Day Slot**: One of the three window columns (Today, Tomorrow, Next Day)
//! - **Stream**: A named revenue row; only listed streams count toward totals
//! - **Program**: A named tracking category with monthly/enrolled/here/gone text
//!
//! ## Business Rules
//!
//! - Cells hold raw text; parsing happens only when totals are computed
//! - A parenthesized number inside a cell wins over any other number in it
//! - Rolling never invents data: cleared columns start empty
//! - Removing a stream or program hides its data instead of deleting it
//!
//! ## Design Principles
//!
//! - **Single Responsibility**: Each service has a focused purpose
//! - **Testability**: Pure functions and clear interfaces for easy testing
//! - **Storage Agnostic**: Works with any storage implementation
//! - **UI Agnostic**: Business logic separate from presentation concerns

pub mod commands;
pub mod export_service;
pub mod money;
pub mod rollover;
pub mod sheet_service;
pub mod totals;

pub use commands::*;
pub use export_service::*;
pub use money::*;
pub use rollover::*;
pub use sheet_service::*;
pub use totals::*;
