//! Domain-level command and result types.
//!
//! These structs are the inputs and outputs of the services in this
//! layer. Callers (the CLI, or any other surface) build commands from
//! whatever their own input looks like and render results however they
//! choose; nothing here is tied to a particular interface.
//!
//! Results of operations that open the stored sheet carry a `notice`
//! when opening applied a pending rollover, so the surface can report
//! the roll no matter which command happened to trigger it.

pub mod sheet {
    use shared::{DaySlot, DayTotals, FinancialState, GoalProgress};

    /// Result of opening the sheet for a given day.
    #[derive(Debug, Clone)]
    pub struct LoadSheetResult {
        pub state: FinancialState,
        pub totals: DayTotals,
        pub progress: GoalProgress,
        /// Set when opening rolled the window forward.
        pub notice: Option<String>,
    }

    /// Input for setting the daily and/or monthly goal text.
    /// A field left as None keeps its stored value.
    #[derive(Debug, Clone, Default)]
    pub struct SetGoalsCommand {
        pub daily_goal: Option<String>,
        pub month_goal: Option<String>,
    }

    /// Result of updating goal text.
    #[derive(Debug, Clone)]
    pub struct SetGoalsResult {
        pub state: FinancialState,
        pub notice: Option<String>,
    }

    /// Input for recording who filled in the sheet.
    #[derive(Debug, Clone)]
    pub struct SetCompletedByCommand {
        pub name: String,
    }

    /// Result of updating the completed-by name.
    #[derive(Debug, Clone)]
    pub struct SetCompletedByResult {
        pub state: FinancialState,
        pub notice: Option<String>,
    }

    /// Input for writing one stream cell in one day column.
    #[derive(Debug, Clone)]
    pub struct UpdateCellCommand {
        pub slot: DaySlot,
        pub stream: String,
        pub value: String,
    }

    /// Result of a cell edit, with totals recomputed.
    #[derive(Debug, Clone)]
    pub struct UpdateCellResult {
        pub state: FinancialState,
        pub totals: DayTotals,
        pub notice: Option<String>,
    }

    /// Input for updating one program's monthly tracking fields.
    /// Fields left as None keep their stored value.
    #[derive(Debug, Clone)]
    pub struct UpdateProgramCommand {
        pub program: String,
        pub monthly: Option<String>,
        pub enrolled: Option<String>,
        pub here: Option<String>,
        pub gone: Option<String>,
    }

    /// Result of a program tracking edit.
    #[derive(Debug, Clone)]
    pub struct UpdateProgramResult {
        pub state: FinancialState,
        pub notice: Option<String>,
    }

    /// Result of manually advancing the window one day.
    #[derive(Debug, Clone)]
    pub struct RollForwardResult {
        pub state: FinancialState,
        pub notice: String,
    }

    /// Result of resetting the sheet.
    #[derive(Debug, Clone)]
    pub struct ResetResult {
        pub state: FinancialState,
    }
}

pub mod collections {
    use shared::FinancialState;

    /// Input for appending a revenue stream.
    #[derive(Debug, Clone)]
    pub struct AddStreamCommand {
        pub name: String,
    }

    /// Result of adding a stream. `applied` is false when the trimmed
    /// name was empty or already present.
    #[derive(Debug, Clone)]
    pub struct AddStreamResult {
        pub state: FinancialState,
        pub applied: bool,
        pub notice: Option<String>,
    }

    /// Input for removing a revenue stream by exact name.
    #[derive(Debug, Clone)]
    pub struct RemoveStreamCommand {
        pub name: String,
    }

    /// Result of removing a stream. `removed` is false when no stream
    /// had that name.
    #[derive(Debug, Clone)]
    pub struct RemoveStreamResult {
        pub state: FinancialState,
        pub removed: bool,
        pub notice: Option<String>,
    }

    /// Input for appending a program category.
    #[derive(Debug, Clone)]
    pub struct AddProgramCommand {
        pub name: String,
    }

    /// Result of adding a program. `applied` is false when the trimmed
    /// name was empty or already present.
    #[derive(Debug, Clone)]
    pub struct AddProgramResult {
        pub state: FinancialState,
        pub applied: bool,
        pub notice: Option<String>,
    }

    /// Input for removing a program category by exact name.
    #[derive(Debug, Clone)]
    pub struct RemoveProgramCommand {
        pub name: String,
    }

    /// Result of removing a program. `removed` is false when no program
    /// had that name.
    #[derive(Debug, Clone)]
    pub struct RemoveProgramResult {
        pub state: FinancialState,
        pub removed: bool,
        pub notice: Option<String>,
    }
}

pub mod export {
    use std::path::PathBuf;

    /// Result of writing the plain-text report to disk.
    #[derive(Debug, Clone)]
    pub struct ExportResult {
        pub file_path: PathBuf,
        pub report: String,
    }
}
