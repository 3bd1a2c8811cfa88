//! Sheet lifecycle and editing operations.
//!
//! Every operation follows the same load, roll, edit, save cycle: the
//! stored document is opened (applying any pending rollover first),
//! the edit is applied in place, and the whole document is written
//! back. There is exactly one mutator at a time, so last write wins.

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};
use shared::FinancialState;

use crate::domain::commands::collections::{
    AddProgramCommand, AddProgramResult, AddStreamCommand, AddStreamResult,
    RemoveProgramCommand, RemoveProgramResult, RemoveStreamCommand, RemoveStreamResult,
};
use crate::domain::commands::sheet::{
    LoadSheetResult, ResetResult, RollForwardResult, SetCompletedByCommand,
    SetCompletedByResult, SetGoalsCommand, SetGoalsResult, UpdateCellCommand,
    UpdateCellResult, UpdateProgramCommand, UpdateProgramResult,
};
use crate::domain::{rollover, totals};
use crate::storage::SheetStore;

/// Service owning the load, roll, edit, save lifecycle of the sheet.
#[derive(Clone)]
pub struct SheetService {
    store: Arc<dyn SheetStore>,
}

/// A sheet freshly loaded from the store with any pending rollover
/// already applied and persisted.
struct OpenedSheet {
    state: FinancialState,
    notice: Option<String>,
}

impl SheetService {
    pub fn new(store: Arc<dyn SheetStore>) -> Self {
        Self { store }
    }

    /// Open the sheet for `today`, applying any pending rollover.
    ///
    /// A brand-new or freshly rolled sheet is persisted before this
    /// returns, so a crash right after launch cannot replay the roll.
    pub fn load_sheet(&self, today: NaiveDate) -> Result<LoadSheetResult> {
        let opened = self.open(today)?;
        let totals = totals::all_totals(&opened.state);
        let progress = totals::goal_progress(&opened.state, &totals);
        Ok(LoadSheetResult {
            state: opened.state,
            totals,
            progress,
            notice: opened.notice,
        })
    }

    /// Update the daily and/or monthly goal text. Values are stored
    /// raw, exactly as typed.
    pub fn set_goals(&self, today: NaiveDate, command: SetGoalsCommand) -> Result<SetGoalsResult> {
        let OpenedSheet { mut state, notice } = self.open(today)?;
        if let Some(daily) = command.daily_goal {
            info!("Setting daily goal to '{}'", daily);
            state.daily_goal = daily;
        }
        if let Some(month) = command.month_goal {
            info!("Setting month goal to '{}'", month);
            state.month_goal = month;
        }
        self.store.save(&state)?;
        Ok(SetGoalsResult { state, notice })
    }

    /// Record who filled in the sheet.
    pub fn set_completed_by(
        &self,
        today: NaiveDate,
        command: SetCompletedByCommand,
    ) -> Result<SetCompletedByResult> {
        let OpenedSheet { mut state, notice } = self.open(today)?;
        info!("Recording sheet as completed by '{}'", command.name);
        state.completed_by = command.name;
        self.store.save(&state)?;
        Ok(SetCompletedByResult { state, notice })
    }

    /// Write one stream cell in one day column. The value is stored as
    /// raw text; nothing is parsed until totals are computed.
    pub fn update_cell(
        &self,
        today: NaiveDate,
        command: UpdateCellCommand,
    ) -> Result<UpdateCellResult> {
        let OpenedSheet { mut state, notice } = self.open(today)?;
        if !state.streams.contains(&command.stream) {
            warn!(
                "Stream '{}' is not on the sheet; the cell will not count toward totals",
                command.stream
            );
        }
        info!("Writing {} cell for '{}'", command.slot, command.stream);
        state
            .day_mut(command.slot)
            .insert(command.stream, command.value);
        self.store.save(&state)?;
        let totals = totals::all_totals(&state);
        Ok(UpdateCellResult {
            state,
            totals,
            notice,
        })
    }

    /// Update tracking fields for one program. Only the fields given
    /// in the command change; the rest keep their stored text.
    pub fn update_program(
        &self,
        today: NaiveDate,
        command: UpdateProgramCommand,
    ) -> Result<UpdateProgramResult> {
        let OpenedSheet { mut state, notice } = self.open(today)?;
        if !state.programs.contains(&command.program) {
            warn!(
                "Program '{}' is not on the sheet; its tracking fields stay hidden until it is added",
                command.program
            );
        }
        info!("Updating program tracking for '{}'", command.program);
        let entry = state.program_data.entry(command.program).or_default();
        if let Some(monthly) = command.monthly {
            entry.monthly = monthly;
        }
        if let Some(enrolled) = command.enrolled {
            entry.enrolled = enrolled;
        }
        if let Some(here) = command.here {
            entry.here = here;
        }
        if let Some(gone) = command.gone {
            entry.gone = gone;
        }
        self.store.save(&state)?;
        Ok(UpdateProgramResult { state, notice })
    }

    /// Append a revenue stream. Empty and duplicate names (exact,
    /// case-sensitive match after trimming) are silently ignored.
    pub fn add_stream(&self, today: NaiveDate, command: AddStreamCommand) -> Result<AddStreamResult> {
        let OpenedSheet { mut state, notice } = self.open(today)?;
        let name = command.name.trim().to_string();
        if name.is_empty() || state.streams.contains(&name) {
            info!("Ignoring add of stream '{}'", command.name);
            return Ok(AddStreamResult {
                state,
                applied: false,
                notice,
            });
        }
        info!("Adding stream '{}'", name);
        state.streams.push(name);
        self.store.save(&state)?;
        Ok(AddStreamResult {
            state,
            applied: true,
            notice,
        })
    }

    /// Remove a revenue stream by exact name.
    pub fn remove_stream(
        &self,
        today: NaiveDate,
        command: RemoveStreamCommand,
    ) -> Result<RemoveStreamResult> {
        let OpenedSheet { mut state, notice } = self.open(today)?;
        let before = state.streams.len();
        state.streams.retain(|s| s != &command.name);
        let removed = state.streams.len() != before;
        if removed {
            // Cells recorded under the name stay behind in the day
            // maps; they are hidden from totals until a stream with
            // the same name is added back.
            info!("Removed stream '{}'", command.name);
            self.store.save(&state)?;
        } else {
            info!("No stream named '{}' to remove", command.name);
        }
        Ok(RemoveStreamResult {
            state,
            removed,
            notice,
        })
    }

    /// Append a program category. Empty and duplicate names are
    /// silently ignored.
    pub fn add_program(
        &self,
        today: NaiveDate,
        command: AddProgramCommand,
    ) -> Result<AddProgramResult> {
        let OpenedSheet { mut state, notice } = self.open(today)?;
        let name = command.name.trim().to_string();
        if name.is_empty() || state.programs.contains(&name) {
            info!("Ignoring add of program '{}'", command.name);
            return Ok(AddProgramResult {
                state,
                applied: false,
                notice,
            });
        }
        info!("Adding program '{}'", name);
        state.programs.push(name);
        self.store.save(&state)?;
        Ok(AddProgramResult {
            state,
            applied: true,
            notice,
        })
    }

    /// Remove a program category by exact name. Tracking data recorded
    /// under the name is kept, the same way stream cells are.
    pub fn remove_program(
        &self,
        today: NaiveDate,
        command: RemoveProgramCommand,
    ) -> Result<RemoveProgramResult> {
        let OpenedSheet { mut state, notice } = self.open(today)?;
        let before = state.programs.len();
        state.programs.retain(|p| p != &command.name);
        let removed = state.programs.len() != before;
        if removed {
            info!("Removed program '{}'", command.name);
            self.store.save(&state)?;
        } else {
            info!("No program named '{}' to remove", command.name);
        }
        Ok(RemoveProgramResult {
            state,
            removed,
            notice,
        })
    }

    /// Manually advance the window one day, independent of the clock.
    pub fn roll_forward(&self, today: NaiveDate) -> Result<RollForwardResult> {
        // Any pending calendar roll applies inside open(); the manual
        // step lands on top of it and its notice is the one reported.
        let mut state = self.open(today)?.state;
        rollover::manual_roll(&mut state);
        info!("Manually rolled forward; base date is now {}", state.base_date);
        self.store.save(&state)?;
        Ok(RollForwardResult {
            state,
            notice: rollover::MANUAL_ROLL_NOTICE.to_string(),
        })
    }

    /// Reset the sheet to defaults, keeping the stream and program
    /// lists and the completed-by name.
    pub fn reset(&self, today: NaiveDate) -> Result<ResetResult> {
        // A pending roll is moot here; the window is cleared either way.
        let previous = self.open(today)?.state;
        info!("Resetting sheet; keeping streams, programs, and completed-by");
        let state = FinancialState {
            streams: previous.streams,
            programs: previous.programs,
            completed_by: previous.completed_by,
            ..FinancialState::first_run(today)
        };
        self.store.save(&state)?;
        Ok(ResetResult { state })
    }

    fn open(&self, today: NaiveDate) -> Result<OpenedSheet> {
        match self.store.load()? {
            Some(mut state) => match rollover::auto_roll(&mut state, today).notice() {
                Some(notice) => {
                    info!("{}", notice);
                    self.store.save(&state)?;
                    Ok(OpenedSheet {
                        state,
                        notice: Some(notice.to_string()),
                    })
                }
                None => Ok(OpenedSheet {
                    state,
                    notice: None,
                }),
            },
            None => {
                info!("No stored sheet found, starting a fresh one for {}", today);
                let state = FinancialState::first_run(today);
                self.store.save(&state)?;
                Ok(OpenedSheet {
                    state,
                    notice: None,
                })
            }
        }
    }
}
