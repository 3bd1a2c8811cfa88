use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::info;
use thiserror::Error;

use backend::domain::commands::collections::{
    AddProgramCommand, AddStreamCommand, RemoveProgramCommand, RemoveStreamCommand,
};
use backend::domain::commands::sheet::{
    SetCompletedByCommand, SetGoalsCommand, UpdateCellCommand, UpdateProgramCommand,
};
use backend::domain::money::format_currency;
use backend::Backend;
use shared::DaySlot;

#[derive(Parser, Debug)]
#[command(name = "daily-financials")]
#[command(about = "Set rolling 3-day revenue goals across all your income streams")]
#[command(version)]
#[command(after_help = "\
How it works:
  Fill in dollar goals for each revenue stream across Today, Tomorrow, and
  Next Day. Each day the sheet rolls forward: yesterday's Tomorrow becomes
  Today and a fresh Next Day opens up for planning. Goals we set are goals
  we get.")]
struct Cli {
    /// Directory holding the sheet file (defaults to the Documents folder)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Date to treat as today (YYYY-MM-DD), instead of the system clock
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the sheet with totals and goal progress
    Show,
    /// Set the daily and/or monthly goal text, or show them
    Goal {
        /// Daily goal, stored exactly as typed (e.g. 1,500)
        #[arg(long)]
        daily: Option<String>,
        /// Month goal, stored exactly as typed
        #[arg(long)]
        month: Option<String>,
    },
    /// Record who filled in the sheet
    CompletedBy {
        name: String,
    },
    /// Write one cell: day column, stream name, and the goal text
    Fill {
        /// Day column: today, tomorrow, or next
        day: String,
        /// Stream name, exactly as listed on the sheet
        stream: String,
        /// Goal text, e.g. "2 intros (398)"
        value: String,
    },
    /// Add or remove revenue streams
    Stream {
        #[command(subcommand)]
        command: StreamCommand,
    },
    /// Add, remove, or update program categories
    Program {
        #[command(subcommand)]
        command: ProgramCommand,
    },
    /// Roll the window forward one day without waiting for midnight
    Roll,
    /// Clear goals and day columns, keeping streams, programs, and name
    Reset {
        /// Confirm the reset
        #[arg(long)]
        force: bool,
    },
    /// Write the sheet as a text report
    Export {
        /// Target file or directory (defaults to the Documents folder)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum StreamCommand {
    /// Add a revenue stream
    Add { name: String },
    /// Remove a revenue stream; its cells are kept but stop counting
    Remove { name: String },
}

#[derive(Subcommand, Debug)]
enum ProgramCommand {
    /// Add a program category
    Add { name: String },
    /// Remove a program category; its tracking data is kept
    Remove { name: String },
    /// Update tracking fields for a program
    Set {
        /// Program name, exactly as listed on the sheet
        program: String,
        /// Monthly dollars text
        #[arg(long)]
        monthly: Option<String>,
        /// Enrollment count text
        #[arg(long)]
        enrolled: Option<String>,
        /// Members here this month
        #[arg(long)]
        here: Option<String>,
        /// Members gone this month
        #[arg(long)]
        gone: Option<String>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("unknown day column '{0}' (expected today, tomorrow, or next)")]
    UnknownDaySlot(String),
    #[error("reset clears goals and all three day columns; run again with --force to confirm")]
    ResetNotConfirmed,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let backend = match &cli.data_dir {
        Some(dir) => Backend::with_data_dir(dir)?,
        None => Backend::new()?,
    };
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    info!("Running against sheet date {}", today);

    run(&backend, today, cli.command)
}

fn run(backend: &Backend, today: NaiveDate, command: Command) -> Result<()> {
    match command {
        Command::Show => {
            let loaded = backend.sheet_service.load_sheet(today)?;
            if let Some(notice) = &loaded.notice {
                println!("{notice}");
                println!();
            }
            println!(
                "{}",
                backend.export_service.render_report(&loaded.state, today)
            );
            if loaded.progress.goal_amount > 0.0 {
                println!();
                println!(
                    "Today vs. Daily Goal: {} / {} ({}%)",
                    format_currency(loaded.progress.today_total),
                    format_currency(loaded.progress.goal_amount),
                    loaded.progress.percent
                );
            }
            Ok(())
        }
        Command::Goal { daily, month } => {
            let (state, notice) = if daily.is_none() && month.is_none() {
                let loaded = backend.sheet_service.load_sheet(today)?;
                (loaded.state, loaded.notice)
            } else {
                let result = backend.sheet_service.set_goals(
                    today,
                    SetGoalsCommand {
                        daily_goal: daily,
                        month_goal: month,
                    },
                )?;
                (result.state, result.notice)
            };
            print_notice(notice.as_deref());
            println!("Daily Goal: {}", goal_line(&state.daily_goal));
            println!("Month Goal: {}", goal_line(&state.month_goal));
            Ok(())
        }
        Command::CompletedBy { name } => {
            let result = backend
                .sheet_service
                .set_completed_by(today, SetCompletedByCommand { name })?;
            print_notice(result.notice.as_deref());
            println!("Completed By: {}", result.state.completed_by);
            Ok(())
        }
        Command::Fill { day, stream, value } => {
            let slot =
                DaySlot::parse(&day).ok_or_else(|| CliError::UnknownDaySlot(day.clone()))?;
            let result = backend
                .sheet_service
                .update_cell(today, UpdateCellCommand { slot, stream, value })?;
            print_notice(result.notice.as_deref());
            println!(
                "{} column now totals {}",
                slot.label(),
                format_currency(result.totals.get(slot))
            );
            Ok(())
        }
        Command::Stream { command } => match command {
            StreamCommand::Add { name } => {
                let result = backend
                    .sheet_service
                    .add_stream(today, AddStreamCommand { name: name.clone() })?;
                print_notice(result.notice.as_deref());
                if result.applied {
                    println!("Added stream '{}'", name.trim());
                } else {
                    println!("Stream '{}' was not added (empty or already listed)", name.trim());
                }
                Ok(())
            }
            StreamCommand::Remove { name } => {
                let result = backend
                    .sheet_service
                    .remove_stream(today, RemoveStreamCommand { name: name.clone() })?;
                print_notice(result.notice.as_deref());
                if result.removed {
                    println!("Removed stream '{name}'; its cells stop counting toward totals");
                } else {
                    println!("No stream named '{name}'");
                }
                Ok(())
            }
        },
        Command::Program { command } => match command {
            ProgramCommand::Add { name } => {
                let result = backend
                    .sheet_service
                    .add_program(today, AddProgramCommand { name: name.clone() })?;
                print_notice(result.notice.as_deref());
                if result.applied {
                    println!("Added program '{}'", name.trim());
                } else {
                    println!("Program '{}' was not added (empty or already listed)", name.trim());
                }
                Ok(())
            }
            ProgramCommand::Remove { name } => {
                let result = backend
                    .sheet_service
                    .remove_program(today, RemoveProgramCommand { name: name.clone() })?;
                print_notice(result.notice.as_deref());
                if result.removed {
                    println!("Removed program '{name}'; its tracking data is kept");
                } else {
                    println!("No program named '{name}'");
                }
                Ok(())
            }
            ProgramCommand::Set {
                program,
                monthly,
                enrolled,
                here,
                gone,
            } => {
                let result = backend.sheet_service.update_program(
                    today,
                    UpdateProgramCommand {
                        program: program.clone(),
                        monthly,
                        enrolled,
                        here,
                        gone,
                    },
                )?;
                print_notice(result.notice.as_deref());
                let data = result.state.program(&program);
                println!(
                    "{}: monthly ($) {}  enrolled {}  here/gone {}/{}",
                    program,
                    or_zero(&data.monthly),
                    or_zero(&data.enrolled),
                    or_zero(&data.here),
                    or_zero(&data.gone)
                );
                Ok(())
            }
        },
        Command::Roll => {
            let result = backend.sheet_service.roll_forward(today)?;
            println!("{}", result.notice);
            println!("Base date is now {}", result.state.base_date);
            Ok(())
        }
        Command::Reset { force } => {
            if !force {
                return Err(CliError::ResetNotConfirmed.into());
            }
            let result = backend.sheet_service.reset(today)?;
            println!("Sheet reset for {}", result.state.base_date);
            Ok(())
        }
        Command::Export { output } => {
            let loaded = backend.sheet_service.load_sheet(today)?;
            print_notice(loaded.notice.as_deref());
            let result =
                backend
                    .export_service
                    .export_to_path(&loaded.state, today, output.as_deref())?;
            println!("Exported to {}", result.file_path.display());
            Ok(())
        }
    }
}

/// Report a rollover applied while opening the sheet, ahead of the
/// command's own output.
fn print_notice(notice: Option<&str>) {
    if let Some(notice) = notice {
        println!("{notice}");
    }
}

fn goal_line(text: &str) -> String {
    if text.is_empty() {
        "Not set".to_string()
    } else {
        format!("${text}")
    }
}

fn or_zero(text: &str) -> &str {
    if text.is_empty() {
        "0"
    } else {
        text
    }
}
