//! Plain-text export of the sheet.
//!
//! This module renders the whole sheet as a fixed-width text report
//! and handles writing it to disk, including resolution of the target
//! path from raw user input.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;

use shared::{DaySlot, FinancialState};

use crate::domain::commands::export::ExportResult;
use crate::domain::{money, totals};

/// Width of the `=`/`-` rule lines in the report.
const RULE_WIDTH: usize = 65;
/// Stream name column width in the revenue table.
const STREAM_COL: usize = 24;
/// Width of the Today and Tomorrow columns; Next Day is unpadded.
const DAY_COL: usize = 16;
/// Category column width in the program table.
const CATEGORY_COL: usize = 20;
const MONTHLY_COL: usize = 14;
const ENROLLED_COL: usize = 12;

/// Default export filename for a given date, e.g.
/// `daily-web-financials-2024-03-15.txt`.
pub fn default_filename(today: NaiveDate) -> String {
    format!("daily-web-financials-{}.txt", today.format("%Y-%m-%d"))
}

/// Service that renders and writes the text report.
#[derive(Clone)]
pub struct ExportService {
    // No internal state needed for now
}

impl ExportService {
    pub fn new() -> Self {
        Self {}
    }

    /// Render the full sheet as the fixed-width text report.
    ///
    /// Empty stream cells render as `-`; empty program fields render
    /// as `0`. Goal text gets a `$` prefixed verbatim, so users who
    /// typed their own dollar sign see it doubled in the export just
    /// like they do on screen.
    pub fn render_report(&self, state: &FinancialState, today: NaiveDate) -> String {
        let totals = totals::all_totals(state);

        let mut lines: Vec<String> = vec![
            "DAILY WEB / FINANCIALS".to_string(),
            format!("Date: {}", today.format("%A, %B %-d, %Y")),
            format!(
                "Completed By: {}",
                non_empty(&state.completed_by, "Not specified")
            ),
            format!("Daily Goal: {}", goal_text(&state.daily_goal)),
            format!("Month Goal: {}", goal_text(&state.month_goal)),
            "=".repeat(RULE_WIDTH),
            String::new(),
            "REVENUE STREAMS — Rolling 3-Day Goals".to_string(),
            "-".repeat(RULE_WIDTH),
            format!(
                "{} {} {} Next Day",
                pad("Stream", STREAM_COL),
                pad("Today", DAY_COL),
                pad("Tomorrow", DAY_COL)
            ),
            "-".repeat(RULE_WIDTH),
        ];

        for stream in &state.streams {
            lines.push(format!(
                "{} {} {} {}",
                pad(stream, STREAM_COL),
                pad(non_empty(state.cell(DaySlot::Today, stream), "-"), DAY_COL),
                pad(
                    non_empty(state.cell(DaySlot::Tomorrow, stream), "-"),
                    DAY_COL
                ),
                non_empty(state.cell(DaySlot::NextDay, stream), "-")
            ));
        }

        lines.push("-".repeat(RULE_WIDTH));
        lines.push(format!(
            "{} {} {} {}",
            pad("TOTAL", STREAM_COL),
            pad(&money::format_currency(totals.today), DAY_COL),
            pad(&money::format_currency(totals.tomorrow), DAY_COL),
            money::format_currency(totals.next_day)
        ));
        lines.push(String::new());
        lines.push(format!(
            "3-Day Total: {}",
            money::format_currency(totals.window_total())
        ));
        lines.push(String::new());

        if !state.programs.is_empty() {
            lines.push("PROGRAM TRACKING".to_string());
            lines.push("-".repeat(RULE_WIDTH));
            lines.push(format!(
                "{} {} {} Here/Gone",
                pad("Category", CATEGORY_COL),
                pad("Monthly ($)", MONTHLY_COL),
                pad("Enrolled", ENROLLED_COL)
            ));
            lines.push("-".repeat(RULE_WIDTH));
            for program in &state.programs {
                let data = state.program(program);
                lines.push(format!(
                    "{} {} {} {}/{}",
                    pad(program, CATEGORY_COL),
                    pad(non_empty(&data.monthly, "0"), MONTHLY_COL),
                    pad(non_empty(&data.enrolled, "0"), ENROLLED_COL),
                    non_empty(&data.here, "0"),
                    non_empty(&data.gone, "0")
                ));
            }
        }

        lines.push(String::new());
        lines.push("Daily Web/Financials by Total Success AI".to_string());
        lines.push("Part of The Master's Edge Business Program".to_string());

        lines.join("\n")
    }

    /// Render the report and write it to disk.
    ///
    /// A custom path naming an existing directory gets the default
    /// filename appended; any other custom path is used as the file
    /// path itself. With no custom path the report goes to the
    /// Documents folder (or the home directory as a fallback).
    pub fn export_to_path(
        &self,
        state: &FinancialState,
        today: NaiveDate,
        custom_path: Option<&str>,
    ) -> Result<ExportResult> {
        // Step 1: Render the report body.
        let report = self.render_report(state, today);

        // Step 2: Resolve where the file should go.
        let file_path = match custom_path {
            Some(raw) if !raw.trim().is_empty() => {
                let cleaned = PathBuf::from(self.sanitize_path(raw));
                if cleaned.is_dir() {
                    cleaned.join(default_filename(today))
                } else {
                    cleaned
                }
            }
            _ => dirs::document_dir()
                .or_else(dirs::home_dir)
                .context("could not determine an export directory")?
                .join(default_filename(today)),
        };

        // Step 3: Make sure the target directory exists.
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create export directory {}", parent.display())
            })?;
        }

        // Step 4: Write the file.
        fs::write(&file_path, &report)
            .with_context(|| format!("failed to write export file {}", file_path.display()))?;

        info!("Exported sheet to {}", file_path.display());

        Ok(ExportResult { file_path, report })
    }

    /// Clean up a user-supplied path: surrounding quotes, escaped
    /// spaces, trailing separators, and a leading tilde.
    fn sanitize_path(&self, path: &str) -> String {
        let mut cleaned = path.trim().to_string();

        if cleaned.len() >= 2
            && ((cleaned.starts_with('"') && cleaned.ends_with('"'))
                || (cleaned.starts_with('\'') && cleaned.ends_with('\'')))
        {
            cleaned = cleaned[1..cleaned.len() - 1].trim().to_string();
        }

        cleaned = cleaned.replace("\\ ", " ");

        while cleaned.ends_with('/') || cleaned.ends_with('\\') {
            cleaned.pop();
        }

        if cleaned.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                if cleaned == "~" {
                    cleaned = home.to_string_lossy().to_string();
                } else if cleaned.starts_with("~/") || cleaned.starts_with("~\\") {
                    cleaned = home.join(&cleaned[2..]).to_string_lossy().to_string();
                }
            }
        }

        cleaned
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

fn non_empty<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.is_empty() {
        fallback
    } else {
        text
    }
}

fn goal_text(goal: &str) -> String {
    if goal.is_empty() {
        "Not set".to_string()
    } else {
        format!("${goal}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_state() -> FinancialState {
        let mut state = FinancialState::first_run(date(2024, 3, 15));
        state.daily_goal = "1,500".to_string();
        state.completed_by = "Pat".to_string();
        state
            .today
            .insert("Enrollments".to_string(), "2 new (398)".to_string());
        state
            .tomorrow
            .insert("Seminars".to_string(), "500".to_string());
        state
    }

    #[test]
    fn test_report_header_lines() {
        let service = ExportService::new();
        let report = service.render_report(&sample_state(), date(2024, 3, 15));
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "DAILY WEB / FINANCIALS");
        assert_eq!(lines[1], "Date: Friday, March 15, 2024");
        assert_eq!(lines[2], "Completed By: Pat");
        assert_eq!(lines[3], "Daily Goal: $1,500");
        assert_eq!(lines[4], "Month Goal: Not set");
        assert_eq!(lines[5], "=".repeat(65));
    }

    #[test]
    fn test_goal_dollar_sign_is_prefixed_verbatim() {
        let service = ExportService::new();
        let mut state = sample_state();
        state.daily_goal = "$1,500".to_string();

        let report = service.render_report(&state, date(2024, 3, 15));
        assert!(report.contains("Daily Goal: $$1,500"));
    }

    #[test]
    fn test_stream_rows_line_up() {
        let service = ExportService::new();
        let report = service.render_report(&sample_state(), date(2024, 3, 15));

        let header = report
            .lines()
            .find(|l| l.starts_with("Stream"))
            .unwrap();
        assert_eq!(
            header,
            format!("{:<24} {:<16} {:<16} Next Day", "Stream", "Today", "Tomorrow")
        );

        let row = report
            .lines()
            .find(|l| l.starts_with("Enrollments"))
            .unwrap();
        assert_eq!(
            row,
            format!("{:<24} {:<16} {:<16} {}", "Enrollments", "2 new (398)", "-", "-")
        );

        let row = report.lines().find(|l| l.starts_with("Seminars")).unwrap();
        assert_eq!(
            row,
            format!("{:<24} {:<16} {:<16} {}", "Seminars", "-", "500", "-")
        );
    }

    #[test]
    fn test_totals_and_three_day_summary() {
        let service = ExportService::new();
        let report = service.render_report(&sample_state(), date(2024, 3, 15));

        let total_row = report.lines().find(|l| l.starts_with("TOTAL")).unwrap();
        assert_eq!(
            total_row,
            format!("{:<24} {:<16} {:<16} {}", "TOTAL", "$398", "$500", "$0")
        );
        assert!(report.contains("3-Day Total: $898"));
    }

    #[test]
    fn test_program_rows_fall_back_to_zero() {
        let service = ExportService::new();
        let mut state = sample_state();
        state.program_data.insert(
            "Kickboxing".to_string(),
            shared::ProgramData {
                monthly: "4,200".to_string(),
                enrolled: "31".to_string(),
                here: "28".to_string(),
                gone: "3".to_string(),
            },
        );

        let report = service.render_report(&state, date(2024, 3, 15));
        assert!(report.contains("PROGRAM TRACKING"));

        let row = report
            .lines()
            .find(|l| l.starts_with("Martial Arts"))
            .unwrap();
        assert_eq!(
            row,
            format!("{:<20} {:<14} {:<12} {}/{}", "Martial Arts", "0", "0", "0", "0")
        );

        let row = report.lines().find(|l| l.starts_with("Kickboxing")).unwrap();
        assert_eq!(
            row,
            format!("{:<20} {:<14} {:<12} {}/{}", "Kickboxing", "4,200", "31", "28", "3")
        );
    }

    #[test]
    fn test_program_block_omitted_when_no_programs() {
        let service = ExportService::new();
        let mut state = sample_state();
        state.programs.clear();

        let report = service.render_report(&state, date(2024, 3, 15));
        assert!(!report.contains("PROGRAM TRACKING"));
        // Both spacer lines are still emitted.
        assert!(report.contains("\n\n\nDaily Web/Financials by Total Success AI"));
    }

    #[test]
    fn test_report_has_no_trailing_newline() {
        let service = ExportService::new();
        let report = service.render_report(&sample_state(), date(2024, 3, 15));
        assert!(report.ends_with("Part of The Master's Edge Business Program"));
    }

    #[test]
    fn test_default_filename_uses_iso_date() {
        assert_eq!(
            default_filename(date(2024, 3, 15)),
            "daily-web-financials-2024-03-15.txt"
        );
    }

    #[test]
    fn test_export_to_directory_appends_default_filename() {
        let dir = TempDir::new().unwrap();
        let service = ExportService::new();
        let state = sample_state();

        let result = service
            .export_to_path(&state, date(2024, 3, 15), Some(dir.path().to_str().unwrap()))
            .unwrap();

        assert_eq!(
            result.file_path,
            dir.path().join("daily-web-financials-2024-03-15.txt")
        );
        let written = fs::read_to_string(&result.file_path).unwrap();
        assert_eq!(written, result.report);
        assert!(written.starts_with("DAILY WEB / FINANCIALS"));
    }

    #[test]
    fn test_export_to_file_path_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("reports").join("march").join("sheet.txt");
        let service = ExportService::new();
        let state = sample_state();

        let result = service
            .export_to_path(&state, date(2024, 3, 15), Some(target.to_str().unwrap()))
            .unwrap();

        assert_eq!(result.file_path, target);
        assert!(target.exists());
    }

    #[test]
    fn test_sanitize_path() {
        let service = ExportService::new();

        assert_eq!(service.sanitize_path("  /path/to/dir  "), "/path/to/dir");
        assert_eq!(service.sanitize_path("\"/path/to/dir\""), "/path/to/dir");
        assert_eq!(service.sanitize_path("'/path/to/dir'"), "/path/to/dir");
        assert_eq!(service.sanitize_path("/path\\ to\\ dir"), "/path to dir");
        assert_eq!(service.sanitize_path("/path/to/dir/"), "/path/to/dir");

        let home = dirs::home_dir().unwrap();
        assert_eq!(
            service.sanitize_path("~/exports"),
            home.join("exports").to_string_lossy().to_string()
        );
    }
}
