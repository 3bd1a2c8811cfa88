use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Revenue streams seeded into a brand-new sheet.
pub const DEFAULT_STREAMS: [&str; 10] = [
    "Enrollments",
    "Upgrades",
    "Post-dates",
    "Seminars",
    "Equipment",
    "Promotions / BB Test",
    "T-Shirts / Hoodies",
    "Kickboxing",
    "Online Reg.",
    "Krav Maga",
];

/// Program categories seeded into a brand-new sheet.
pub const DEFAULT_PROGRAMS: [&str; 2] = ["Martial Arts", "Kickboxing"];

/// One of the three rolling day columns on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DaySlot {
    Today,
    Tomorrow,
    NextDay,
}

impl DaySlot {
    /// All slots in window order, oldest first.
    pub const ALL: [DaySlot; 3] = [DaySlot::Today, DaySlot::Tomorrow, DaySlot::NextDay];

    /// Column heading used in reports and terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            DaySlot::Today => "Today",
            DaySlot::Tomorrow => "Tomorrow",
            DaySlot::NextDay => "Next Day",
        }
    }

    /// Parse a user-supplied slot name (e.g. "today", "next-day").
    pub fn parse(input: &str) -> Option<DaySlot> {
        match input.trim().to_lowercase().as_str() {
            "today" => Some(DaySlot::Today),
            "tomorrow" => Some(DaySlot::Tomorrow),
            "next" | "nextday" | "next-day" | "next_day" => Some(DaySlot::NextDay),
            _ => None,
        }
    }
}

impl fmt::Display for DaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Monthly tracking fields for a single program category.
///
/// All fields hold raw user text; nothing is parsed until a report or
/// total needs a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgramData {
    /// Monthly dollar figure for the program.
    pub monthly: String,
    /// Current enrollment count.
    pub enrolled: String,
    /// Members who showed up ("here" side of Here/Gone).
    pub here: String,
    /// Members who dropped ("gone" side of Here/Gone).
    pub gone: String,
}

/// The entire persisted sheet: goals, a three-day rolling window of
/// per-stream cells, and monthly program tracking.
///
/// Serializes with camelCase keys so documents written by earlier
/// versions of the sheet stay readable. Missing fields fall back to
/// defaults on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialState {
    /// Free-text daily revenue target (may contain symbols, not strictly numeric).
    pub daily_goal: String,
    /// Free-text monthly revenue target.
    pub month_goal: String,
    /// Ordered revenue stream names, no duplicates.
    pub streams: Vec<String>,
    /// Ordered program category names, no duplicates.
    pub programs: Vec<String>,
    /// Stream name -> raw cell text for the "Today" column.
    pub today: BTreeMap<String, String>,
    /// Stream name -> raw cell text for the "Tomorrow" column.
    pub tomorrow: BTreeMap<String, String>,
    /// Stream name -> raw cell text for the "Next Day" column.
    pub next_day: BTreeMap<String, String>,
    /// Program name -> monthly tracking fields. Only holds entries for
    /// programs that have been edited.
    pub program_data: BTreeMap<String, ProgramData>,
    /// Calendar date the "Today" column was last anchored to (ISO 8601).
    pub base_date: NaiveDate,
    pub completed_by: String,
}

impl Default for FinancialState {
    fn default() -> Self {
        Self {
            daily_goal: String::new(),
            month_goal: String::new(),
            streams: default_streams(),
            programs: default_programs(),
            today: BTreeMap::new(),
            tomorrow: BTreeMap::new(),
            next_day: BTreeMap::new(),
            program_data: BTreeMap::new(),
            base_date: NaiveDate::default(),
            completed_by: String::new(),
        }
    }
}

impl FinancialState {
    /// Fresh sheet anchored to the given date, with the default streams
    /// and programs seeded in.
    pub fn first_run(today: NaiveDate) -> Self {
        Self {
            base_date: today,
            ..Self::default()
        }
    }

    /// Cell values for one day column.
    pub fn day(&self, slot: DaySlot) -> &BTreeMap<String, String> {
        match slot {
            DaySlot::Today => &self.today,
            DaySlot::Tomorrow => &self.tomorrow,
            DaySlot::NextDay => &self.next_day,
        }
    }

    /// Mutable cell values for one day column.
    pub fn day_mut(&mut self, slot: DaySlot) -> &mut BTreeMap<String, String> {
        match slot {
            DaySlot::Today => &mut self.today,
            DaySlot::Tomorrow => &mut self.tomorrow,
            DaySlot::NextDay => &mut self.next_day,
        }
    }

    /// Raw cell text for one stream in one day column, empty when unset.
    pub fn cell(&self, slot: DaySlot, stream: &str) -> &str {
        self.day(slot).get(stream).map(String::as_str).unwrap_or("")
    }

    /// Tracking fields for one program, defaults when never edited.
    pub fn program(&self, name: &str) -> ProgramData {
        self.program_data.get(name).cloned().unwrap_or_default()
    }
}

pub fn default_streams() -> Vec<String> {
    DEFAULT_STREAMS.iter().map(|s| s.to_string()).collect()
}

pub fn default_programs() -> Vec<String> {
    DEFAULT_PROGRAMS.iter().map(|s| s.to_string()).collect()
}

/// Parsed dollar totals for the three rolling day columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DayTotals {
    pub today: f64,
    pub tomorrow: f64,
    pub next_day: f64,
}

impl DayTotals {
    pub fn get(&self, slot: DaySlot) -> f64 {
        match slot {
            DaySlot::Today => self.today,
            DaySlot::Tomorrow => self.tomorrow,
            DaySlot::NextDay => self.next_day,
        }
    }

    /// Combined total across the whole three-day window.
    pub fn window_total(&self) -> f64 {
        self.today + self.tomorrow + self.next_day
    }
}

/// How today's parsed total stacks up against the daily goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// Dollar amount extracted from the daily goal text (0 if unset).
    pub goal_amount: f64,
    /// Sum of amounts extracted from today's stream cells.
    pub today_total: f64,
    /// Progress toward the goal, capped at 100; 0 when no goal is set.
    pub percent: u8,
}
