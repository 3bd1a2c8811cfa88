//! Rollover state machine for the three-day window.
//!
//! The sheet tracks goals for Today / Tomorrow / Next Day anchored to a
//! base date. When the sheet is opened after one or more calendar days
//! have passed, the window slides forward so the columns line up with
//! the real calendar again. The transition is applied once per open,
//! never repeatedly.

use chrono::NaiveDate;
use shared::FinancialState;
use std::mem;

/// Notice shown after a manual one-day advance.
pub const MANUAL_ROLL_NOTICE: &str = "Rolled forward! Tomorrow is now Today.";

/// Which transition an automatic rollover applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollTransition {
    /// The window already matched the calendar.
    None,
    /// One day passed: Tomorrow became Today.
    OneDay,
    /// Two days passed: Next Day became Today.
    TwoDays,
    /// Three or more days passed: all day columns were cleared.
    FreshStart,
}

impl RollTransition {
    /// Human-readable notice describing the transition, if one occurred.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            RollTransition::None => None,
            RollTransition::OneDay => Some("Rolled forward! Yesterday's Tomorrow is now Today."),
            RollTransition::TwoDays => Some("Rolled forward 2 days. Next Day goals are now Today."),
            RollTransition::FreshStart => Some("Fresh start! Goals cleared — it's been 3+ days."),
        }
    }
}

/// Whole calendar days from `from` to `to`, negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Slide the window forward to match the calendar.
///
/// Day cells shift by the number of elapsed days; after three or more
/// days the whole window is considered stale and every day column is
/// cleared. Goals, streams, programs, and program tracking are never
/// touched. The base date is re-anchored to `today` whenever any
/// transition fires; with zero or negative elapsed days the state is
/// left completely unchanged.
pub fn auto_roll(state: &mut FinancialState, today: NaiveDate) -> RollTransition {
    let elapsed = days_between(state.base_date, today);
    if elapsed <= 0 {
        return RollTransition::None;
    }

    let transition = if elapsed >= 3 {
        state.today.clear();
        state.tomorrow.clear();
        state.next_day.clear();
        RollTransition::FreshStart
    } else if elapsed == 2 {
        state.today = mem::take(&mut state.next_day);
        state.tomorrow.clear();
        RollTransition::TwoDays
    } else {
        state.today = mem::take(&mut state.tomorrow);
        state.tomorrow = mem::take(&mut state.next_day);
        RollTransition::OneDay
    };

    state.base_date = today;
    transition
}

/// Advance the window exactly one day, regardless of the calendar.
///
/// Unlike [`auto_roll`] this moves the base date forward by one day
/// rather than snapping it to the wall clock, so repeated manual rolls
/// keep stepping the window into the future.
pub fn manual_roll(state: &mut FinancialState) {
    state.today = mem::take(&mut state.tomorrow);
    state.tomorrow = mem::take(&mut state.next_day);
    if let Some(next) = state.base_date.succ_opt() {
        state.base_date = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sheet_with_window(base: NaiveDate) -> FinancialState {
        let mut state = FinancialState::first_run(base);
        state.daily_goal = "2,000".to_string();
        state.month_goal = "45,000".to_string();
        state.completed_by = "Pat".to_string();
        state
            .today
            .insert("Enrollments".to_string(), "(400)".to_string());
        state
            .tomorrow
            .insert("Enrollments".to_string(), "2 new (398)".to_string());
        state
            .next_day
            .insert("Seminars".to_string(), "500".to_string());
        state
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(date(2024, 3, 15), date(2024, 3, 15)), 0);
        assert_eq!(days_between(date(2024, 3, 15), date(2024, 3, 16)), 1);
        assert_eq!(days_between(date(2024, 3, 15), date(2024, 3, 18)), 3);
        assert_eq!(days_between(date(2024, 3, 15), date(2024, 3, 14)), -1);
        // Across a month boundary and a leap day.
        assert_eq!(days_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
    }

    #[test]
    fn test_same_day_is_a_no_op() {
        let base = date(2024, 3, 15);
        let mut state = sheet_with_window(base);
        let untouched = state.clone();

        assert_eq!(auto_roll(&mut state, base), RollTransition::None);
        assert_eq!(state, untouched);
    }

    #[test]
    fn test_earlier_date_is_a_no_op() {
        let base = date(2024, 3, 15);
        let mut state = sheet_with_window(base);
        let untouched = state.clone();

        assert_eq!(auto_roll(&mut state, date(2024, 3, 10)), RollTransition::None);
        assert_eq!(state, untouched);
        assert_eq!(state.base_date, base);
    }

    #[test]
    fn test_one_day_shifts_window() {
        let base = date(2024, 3, 15);
        let mut state = sheet_with_window(base);

        let transition = auto_roll(&mut state, date(2024, 3, 16));

        assert_eq!(transition, RollTransition::OneDay);
        assert_eq!(state.today.get("Enrollments").unwrap(), "2 new (398)");
        assert_eq!(state.tomorrow.get("Seminars").unwrap(), "500");
        assert!(state.next_day.is_empty());
        assert_eq!(state.base_date, date(2024, 3, 16));
    }

    #[test]
    fn test_two_days_promotes_next_day() {
        let base = date(2024, 3, 15);
        let mut state = sheet_with_window(base);

        let transition = auto_roll(&mut state, date(2024, 3, 17));

        assert_eq!(transition, RollTransition::TwoDays);
        assert_eq!(state.today.get("Seminars").unwrap(), "500");
        assert!(state.tomorrow.is_empty());
        assert!(state.next_day.is_empty());
        assert_eq!(state.base_date, date(2024, 3, 17));
    }

    #[test]
    fn test_three_days_clears_the_window() {
        let base = date(2024, 3, 15);
        let mut state = sheet_with_window(base);

        let transition = auto_roll(&mut state, date(2024, 3, 18));

        assert_eq!(transition, RollTransition::FreshStart);
        assert!(state.today.is_empty());
        assert!(state.tomorrow.is_empty());
        assert!(state.next_day.is_empty());
        // Everything outside the day columns survives.
        assert_eq!(state.daily_goal, "2,000");
        assert_eq!(state.month_goal, "45,000");
        assert_eq!(state.completed_by, "Pat");
        assert_eq!(state.streams.len(), 10);
        assert_eq!(state.programs.len(), 2);
        assert_eq!(state.base_date, date(2024, 3, 18));
    }

    #[test]
    fn test_week_gap_also_clears() {
        let mut state = sheet_with_window(date(2024, 3, 15));
        assert_eq!(
            auto_roll(&mut state, date(2024, 3, 29)),
            RollTransition::FreshStart
        );
        assert!(state.today.is_empty());
    }

    #[test]
    fn test_two_single_day_rolls_match_one_double_roll() {
        let base = date(2024, 3, 15);

        let mut stepped = sheet_with_window(base);
        auto_roll(&mut stepped, date(2024, 3, 16));
        auto_roll(&mut stepped, date(2024, 3, 17));

        let mut jumped = sheet_with_window(base);
        auto_roll(&mut jumped, date(2024, 3, 17));

        assert_eq!(stepped, jumped);
    }

    #[test]
    fn test_manual_roll_steps_base_date_not_clock() {
        let base = date(2024, 3, 15);
        let mut state = sheet_with_window(base);

        manual_roll(&mut state);

        assert_eq!(state.today.get("Enrollments").unwrap(), "2 new (398)");
        assert_eq!(state.tomorrow.get("Seminars").unwrap(), "500");
        assert!(state.next_day.is_empty());
        assert_eq!(state.base_date, date(2024, 3, 16));

        manual_roll(&mut state);
        assert_eq!(state.today.get("Seminars").unwrap(), "500");
        assert_eq!(state.base_date, date(2024, 3, 17));
    }

    #[test]
    fn test_transition_notices() {
        assert_eq!(RollTransition::None.notice(), None);
        assert_eq!(
            RollTransition::OneDay.notice(),
            Some("Rolled forward! Yesterday's Tomorrow is now Today.")
        );
        assert_eq!(
            RollTransition::TwoDays.notice(),
            Some("Rolled forward 2 days. Next Day goals are now Today.")
        );
        assert_eq!(
            RollTransition::FreshStart.notice(),
            Some("Fresh start! Goals cleared — it's been 3+ days.")
        );
        assert_eq!(MANUAL_ROLL_NOTICE, "Rolled forward! Tomorrow is now Today.");
    }
}
