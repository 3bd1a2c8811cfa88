//! Derived totals and goal progress.
//!
//! Raw cell text is the source of truth; everything here is a pure
//! projection over it using the extraction rules in
//! [`money`](crate::domain::money).

use shared::{DaySlot, DayTotals, FinancialState, GoalProgress};

use crate::domain::money;

/// Sum of extracted amounts over the configured streams for one day
/// column. Missing cells count as 0, and cells left behind by removed
/// streams are not counted.
pub fn day_total(state: &FinancialState, slot: DaySlot) -> f64 {
    state
        .streams
        .iter()
        .map(|stream| money::extract_amount(state.cell(slot, stream)))
        .sum()
}

/// Totals for all three day columns.
pub fn all_totals(state: &FinancialState) -> DayTotals {
    DayTotals {
        today: day_total(state, DaySlot::Today),
        tomorrow: day_total(state, DaySlot::Tomorrow),
        next_day: day_total(state, DaySlot::NextDay),
    }
}

/// Today's total measured against the daily goal.
///
/// The percentage is capped at 100 and defined as 0 when the goal text
/// does not yield a positive amount.
pub fn goal_progress(state: &FinancialState, totals: &DayTotals) -> GoalProgress {
    let goal_amount = money::extract_amount(&state.daily_goal);
    let percent = if goal_amount > 0.0 {
        ((totals.today / goal_amount) * 100.0)
            .min(100.0)
            .round()
            .max(0.0) as u8
    } else {
        0
    };
    GoalProgress {
        goal_amount,
        today_total: totals.today,
        percent,
    }
}
