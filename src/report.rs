//! Human-readable reports.
//!
//! Reports are blocks of `Label\tValue` lines separated by blank lines.
//! Decimal points become commas as the last rendering step, exactly once.

use crate::decimal::Amount;
use crate::error::{KakeboError, Result};
use crate::ledger::{fields, lines};
use crate::record::Due;
use chrono::{Datelike, NaiveDate};
use log::warn;

/// Text returned by [`display_dues`] when any line of the ledger is malformed.
pub const INVALID_DUES: &str = "invalid dues";

/// Renders a month of formatted entries with its total.
///
/// ```text
/// November 2009
///
/// Foo	1,20
/// Bar	3,45
///
/// Tot	4,65
/// ```
pub fn display_month(date: NaiveDate, month_data: &str, month_total: Amount) -> String {
    let blocks = [
        format!("{}\n", date.format("%B %Y")),
        month_data.to_string(),
        format!("Tot\t{}\n", month_total.money()),
    ];

    localize(&blocks.join("\n"))
}

/// Renders the budgeting statistics for `date`.
///
/// The save goal is `save_percentage` percent of `balance`; what is left is
/// the monthly budget, spread evenly over the days of the month. Fails with
/// `NonPositiveBudget` when nothing is left to spend.
pub fn display_stats(
    date: NaiveDate,
    balance: Amount,
    month_total: Amount,
    save_percentage: u32,
) -> Result<String> {
    let hundred = Amount::HUNDRED;
    let save_percent = Amount::from(i64::from(save_percentage));
    let today = Amount::from(i64::from(date.day()));
    let month_days = Amount::from(i64::from(days_in_month(date)));

    let save_goal = balance.checked_div(hundred)?.checked_mul(save_percent)?;
    let monthly_budget = balance.checked_sub(save_goal)?;
    if !monthly_budget.is_positive() {
        return Err(KakeboError::NonPositiveBudget {
            budget: monthly_budget,
        });
    }

    let daily_budget = monthly_budget.div_round(month_days, 2)?;
    let end_of_month = hundred.checked_mul(today)?.div_round(month_days, 0)?;
    let amount_spent = hundred
        .checked_mul(month_total)?
        .div_round(monthly_budget, 0)?;

    let body = [
        ("Save goal", save_goal.money()),
        ("Monthly budget", monthly_budget.money()),
        ("Daily budget", daily_budget.money()),
    ];
    let footer = [
        ("End of month", end_of_month.percentage()),
        ("Amount spent", amount_spent.percentage()),
    ];

    let blocks = [
        format!("{}\n", date.format("%-d %B %Y")),
        format_stats(&body),
        format_stats(&footer),
    ];

    Ok(localize(&blocks.join("\n")))
}

/// Lists the dues owed each month, largest first.
///
/// Incoming money is left out. Dues with the same amount keep their ledger
/// order. Any malformed line turns the whole listing into [`INVALID_DUES`].
pub fn display_dues(due_data: &str) -> String {
    let dues = match owed_dues(due_data) {
        Ok(dues) => dues,
        Err(e) => {
            warn!("Rejecting dues ledger: {}", e);
            return INVALID_DUES.to_string();
        }
    };

    let text: String = dues
        .iter()
        .map(|due| format!("{}\t{}\n", due.description, due.amount.money()))
        .collect();

    localize(&text)
}

fn owed_dues(due_data: &str) -> Result<Vec<Due>> {
    let mut dues = Vec::new();

    for line in lines(due_data) {
        if let Some(due) = Due::from_fields(&fields(line))? {
            dues.push(due);
        }
    }

    // stable: equal amounts stay in ledger order
    dues.sort_by(|a, b| b.amount.cmp(&a.amount));

    Ok(dues)
}

/// Number of days in `date`'s month, taken from the month's last day.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map_or(31, |last| last.day())
}

fn format_stats(rows: &[(&str, String)]) -> String {
    rows.iter()
        .map(|(label, value)| format!("{}\t{}\n", label, value))
        .collect()
}

/// Switches decimal points to commas for display.
pub fn localize(text: &str) -> String {
    text.replace('.', ",")
}
