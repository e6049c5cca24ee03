//! Ledger tokenizing and aggregation.
//!
//! A ledger is newline-separated text. Only newlines around the whole text
//! are trimmed: a blank line in the middle, or an empty ledger, reaches the
//! extractor as a line with no fields and fails there.

use crate::decimal::Amount;
use crate::error::Result;
use crate::record::{
    extract_due_value, extract_entry_value, extract_formatted_entry_value, format_entry,
};
use log::debug;

/// Splits ledger text into lines.
pub fn lines(data: &str) -> impl Iterator<Item = &str> {
    data.trim_matches('\n').split('\n')
}

/// Splits a ledger line into whitespace-separated fields.
pub fn fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Sums the value `extractor` reads from every line.
///
/// Stops at the first line the extractor rejects; no partial sum is ever
/// returned.
pub fn sum_values<F>(data: &str, extractor: F) -> Result<Amount>
where
    F: Fn(&[&str]) -> Result<Amount>,
{
    let mut total = Amount::ZERO;

    for (line_idx, line) in lines(data).enumerate() {
        let value = extractor(&fields(line))?;
        debug!("Line {}: {}", line_idx + 1, value);
        total = total.checked_add(value)?;
    }

    Ok(total)
}

/// Monthly balance of a dues ledger.
///
/// # Examples
///
/// ```
/// let balance = kakebo::calc_balance("-120 y foo\n-34.5 m bar\n-6 M baz\n789 Y xyzzy\n").unwrap();
/// assert_eq!(balance.money(), "15.25");
/// ```
pub fn calc_balance(due_data: &str) -> Result<Amount> {
    sum_values(due_data, extract_due_value)
}

/// Total of a formatted (`Description\tamount`) entries ledger.
pub fn calc_month(month_data: &str) -> Result<Amount> {
    sum_values(month_data, extract_formatted_entry_value)
}

/// Total of a raw (`amount description`) entries ledger.
pub fn calc_entries(entry_data: &str) -> Result<Amount> {
    sum_values(entry_data, extract_entry_value)
}

/// Formats every line of a raw entries ledger.
///
/// # Examples
///
/// ```
/// let formatted = kakebo::format_entries("1,2 foo\n3,45 bar\n").unwrap();
/// assert_eq!(formatted, "Foo\t1.20\nBar\t3.45\n");
/// ```
pub fn format_entries(entry_data: &str) -> Result<String> {
    lines(entry_data)
        .map(|line| format_entry(&fields(line)))
        .collect()
}
