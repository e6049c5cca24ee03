//! Record shapes of the dues and entries ledgers.
//!
//! Each extractor reads the whitespace-separated fields of one ledger line.
//! Checks run in a fixed order: field count, amount, then interval.

use crate::decimal::Amount;
use crate::error::{KakeboError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Recurrence of a due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    /// Paid every month; `m` or `M` in a ledger.
    Monthly,

    /// Paid once a year; `y` or `Y` in a ledger.
    Yearly,
}

static INTERVALS: Lazy<HashMap<&'static str, Interval>> = Lazy::new(|| {
    HashMap::from([
        ("m", Interval::Monthly),
        ("M", Interval::Monthly),
        ("y", Interval::Yearly),
        ("Y", Interval::Yearly),
    ])
});

impl Interval {
    /// Looks up an interval code.
    pub fn from_code(code: &str) -> Result<Self> {
        INTERVALS
            .get(code)
            .copied()
            .ok_or_else(|| KakeboError::UnknownInterval {
                code: code.to_string(),
            })
    }

    /// Number of months one occurrence covers.
    pub fn months(self) -> i64 {
        match self {
            Interval::Monthly => 1,
            Interval::Yearly => 12,
        }
    }
}

/// Money owed every month, as listed by the dues report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Due {
    /// Monthly-equivalent amount, always positive.
    pub amount: Amount,

    /// Title-cased description.
    pub description: String,
}

impl Due {
    /// Reads a dues ledger line.
    ///
    /// Returns `None` for incoming money (a zero or positive monthly value).
    pub fn from_fields(fields: &[&str]) -> Result<Option<Due>> {
        let value = extract_due_value(fields)?;
        if !value.is_negative() {
            return Ok(None);
        }

        Ok(Some(Due {
            amount: value.abs(),
            description: title_case(&fields[2..].join(" ")),
        }))
    }
}

fn require_fields(fields: &[&str], required: usize) -> Result<()> {
    if fields.len() < required {
        return Err(KakeboError::InsufficientFields { required });
    }
    Ok(())
}

/// Monthly-equivalent value of a `<amount> <interval> <description>` line.
pub fn extract_due_value(fields: &[&str]) -> Result<Amount> {
    require_fields(fields, 2)?;

    let amount = Amount::parse(fields[0])?;
    let interval = Interval::from_code(fields[1])?;

    amount.checked_div(Amount::from(interval.months()))
}

/// Value of a raw `<amount> <description>` entry line.
pub fn extract_entry_value(fields: &[&str]) -> Result<Amount> {
    require_fields(fields, 1)?;
    Amount::parse(fields[0])
}

/// Value of a formatted `<Description>\t<amount>` entry line.
pub fn extract_formatted_entry_value(fields: &[&str]) -> Result<Amount> {
    require_fields(fields, 2)?;
    Amount::parse(fields[1])
}

/// Formats a raw entry line as `Description\tAmount\n`.
///
/// The amount may use either `.` or `,` as decimal separator and is always
/// written back with `.` and two decimals.
pub fn format_entry(fields: &[&str]) -> Result<String> {
    require_fields(fields, 2)?;

    let amount = Amount::parse_localized(fields[0])?;

    Ok(format!("{}\t{}\n", title_case(fields[1]), amount.money()))
}

/// Upper-cases the first letter of every word.
///
/// Letters, digits, `_` and `'` continue a word; anything else, including
/// non-ASCII symbols, starts a new one.
pub fn title_case(text: &str) -> String {
    let mut titled = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if at_word_start {
            titled.extend(c.to_uppercase());
        } else {
            titled.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_' || c == '\'');
    }

    titled
}
