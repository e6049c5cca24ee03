//! # Kakebo
//!
//! A plain-text budgeting calculator following the kakebo method. It reads
//! ledgers of recurring dues and monthly spending entries, totals them, and
//! renders monthly and statistical reports.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: amounts are `rust_decimal` values, never floats
//! - **Fail fast**: the first malformed ledger line aborts the whole call
//! - **Stable messages**: error texts are part of the public contract
//! - **Comma display**: reports swap `.` for `,`; numeric results keep `.`
//!
//! ## Ledgers
//!
//! ```text
//! dues                 raw entries       formatted entries
//! -120 y insurance     1,2 coffee        Coffee	1.20
//! -34.5 m rent         3.45 bread        Bread	3.45
//! 1200 M salary
//! ```
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use kakebo::{calc_month, display_month, format_entries};
//!
//! let month_data = format_entries("1,2 foo\n3,45 bar\n").unwrap();
//! let total = calc_month(&month_data).unwrap();
//! let date = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
//!
//! assert_eq!(
//!     display_month(date, &month_data, total),
//!     "January 2020\n\nFoo\t1,20\nBar\t3,45\n\nTot\t4,65\n"
//! );
//! ```

pub mod cli;
pub mod decimal;
pub mod error;
pub mod ledger;
pub mod record;
pub mod report;

pub use decimal::Amount;
pub use error::{KakeboError, Result};
pub use ledger::{calc_balance, calc_entries, calc_month, format_entries, sum_values};
pub use record::{Due, Interval};
pub use report::{display_dues, display_month, display_stats, localize, INVALID_DUES};
