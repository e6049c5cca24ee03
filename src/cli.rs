//! Command-line arguments and command execution.
//!
//! ```text
//! kakebo <command> [--date YYYY-MM-DD] [--save PERCENT] <ledger>...
//! ```
//!
//! | command   | ledgers          | output                              |
//! |-----------|------------------|-------------------------------------|
//! | `balance` | dues             | monthly balance                     |
//! | `total`   | entries          | sum of the raw entries              |
//! | `format`  | entries          | formatted entries                   |
//! | `month`   | entries          | monthly report                      |
//! | `stats`   | dues, entries    | budgeting statistics                |
//! | `dues`    | dues             | dues owed, largest first            |

use crate::error::{KakeboError, Result};
use crate::ledger::{calc_balance, calc_entries, calc_month, format_entries};
use crate::report::{display_dues, display_month, display_stats};
use chrono::NaiveDate;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Percentage of the balance set aside when `--save` is not given.
pub const DEFAULT_SAVE_PERCENTAGE: u32 = 10;

/// A command with the ledger files it reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Balance { dues: PathBuf },
    Total { entries: PathBuf },
    Format { entries: PathBuf },
    Month { entries: PathBuf },
    Stats { dues: PathBuf, entries: PathBuf },
    Dues { dues: PathBuf },
}

/// Options shared by all commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Day the reports are rendered for.
    pub date: NaiveDate,

    /// Percentage of the balance to save.
    pub save_percentage: u32,
}

impl Config {
    /// Default configuration for reports rendered on `date`.
    pub fn new(date: NaiveDate) -> Self {
        Config {
            date,
            save_percentage: DEFAULT_SAVE_PERCENTAGE,
        }
    }
}

/// Parses the arguments that follow the program name.
///
/// `today` is the date used when `--date` is absent.
pub fn parse_args<I>(args: I, today: NaiveDate) -> Result<(Command, Config)>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let name = args.next().ok_or(KakeboError::MissingArgument)?;

    let mut config = Config::new(today);
    let mut ledgers = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--date" => {
                let value = option_value(&arg, args.next())?;
                config.date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                    .map_err(|_| invalid_option(&arg, &value))?;
            }
            "--save" => {
                let value = option_value(&arg, args.next())?;
                config.save_percentage = value
                    .parse()
                    .map_err(|_| invalid_option(&arg, &value))?;
            }
            _ => ledgers.push(PathBuf::from(arg)),
        }
    }

    let command = Command::from_parts(&name, ledgers)?;
    Ok((command, config))
}

fn option_value(option: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| KakeboError::MissingOptionValue {
        option: option.to_string(),
    })
}

fn invalid_option(option: &str, value: &str) -> KakeboError {
    KakeboError::InvalidOption {
        option: option.to_string(),
        value: value.to_string(),
    }
}

impl Command {
    fn from_parts(name: &str, ledgers: Vec<PathBuf>) -> Result<Self> {
        let wrong_count = |expected: usize| KakeboError::WrongLedgerCount {
            command: name.to_string(),
            expected,
            got: ledgers.len(),
        };

        match (name, ledgers.as_slice()) {
            ("balance", [dues]) => Ok(Command::Balance { dues: dues.clone() }),
            ("total", [entries]) => Ok(Command::Total {
                entries: entries.clone(),
            }),
            ("format", [entries]) => Ok(Command::Format {
                entries: entries.clone(),
            }),
            ("month", [entries]) => Ok(Command::Month {
                entries: entries.clone(),
            }),
            ("stats", [dues, entries]) => Ok(Command::Stats {
                dues: dues.clone(),
                entries: entries.clone(),
            }),
            ("dues", [dues]) => Ok(Command::Dues { dues: dues.clone() }),
            ("balance" | "total" | "format" | "month" | "dues", _) => Err(wrong_count(1)),
            ("stats", _) => Err(wrong_count(2)),
            _ => Err(KakeboError::UnknownCommand {
                name: name.to_string(),
            }),
        }
    }
}

/// Runs a command and returns the text to print.
pub fn execute(command: &Command, config: &Config) -> Result<String> {
    match command {
        Command::Balance { dues } => {
            let balance = calc_balance(&read_ledger(dues)?)?;
            Ok(format!("{}\n", balance.money()))
        }
        Command::Total { entries } => {
            let total = calc_entries(&read_ledger(entries)?)?;
            Ok(format!("{}\n", total.money()))
        }
        Command::Format { entries } => format_entries(&read_ledger(entries)?),
        Command::Month { entries } => {
            let month_data = format_entries(&read_ledger(entries)?)?;
            let month_total = calc_month(&month_data)?;
            Ok(display_month(config.date, &month_data, month_total))
        }
        Command::Stats { dues, entries } => {
            let balance = calc_balance(&read_ledger(dues)?)?;
            let month_total = calc_month(&format_entries(&read_ledger(entries)?)?)?;
            display_stats(config.date, balance, month_total, config.save_percentage)
        }
        Command::Dues { dues } => Ok(display_dues(&read_ledger(dues)?)),
    }
}

fn read_ledger(path: &Path) -> Result<String> {
    let data = fs::read_to_string(path)?;
    debug!("Read {} bytes from {}", data.len(), path.display());
    Ok(data)
}
