//! Error types for the kakebo calculator.
//!
//! The messages of the ledger variants are part of the public contract:
//! callers and tests match on the rendered text.

use crate::decimal::Amount;
use thiserror::Error;

/// Result type alias for kakebo operations
pub type Result<T> = std::result::Result<T, KakeboError>;

/// Errors that can occur while parsing ledgers or rendering reports.
#[derive(Error, Debug)]
pub enum KakeboError {
    /// A ledger line has fewer fields than its record shape needs
    #[error("at least {required} {} required", field_noun(.required))]
    InsufficientFields { required: usize },

    /// A token is not a decimal literal
    #[error("can't convert {token} to decimal")]
    Parse { token: String },

    /// A due carries an interval code outside the interval table
    #[error("unknown interval '{code}'")]
    UnknownInterval { code: String },

    /// Statistics cannot be computed against a zero or negative budget
    #[error("monthly budget must be positive, got {}", .budget.money())]
    NonPositiveBudget { budget: Amount },

    /// Decimal arithmetic left the representable range
    #[error("amount out of range")]
    Overflow,

    /// Failed to read a ledger file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No command given on the command line
    #[error(
        "Missing command argument. Usage: kakebo <balance|total|format|month|stats|dues> \
         [--date YYYY-MM-DD] [--save PERCENT] <ledger>..."
    )]
    MissingArgument,

    /// Command name not recognised
    #[error("Unknown command '{name}'")]
    UnknownCommand { name: String },

    /// Command received the wrong number of ledger files
    #[error("Command '{command}' expects {expected} ledger file(s), got {got}")]
    WrongLedgerCount {
        command: String,
        expected: usize,
        got: usize,
    },

    /// Option given without its value
    #[error("Missing value for option {option}")]
    MissingOptionValue { option: String },

    /// Option value could not be parsed
    #[error("Invalid value '{value}' for option {option}")]
    InvalidOption { option: String, value: String },
}

fn field_noun(required: &usize) -> &'static str {
    if *required == 1 {
        "field"
    } else {
        "fields"
    }
}
