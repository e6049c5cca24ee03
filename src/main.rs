//! Kakebo CLI
//!
//! Reads dues and entries ledgers and prints budget reports.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- balance dues.txt
//! cargo run -- month --date 2020-01-31 january.txt
//! cargo run -- stats --save 20 dues.txt january.txt
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use chrono::Local;
use kakebo::cli::{execute, parse_args};
use kakebo::Result;
use std::env;
use std::io::{self, Write};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let today = Local::now().date_naive();
    let (command, config) = parse_args(env::args().skip(1), today)?;

    let output = execute(&command, &config)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(output.as_bytes())?;
    handle.flush()?;

    Ok(())
}
