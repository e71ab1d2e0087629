//! Rust Token Ledger CLI
//!
//! Command-line interface for replaying token ledger actions from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- actions.csv > balances.csv
//! cargo run -- --strategy sync actions.csv > balances.csv
//! cargo run -- --strategy async actions.csv > balances.csv
//! cargo run -- --strategy async --batch-size 2000 actions.csv > balances.csv
//! ```
//!
//! The program reads action records from the input CSV file, replays them
//! through the ledger engine using the selected processing strategy, and
//! outputs the final balance records to stdout.
//!
//! # Processing Strategies
//!
//! - **sync**: Synchronous CSV parsing with streaming iteration (default)
//! - **async**: Asynchronous batched CSV reading on a tokio runtime
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use rust_token_ledger::cli;
use rust_token_ledger::strategy;
use std::process;

fn main() {
    let args = cli::parse_args();

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, config)
    };

    // Output goes to stdout; rejected actions are logged to stderr
    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
