//! Synchronous processing strategy
//!
//! This module provides a synchronous, single-threaded implementation of the
//! ProcessingStrategy trait. It orchestrates action replay by coordinating
//! between the SyncReader (for CSV input) and LedgerEngine (for business
//! logic).
//!
//! # Design
//!
//! The SyncProcessingStrategy focuses on orchestration, delegating:
//! - CSV parsing to `SyncReader` (iterator interface)
//! - Action application to `LedgerEngine` (business logic)
//! - CSV output to `csv_format::write_balances_csv` (format handling)
//!
//! # Memory Efficiency
//!
//! This strategy maintains streaming behavior: actions are read and applied
//! one at a time, so memory usage is O(accounts + tokens), not O(actions).

use crate::core::host::ReplayHost;
use crate::core::LedgerEngine;
use crate::io::csv_format::write_balances_csv;
use crate::io::sync_reader::SyncReader;
use crate::strategy::{ProcessingStrategy, REPLAY_ADMIN};
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// Implements the ProcessingStrategy trait using single-threaded, synchronous
/// processing. Orchestrates the flow between CSV reading, action application,
/// and output generation.
///
/// # Examples
///
/// ```no_run
/// use rust_token_ledger::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy;
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("actions.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    /// Replay actions from input file and write the balance report to output
    ///
    /// This method orchestrates the complete synchronous pipeline:
    /// 1. Creates a SyncReader to stream action records from the CSV file
    /// 2. Creates a LedgerEngine over the replay host
    /// 3. Iterates through records, applying each through the engine
    /// 4. Collects final balance records from the engine
    /// 5. Writes balances to output using csv_format::write_balances_csv
    ///
    /// # Error Handling
    ///
    /// Fatal errors (file not found, I/O errors) are returned immediately.
    /// Individual action failures are logged to stderr; the failed action
    /// leaves the ledger untouched and processing continues.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let mut engine = LedgerEngine::new(ReplayHost, REPLAY_ADMIN.to_string());

        let reader = SyncReader::new(input_path)?;

        for result in reader {
            match result {
                Ok(action) => {
                    if let Err(e) = engine.apply(action) {
                        eprintln!("Action processing error: {}", e);
                    }
                }
                Err(e) => {
                    eprintln!("CSV parsing error: {}", e);
                }
            }
        }

        let balances = engine.balances();
        write_balances_csv(&balances, output)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_sync_strategy_processes_token_lifecycle() {
        let csv_content = "action,actor,target,quantity,memo\n\
            create,,issuer,1000.0000 TDN,\n\
            issue,,issuer,100.0000 TDN,\n\
            transfer,issuer,bob,40.0000 TDN,\n";
        let file = create_temp_csv(csv_content);

        let strategy = SyncProcessingStrategy;
        let mut output = Vec::new();

        let result = strategy.process(file.path(), &mut output);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "account,balance\nbob,40.0000 TDN\nissuer,60.0000 TDN\n"
        );
    }

    #[test]
    fn test_sync_strategy_handles_missing_file() {
        let strategy = SyncProcessingStrategy;
        let mut output = Vec::new();

        let result = strategy.process(Path::new("nonexistent.csv"), &mut output);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to open file"));
    }

    #[test]
    fn test_sync_strategy_continues_on_rejected_action() {
        // Second issue exceeds the ceiling and is rejected; later actions
        // still apply
        let csv_content = "action,actor,target,quantity,memo\n\
            create,,issuer,1000.0000 TDN,\n\
            issue,,issuer,100.0000 TDN,\n\
            issue,,issuer,950.0000 TDN,\n\
            transfer,issuer,bob,40.0000 TDN,\n";
        let file = create_temp_csv(csv_content);

        let strategy = SyncProcessingStrategy;
        let mut output = Vec::new();

        let result = strategy.process(file.path(), &mut output);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "account,balance\nbob,40.0000 TDN\nissuer,60.0000 TDN\n"
        );
    }

    #[test]
    fn test_sync_strategy_continues_on_malformed_record() {
        let csv_content = "action,actor,target,quantity,memo\n\
            create,,issuer,1000.0000 TDN,\n\
            issue,,issuer,not_an_asset,\n\
            issue,,issuer,25.0000 TDN,\n";
        let file = create_temp_csv(csv_content);

        let strategy = SyncProcessingStrategy;
        let mut output = Vec::new();

        let result = strategy.process(file.path(), &mut output);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, "account,balance\nissuer,25.0000 TDN\n");
    }

    #[test]
    fn test_sync_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyncProcessingStrategy>();
    }

    #[test]
    fn test_sync_strategy_empty_input_produces_header_only() {
        let csv_content = "action,actor,target,quantity,memo\n";
        let file = create_temp_csv(csv_content);

        let strategy = SyncProcessingStrategy;
        let mut output = Vec::new();

        let result = strategy.process(file.path(), &mut output);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, "account,balance\n");
    }
}
