//! Processing strategy module for action replay
//!
//! This module defines the Strategy pattern for complete replay pipelines,
//! encompassing both CSV parsing and ledger engine processing. This allows
//! different input implementations (synchronous, asynchronous batch) to be
//! selected at runtime.

use crate::cli::StrategyType;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Administrating identity used when replaying a recorded action log
///
/// Symbol registration requires the admin's authority; under the replay
/// host every authority check passes, so the identity is nominal.
pub const REPLAY_ADMIN: &str = "ledger";

/// Processing strategy trait for complete replay pipelines
///
/// This trait defines the interface for different replay implementations.
/// Each strategy must be able to read actions from a CSV file, apply them
/// through the ledger engine, and write the final balance report to output.
pub trait ProcessingStrategy: Send + Sync {
    /// Replay actions from input file and write the balance report to output
    ///
    /// This method reads action records from the specified CSV file, applies
    /// them through the ledger engine in file order, and writes the final
    /// balance records to the provided output writer.
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the input CSV file containing action records
    /// * `output` - Mutable reference to a writer for outputting balances
    ///
    /// # Returns
    ///
    /// * `Ok(())` if all processing completed successfully (or with recoverable errors)
    /// * `Err(String)` if a fatal error occurred (file not found, I/O error, etc.)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - A fatal I/O error occurs during reading or writing
    /// - Output cannot be written
    ///
    /// Individual action failures are logged to stderr but do not cause this
    /// method to return an error; a rejected action leaves the ledger
    /// untouched and processing continues with the next record.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String>;
}

/// Create a processing strategy based on the specified strategy type
///
/// Factory function selecting and instantiating the appropriate strategy
/// implementation at runtime based on the provided strategy type and
/// optional configuration.
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional configuration for async batch reading (ignored for sync)
///
/// # Returns
///
/// A boxed trait object implementing the ProcessingStrategy trait
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}
