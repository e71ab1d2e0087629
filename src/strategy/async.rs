//! Asynchronous batch processing strategy
//!
//! This module provides an implementation of the ProcessingStrategy trait
//! that reads CSV input asynchronously in batches and applies each batch to
//! the ledger engine in order.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size)
//!     ├── AsyncReader (batch CSV reading over tokio file I/O)
//!     └── LedgerEngine (serialized action application)
//! ```
//!
//! # Ordering
//!
//! Ledger actions are order dependent across accounts: a transfer moves
//! funds between two balances, and issuance both mutates supply and credits
//! a balance. The engine therefore applies actions strictly in file order;
//! what this strategy overlaps is the file I/O and CSV decoding, which
//! proceed in batches on the async runtime.

use crate::core::host::ReplayHost;
use crate::core::LedgerEngine;
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::write_balances_csv;
use crate::strategy::{ProcessingStrategy, REPLAY_ADMIN};
use std::io::Write;
use std::path::Path;

/// Configuration for batch reading
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of actions per read batch
    pub batch_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { batch_size: 1000 }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with a custom batch size
    ///
    /// A zero batch size falls back to the default with a warning.
    pub fn new(batch_size: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            eprintln!(
                "Warning: Invalid batch_size ({}), using default ({})",
                batch_size, default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        Self { batch_size }
    }
}

/// Asynchronous batch processing strategy
///
/// Implements the ProcessingStrategy trait using asynchronous batched CSV
/// reading. Actions are read in batches and applied to the engine
/// sequentially, preserving file order.
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    /// Batch reading configuration
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy with the specified configuration
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Replay actions from input file and write the balance report to output
    ///
    /// This method implements the complete asynchronous pipeline:
    /// 1. Creates a tokio runtime
    /// 2. Opens the CSV file with tokio and wraps it for csv-async
    /// 3. Reads actions in batches using AsyncReader
    /// 4. Applies each batch to the LedgerEngine in file order
    /// 5. Writes the final balance records to output
    ///
    /// # Error Handling
    ///
    /// Fatal errors (file not found, I/O errors, runtime errors) are
    /// returned immediately. Individual action failures are logged to stderr
    /// and processing continues.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .build()
            .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

        runtime.block_on(async {
            let mut engine = LedgerEngine::new(ReplayHost, REPLAY_ADMIN.to_string());

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| format!("Failed to open file '{}': {}", input_path.display(), e))?;

            // Wrap tokio file in a compatibility layer for csv-async
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);

            let mut reader = AsyncReader::new(compat_file);

            loop {
                let batch = reader.read_batch(self.config.batch_size).await;

                // An empty batch means end of file
                if batch.is_empty() {
                    break;
                }

                for action in batch {
                    if let Err(e) = engine.apply(action) {
                        eprintln!("Action processing error: {}", e);
                    }
                }
            }

            let balances = engine.balances();
            write_balances_csv(&balances, output)?;

            Ok(())
        })
    }
}
