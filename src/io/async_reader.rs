//! Asynchronous CSV reader with batch interface
//!
//! Provides a streaming interface over action records from a CSV file.
//! Supports batch reading for efficient async processing.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming CSV parsing
//! - tokio for async runtime primitives
//! - Batch reading to amortize per-record overhead
//!
//! Record parsing and conversion are delegated to the csv_format module, so
//! sync and async input paths share one format definition.

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::Action;
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous CSV reader
///
/// Provides a batch reading interface over ledger actions. Maintains
/// streaming behavior with constant memory usage.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    ///
    /// # Arguments
    ///
    /// * `reader` - Async reader providing CSV data
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self { csv_reader }
    }

    /// Read a batch of actions
    ///
    /// Reads up to `batch_size` records from the CSV file, converting each
    /// to an Action. Invalid records are logged to stderr and skipped.
    ///
    /// # Arguments
    ///
    /// * `batch_size` - Maximum number of records to read
    ///
    /// # Returns
    ///
    /// A vector of successfully converted actions. Returns an empty vector
    /// when the end of the file is reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<Action> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(csv_record)) => match convert_csv_record(csv_record) {
                    Ok(action) => batch.push(action),
                    Err(e) => eprintln!("Record conversion error: {}", e),
                },
                Some(Err(e)) => eprintln!("CSV parse error: {}", e),
                None => break,
            }
        }

        batch
    }
}
