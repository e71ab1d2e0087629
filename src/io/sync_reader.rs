//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over action records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Design
//!
//! The SyncReader uses csv::Reader to read and deserialize CSV records
//! sequentially, delegating parsing and conversion to the csv_format module.
//! It maintains streaming behavior by processing CSV records one at a time
//! without loading the entire file into memory.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record parsing errors are yielded as Err variants in the iterator
//! - Line numbers are included in error messages for debugging

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::Action;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader
///
/// Provides an iterator interface over ledger actions. Maintains streaming
/// behavior with constant memory usage.
///
/// # Examples
///
/// ```no_run
/// use rust_token_ledger::io::sync_reader::SyncReader;
/// use std::path::Path;
///
/// let reader = SyncReader::new(Path::new("actions.csv")).unwrap();
/// for result in reader {
///     match result {
///         Ok(action) => println!("Processing action: {:?}", action),
///         Err(e) => eprintln!("Error: {}", e),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// Opens the CSV file and prepares it for streaming iteration.
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (for trailing optional columns)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReader)` if file opened successfully
    /// * `Err(String)` if file could not be opened
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<Action, String>;

    /// Get the next action from the CSV file
    ///
    /// Reads the next CSV row, deserializes it to a CsvRecord, and converts
    /// it to an Action via csv_format::convert_csv_record. Error messages
    /// include line numbers.
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Action))` - Successfully parsed action
    /// * `Some(Err(String))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();

        match deserializer.next()? {
            Ok(csv_record) => {
                self.line_num += 1;
                // Line numbers are one past the record index, accounting
                // for the header row
                Some(
                    convert_csv_record(csv_record)
                        .map_err(|e| format!("Line {}: {}", self.line_num + 1, e)),
                )
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(format!(
                    "Line {}: CSV parse error: {}",
                    self.line_num + 1,
                    e
                )))
            }
        }
    }
}
