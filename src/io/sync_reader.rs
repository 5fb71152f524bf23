//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over deposit records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding `Result<DepositRecord, String>`
//! for each CSV row:
//!
//! ```no_run
//! use check_deposit_engine::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("deposits.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Depositing check {}", record.request.check_number),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record parsing errors are yielded as Err variants in the iterator
//! - Line numbers are the physical input lines, so blank lines and quoted
//!   multi-line fields do not shift them

use crate::io::csv_format::{
    convert_csv_record, is_blank_row, record_start_line, CsvRecord, TRAILING_TERMINATOR,
};
use crate::types::DepositRecord;
use csv::{ReaderBuilder, StringRecord, Terminator};
use std::fs::File;
use std::io::{Chain, Read};
use std::path::Path;

/// Synchronous CSV reader
///
/// Reads one record at a time; memory use does not grow with file size.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<Chain<File, &'static [u8]>>,
    headers: StringRecord,
    /// Reused buffer for the raw (untrimmed) record
    record: StringRecord,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// The header row is read here. Fields are trimmed after line numbers
    /// are taken, and rows with a missing amount column are tolerated.
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReader)` if file opened successfully
    /// * `Err(String)` if file could not be opened or its header is unreadable
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .terminator(Terminator::Any(b'\n'))
            .buffer_capacity(8 * 1024)
            .from_reader(file.chain(TRAILING_TERMINATOR));

        let mut headers = reader
            .headers()
            .map_err(|e| format!("Failed to read CSV header: {}", e))?
            .clone();
        headers.trim();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<DepositRecord, String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.reader.read_record(&mut self.record) {
                Ok(false) => return None,
                Ok(true) if is_blank_row(&self.record) => continue,
                Ok(true) => {
                    let line = record_start_line(self.reader.position().line(), &self.record);
                    self.record.trim();

                    return Some(
                        self.record
                            .deserialize::<CsvRecord>(Some(&self.headers))
                            .map_err(|e| format!("Line {}: CSV parse error: {}", line, e))
                            .and_then(|csv_record| {
                                convert_csv_record(csv_record, line)
                                    .map_err(|e| format!("Line {}: {}", line, e))
                            }),
                    );
                }
                Err(e) => {
                    let line = self.reader.position().line().saturating_sub(1);
                    return Some(Err(format!("Line {}: CSV parse error: {}", line, e)));
                }
            }
        }
    }
}
