//! Asynchronous CSV reader with batch interface
//!
//! Reads deposit records in batches for the concurrent processing strategy.
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of DepositRecords
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{
    convert_csv_record, is_blank_row, record_start_line, CsvRecord, TRAILING_TERMINATOR,
};
use crate::types::DepositRecord;
use csv_async::{AsyncReaderBuilder, StringRecord, Terminator};
use futures::io::{AsyncRead, AsyncReadExt, Chain, Cursor};

type TerminatedInput<R> = Chain<R, Cursor<&'static [u8]>>;

/// Asynchronous CSV reader
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncReader<TerminatedInput<R>>,
    /// Trimmed header row, read on the first batch
    headers: Option<StringRecord>,
    /// Reused buffer for the raw (untrimmed) record
    record: StringRecord,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .terminator(Terminator::Any(b'\n'))
            .create_reader(reader.chain(Cursor::new(TRAILING_TERMINATOR)));

        Self {
            csv_reader,
            headers: None,
            record: StringRecord::new(),
        }
    }

    /// Read a batch of deposit records
    ///
    /// Reads up to `batch_size` rows. Malformed rows are logged and skipped
    /// without counting towards the batch. Each record carries the input line
    /// its row starts on.
    ///
    /// # Returns
    ///
    /// The successfully converted records. An empty vector means the end of
    /// the input was reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<DepositRecord> {
        let mut batch = Vec::with_capacity(batch_size);

        let headers = match self.headers.take() {
            Some(headers) => headers,
            None => match self.csv_reader.headers().await {
                Ok(headers) => {
                    let mut headers = headers.clone();
                    headers.trim();
                    headers
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to read CSV header");
                    return batch;
                }
            },
        };

        while batch.len() < batch_size {
            match self.csv_reader.read_record(&mut self.record).await {
                Ok(false) => break,
                Ok(true) if is_blank_row(&self.record) => continue,
                Ok(true) => {
                    let line =
                        record_start_line(self.csv_reader.position().line(), &self.record);
                    self.record.trim();

                    match self.record.deserialize::<CsvRecord>(Some(&headers)) {
                        Ok(csv_record) => match convert_csv_record(csv_record, line) {
                            Ok(record) => batch.push(record),
                            Err(e) => {
                                tracing::warn!(line, error = %e, "skipping malformed deposit record")
                            }
                        },
                        Err(e) => tracing::warn!(line, error = %e, "CSV parse error"),
                    }
                }
                Err(e) => {
                    let line = self.csv_reader.position().line().saturating_sub(1);
                    tracing::warn!(line, error = %e, "CSV parse error");
                }
            }
        }

        self.headers = Some(headers);
        batch
    }
}
