//! CSV format handling for deposit input and outcome output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization (`check_number,amount`)
//! - Conversion from CSV records to deposit records
//! - Input line numbers for records read by either reader
//! - Outcome serialization (`line,check_number,amount,status,confirmation,detail`)
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{DepositOutcome, DepositRecord, DepositRequest, ProcessingResult};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Header written before outcome rows
pub const OUTCOME_HEADER: [&str; 6] = [
    "line",
    "check_number",
    "amount",
    "status",
    "confirmation",
    "detail",
];

/// Appended to every input so that each record, including the last, ends
/// with a newline. The CSV readers skip the blank line this may create.
pub const TRAILING_TERMINATOR: &[u8] = b"\n";

/// First input line of a record that has just been read
///
/// `next_line` is the reader's line once the record and its terminator have
/// been consumed. Blank lines before the record are already behind it, and
/// newlines embedded in quoted fields are counted back off. Fields must be
/// untrimmed.
pub fn record_start_line<'a>(next_line: u64, fields: impl IntoIterator<Item = &'a str>) -> u64 {
    let embedded: u64 = fields
        .into_iter()
        .map(|field| field.matches('\n').count() as u64)
        .sum();
    next_line.saturating_sub(1 + embedded)
}

/// Whether a raw record is a blank line
///
/// Readers split on `\n` only, so a CRLF blank line arrives as a single `\r`
/// field rather than being skipped by the CSV reader.
pub fn is_blank_row<'a>(fields: impl IntoIterator<Item = &'a str>) -> bool {
    let mut fields = fields.into_iter();
    matches!(
        (fields.next(), fields.next()),
        (Some(field), None) if field.trim().is_empty()
    )
}

/// CSV record structure for deserialization
///
/// The amount is kept as text so that malformed values can be reported with
/// the offending input.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(default)]
    pub check_number: String,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to a DepositRecord
///
/// An empty check number is passed through untouched; rejecting it is the
/// validator's job. Only an absent or unparsable amount fails here.
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
/// * `line` - Line number of the record in the input file
///
/// # Returns
///
/// * `Ok(DepositRecord)` - Successfully converted record
/// * `Err(String)` - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord, line: u64) -> Result<DepositRecord, String> {
    let amount = match csv_record.amount {
        Some(amount_str) if !amount_str.trim().is_empty() => {
            Decimal::from_str(amount_str.trim()).map_err(|_| {
                format!(
                    "Invalid amount '{}' for check '{}'",
                    amount_str, csv_record.check_number
                )
            })?
        }
        _ => {
            return Err(format!(
                "Missing amount for check '{}'",
                csv_record.check_number
            ))
        }
    };

    Ok(DepositRecord {
        line,
        request: DepositRequest::new(csv_record.check_number, amount),
    })
}

/// Render one outcome as CSV fields
fn outcome_fields(result: &ProcessingResult) -> [String; 6] {
    let (confirmation, detail) = match &result.outcome {
        DepositOutcome::Cleared(token) | DepositOutcome::Escalated { token, .. } => {
            (token.to_string(), String::new())
        }
        DepositOutcome::Rejected(error) => (String::new(), error.to_string()),
    };

    [
        result.record.line.to_string(),
        result.record.request.check_number.clone(),
        result.record.request.amount.to_string(),
        result.outcome.status().to_string(),
        confirmation,
        detail,
    ]
}

/// Write deposit outcomes in CSV format
///
/// Rows are written in input-line order regardless of the order of `results`.
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_outcomes_csv(
    results: &[ProcessingResult],
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(OUTCOME_HEADER)
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    let mut sorted: Vec<&ProcessingResult> = results.iter().collect();
    sorted.sort_by_key(|result| result.record.line);

    for result in sorted {
        writer
            .write_record(outcome_fields(result))
            .map_err(|e| format!("Failed to write outcome record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
