//! CSV Import
//!
//! Reads fitness log entries from CSV. The header row uses the wire field
//! names (`studentname`, `studentaddress`, `status`, `noofpushups`,
//! `randistance`, `weightlifted`); missing columns import as empty strings
//! and unknown columns are ignored.

use std::io::Read;
use std::path::Path;

use crate::storage::StudentFields;

/// Result of a CSV import operation
#[derive(Debug, Default)]
pub struct CsvImportResult {
    pub entries: Vec<StudentFields>,
    pub rows_processed: usize,
    pub rows_failed: usize,
    pub errors: Vec<String>,
}

/// Import entries from a CSV file
pub fn import_csv(path: &Path) -> Result<CsvImportResult, csv::Error> {
    let reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    Ok(collect(reader))
}

/// Import entries from an in-memory or streamed CSV source
pub fn import_reader<R: Read>(input: R) -> CsvImportResult {
    let reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    collect(reader)
}

fn collect<R: Read>(mut reader: csv::Reader<R>) -> CsvImportResult {
    let mut result = CsvImportResult::default();

    for (idx, row) in reader.deserialize::<StudentFields>().enumerate() {
        result.rows_processed += 1;
        // Header is line 1
        let line = idx + 2;

        match row {
            Ok(fields) => match fields.validate() {
                Ok(()) => result.entries.push(fields),
                Err(e) => {
                    result.rows_failed += 1;
                    result.errors.push(format!("line {}: {}", line, e));
                }
            },
            Err(e) => {
                result.rows_failed += 1;
                result.errors.push(format!("line {}: {}", line, e));
            }
        }
    }

    result
}
