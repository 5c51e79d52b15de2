//! Single-pass structural scan of delimited text.
//!
//! The scan is lenient: rows may be shorter or longer than the header, so row
//! and column counts are available even for ragged files. Only the header is
//! kept; data rows are read into one reused buffer and counted.

use csv::{ByteRecord, ReaderBuilder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("No columns to parse from file")]
    NoColumns,

    #[error("{0}")]
    Csv(#[from] csv::Error),
}

/// Header and row count of a delimited file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableShape {
    pub column_names: Vec<String>,
    /// Data rows, header excluded. Blank lines are not rows.
    pub row_count: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct CsvScanner {
    delimiter: u8,
}

impl Default for CsvScanner {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn scan(&self, text: &str) -> Result<TableShape, ScanError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?;
        if headers.is_empty() {
            return Err(ScanError::NoColumns);
        }
        let column_names: Vec<String> = headers.iter().map(str::to_string).collect();

        let mut record = ByteRecord::new();
        let mut row_count = 0u64;
        while reader.read_byte_record(&mut record)? {
            row_count += 1;
        }

        Ok(TableShape {
            column_names,
            row_count,
        })
    }
}
