//! CSV ledger reader
//!
//! Reads a ledger export into `RawRecord`s. Columns are located by header
//! name, so column order in the file does not matter. Field values are
//! trimmed but otherwise left as text; amount parsing belongs to the
//! normalizer.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BreakdownError, BreakdownResult};
use crate::models::RawRecord;

/// Header names of the four ledger columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Accounting period column
    #[serde(default = "default_period_column")]
    pub period: String,
    /// Person column
    #[serde(default = "default_person_column")]
    pub person: String,
    /// Account label column
    #[serde(default = "default_account_column")]
    pub account: String,
    /// Amount column
    #[serde(default = "default_amount_column")]
    pub amount: String,
    /// Field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_period_column() -> String {
    "AP Period".to_string()
}

fn default_person_column() -> String {
    "Name".to_string()
}

fn default_account_column() -> String {
    "Account Name".to_string()
}

fn default_amount_column() -> String {
    "Amount".to_string()
}

fn default_delimiter() -> char {
    ','
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            period: default_period_column(),
            person: default_person_column(),
            account: default_account_column(),
            amount: default_amount_column(),
            delimiter: default_delimiter(),
        }
    }
}

impl ColumnMapping {
    /// Create the default mapping ("AP Period", "Name", "Account Name", "Amount")
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Resolve header names to column indices
    fn resolve(&self, headers: &StringRecord) -> BreakdownResult<ColumnIndices> {
        let find = |name: &str| -> BreakdownResult<usize> {
            let wanted = name.trim().to_lowercase();
            headers
                .iter()
                .position(|h| h.trim().to_lowercase() == wanted)
                .ok_or_else(|| BreakdownError::MissingColumn(name.to_string()))
        };

        Ok(ColumnIndices {
            period: find(&self.period)?,
            person: find(&self.person)?,
            account: find(&self.account)?,
            amount: find(&self.amount)?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    period: usize,
    person: usize,
    account: usize,
    amount: usize,
}

/// Service for reading ledger CSV files
pub struct ImportService {
    mapping: ColumnMapping,
}

impl ImportService {
    /// Create a new import service
    pub fn new(mapping: ColumnMapping) -> Self {
        Self { mapping }
    }

    /// The column mapping in use
    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    /// Read a ledger file from disk
    pub fn parse_csv_file(&self, path: &Path) -> BreakdownResult<Vec<RawRecord>> {
        let file = File::open(path).map_err(|e| {
            BreakdownError::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let mut reader = self.reader_builder().from_reader(file);
        self.parse_csv_from_reader(&mut reader)
    }

    /// Read a ledger from any byte source
    pub fn parse_csv_from_bytes<R: Read>(&self, source: R) -> BreakdownResult<Vec<RawRecord>> {
        let mut reader = self.reader_builder().from_reader(source);
        self.parse_csv_from_reader(&mut reader)
    }

    /// Read all records from an already-configured CSV reader
    ///
    /// The reader must have headers enabled. Any unreadable record aborts
    /// the whole read.
    pub fn parse_csv_from_reader<R: Read>(
        &self,
        reader: &mut Reader<R>,
    ) -> BreakdownResult<Vec<RawRecord>> {
        let headers = reader.headers()?.clone();
        let columns = self.mapping.resolve(&headers)?;

        let mut records = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            records.push(Self::parse_record(&record, idx + 1, columns));
        }

        debug!(rows = records.len(), "Read ledger records");
        Ok(records)
    }

    fn parse_record(record: &StringRecord, row: usize, columns: ColumnIndices) -> RawRecord {
        let field = |idx: usize| record.get(idx).map(str::trim).unwrap_or_default();

        RawRecord::new(
            row,
            field(columns.period),
            field(columns.person),
            field(columns.account),
            field(columns.amount),
        )
    }

    fn reader_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .delimiter(self.mapping.delimiter as u8);
        builder
    }

    /// Guess a column mapping from loosely named headers
    ///
    /// Unrecognized headers are ignored; columns that cannot be guessed keep
    /// their default name, so `resolve` still reports them as missing.
    pub fn detect_mapping_from_headers(headers: &StringRecord) -> ColumnMapping {
        let mut mapping = ColumnMapping::new();

        for header in headers.iter() {
            let h = header.trim().to_lowercase();

            if h.contains("period") || h == "month" {
                mapping.period = header.trim().to_string();
            } else if h.contains("account") || h.contains("category") {
                mapping.account = header.trim().to_string();
            } else if h.contains("amount") || h == "value" {
                mapping.amount = header.trim().to_string();
            } else if h == "name"
                || h.contains("person")
                || h.contains("employee")
                || h.contains("staff")
            {
                mapping.person = header.trim().to_string();
            }
        }

        mapping
    }
}

impl Default for ImportService {
    fn default() -> Self {
        Self::new(ColumnMapping::default())
    }
}
