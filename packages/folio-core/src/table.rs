//! Raw holdings tables read from and written to CSV.
//!
//! A [`Table`] keeps the header row and every cell as text, in input order.
//! Only the four required columns are interpreted; anything else is carried
//! through untouched for display and persistence.

use crate::types::Holding;
use crate::{Error, Result};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Column names every holdings table must carry (exact, case-sensitive).
pub const REQUIRED_COLUMNS: [&str; 4] = ["Ticker", "Shares", "Purchase_Price", "Current_Price"];

/// A minimal well-formed holdings file.
pub const EXAMPLE_CSV: &str = "Ticker,Shares,Purchase_Price,Current_Price\n\
                               AAPL,10,150,170\n\
                               MSFT,5,250,300\n";

/// A delimited table with a header row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Table {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

/// Positions of the required columns within a table's header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub ticker: usize,
    pub shares: usize,
    pub purchase_price: usize,
    pub current_price: usize,
}

impl Table {
    /// Create a table from a header row and records.
    pub fn new(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        Self { headers, records }
    }

    /// Parse CSV text with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = rdr.headers()?.iter().map(str::to_string).collect();
        let mut records = Vec::new();
        for record in rdr.records() {
            let record = record?;
            records.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, records })
    }

    /// Read a CSV file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Write the table as CSV, header row first.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = WriterBuilder::new().from_writer(writer);
        wtr.write_record(&self.headers)?;
        for record in &self.records {
            wtr.write_record(record)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Header row, in input order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, in input order.
    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// A table with no data rows counts as empty, whatever its headers.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Required columns this table lacks, in [`REQUIRED_COLUMNS`] order.
    pub fn missing_columns(&self) -> Vec<String> {
        REQUIRED_COLUMNS
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect()
    }

    /// Check that every required column is present.
    pub fn layout(&self) -> Result<ColumnLayout> {
        let missing = self.missing_columns();
        if !missing.is_empty() {
            return Err(Error::Schema {
                missing,
                required: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            });
        }

        let index = |name: &str| self.column_index(name).unwrap_or_default();
        Ok(ColumnLayout {
            ticker: index("Ticker"),
            shares: index("Shares"),
            purchase_price: index("Purchase_Price"),
            current_price: index("Current_Price"),
        })
    }

    /// Interpret every row as a [`Holding`].
    ///
    /// Fails without returning any holdings if a required column is missing
    /// or a numeric cell does not parse.
    pub fn holdings(&self) -> Result<Vec<Holding>> {
        let layout = self.layout()?;

        self.records
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                let row = idx + 1;
                Ok(Holding {
                    ticker: cell(record, layout.ticker).to_string(),
                    shares: parse_number(record, layout.shares, row, "Shares")?,
                    purchase_price: parse_number(
                        record,
                        layout.purchase_price,
                        row,
                        "Purchase_Price",
                    )?,
                    current_price: parse_number(
                        record,
                        layout.current_price,
                        row,
                        "Current_Price",
                    )?,
                })
            })
            .collect()
    }
}

fn cell(record: &[String], idx: usize) -> &str {
    record.get(idx).map(String::as_str).unwrap_or("")
}

fn parse_number(record: &[String], idx: usize, row: usize, column: &str) -> Result<f64> {
    let raw = cell(record, idx);
    raw.trim().parse::<f64>().map_err(|_| Error::InvalidNumber {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })
}
