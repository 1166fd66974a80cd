//! Schema tables: ordered `(dimension, symbol, factor)` rows
//!
//! Lookups scan rows in declared order and the first match wins, so row
//! order is the tie-break rule. Tables are built once and never mutated.

mod data;

pub use data::{DEGREE, INCH, METER};

use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::types::{Dimension, Schema};

/// SI symbols, scanned first when parsing
pub static SI_TABLE: LazyLock<UnitTable> =
    LazyLock::new(|| UnitTable::from_static(Some(Schema::SI), data::SI_UNITS));

/// Imperial UK symbols, scanned after the SI table
pub static IMPERIAL_UK_TABLE: LazyLock<UnitTable> =
    LazyLock::new(|| UnitTable::from_static(Some(Schema::ImperialUK), data::IMPERIAL_UK_UNITS));

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid factor {factor} for unit {symbol}")]
    InvalidFactor { symbol: String, factor: f64 },
}

/// A recognized unit symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitInfo {
    pub dimension: Dimension,
    pub symbol: String,
    /// `canonical = factor * displayed`
    pub factor: f64,
}

impl UnitInfo {
    pub fn new(dimension: Dimension, symbol: impl Into<String>, factor: f64) -> Self {
        Self {
            dimension,
            symbol: symbol.into(),
            factor,
        }
    }
}

/// Ordered, duplicate-free list of unit rows
#[derive(Debug, Clone, Default)]
pub struct UnitTable {
    schema: Option<Schema>,
    rows: Vec<UnitInfo>,
}

impl UnitTable {
    /// Build a table from rows in priority order.
    ///
    /// A row whose symbol already appeared is unreachable under first-match
    /// lookup and is dropped.
    pub fn new(schema: Option<Schema>, rows: impl IntoIterator<Item = UnitInfo>) -> Self {
        let mut kept: Vec<UnitInfo> = Vec::new();

        for row in rows {
            if let Some(first) = kept.iter().find(|r| r.symbol == row.symbol) {
                tracing::debug!(
                    symbol = %row.symbol,
                    dropped_factor = row.factor,
                    kept_factor = first.factor,
                    "dropping shadowed unit row"
                );
                continue;
            }
            kept.push(row);
        }

        Self { schema, rows: kept }
    }

    fn from_static(schema: Option<Schema>, rows: &[(Dimension, &str, f64)]) -> Self {
        Self::new(
            schema,
            rows.iter().map(|&(dimension, symbol, factor)| UnitInfo::new(dimension, symbol, factor)),
        )
    }

    /// Load rows from CSV with a `dimension,symbol,factor` header
    pub fn from_csv_reader<R: io::Read>(schema: Option<Schema>, reader: R) -> Result<Self, TableError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut rows = Vec::new();

        for record in csv_reader.deserialize() {
            let row: UnitInfo = record?;
            if !row.factor.is_finite() || row.factor == 0. {
                return Err(TableError::InvalidFactor {
                    symbol: row.symbol,
                    factor: row.factor,
                });
            }
            rows.push(row);
        }

        Ok(Self::new(schema, rows))
    }

    pub fn from_csv_file(schema: Option<Schema>, path: impl AsRef<Path>) -> Result<Self, TableError> {
        let file = fs::File::open(path)?;
        Self::from_csv_reader(schema, file)
    }

    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), TableError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn schema(&self) -> Option<Schema> {
        self.schema
    }

    pub fn rows(&self) -> &[UnitInfo] {
        &self.rows
    }

    /// First row whose symbol equals `symbol` exactly
    pub fn find(&self, symbol: &str) -> Option<&UnitInfo> {
        self.rows.iter().find(|row| row.symbol == symbol)
    }

    /// Symbols for a dimension, in table order
    pub fn symbols_for(&self, dimension: Dimension) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| row.dimension == dimension)
            .map(|row| row.symbol.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Table holding the symbols of a schema
pub fn table_for(schema: Schema) -> &'static UnitTable {
    match schema {
        Schema::SI => &*SI_TABLE,
        Schema::ImperialUK => &*IMPERIAL_UK_TABLE,
    }
}

/// Built-in tables in parse priority order
pub fn default_tables() -> [&'static UnitTable; 2] {
    [&*SI_TABLE, &*IMPERIAL_UK_TABLE]
}

/// Scan `tables` in order, each one fully, and return the first matching row
pub fn find_by_symbol_in<'t>(tables: &[&'t UnitTable], symbol: &str) -> Option<&'t UnitInfo> {
    tables.iter().find_map(|table| table.find(symbol))
}

/// Look `symbol` up in the SI table, then the Imperial UK table
pub fn find_by_symbol(symbol: &str) -> Option<&'static UnitInfo> {
    find_by_symbol_in(&default_tables(), symbol)
}
