//! Free-form quantity strings such as `25.4mm`, `3in` or `90°`
//!
//! The text is split into a leading float literal and a unit token. The
//! token is used verbatim (no trimming, case-sensitive) and matched against
//! the SI table, then the Imperial UK table.

mod number;

use crate::tables::{default_tables, find_by_symbol_in, UnitTable};
use crate::types::{Dimension, TranslateResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("No numeric value at the start of \"{input}\"")]
    NoNumericLiteral { input: String },

    #[error("Unknown unit \"{unit}\" after value {value}")]
    UnknownUnit { value: f64, unit: String },
}

/// Outcome of a successful parse.
///
/// `result.value` is the literal as typed, not yet scaled by
/// `result.factor`; use [`ParsedQuantity::canonical_value`] for that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedQuantity<'t> {
    pub result: TranslateResult<'t>,
    pub dimension: Dimension,
}

impl<'t> ParsedQuantity<'t> {
    pub fn literal(&self) -> f64 {
        self.result.value
    }

    pub fn factor(&self) -> f64 {
        self.result.factor
    }

    pub fn symbol(&self) -> Option<&'t str> {
        self.result.symbol
    }

    /// `literal * factor`
    pub fn canonical_value(&self) -> f64 {
        self.result.scaled_value()
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension == Dimension::None
    }
}

/// Parse `text` against the built-in SI and Imperial UK tables
pub fn parse_quantity(text: &str) -> Result<ParsedQuantity<'static>, ParseError> {
    parse_quantity_with(text, &default_tables())
}

/// Parse `text` against `tables`, scanned in order
pub fn parse_quantity_with<'t>(
    text: &str,
    tables: &[&'t UnitTable],
) -> Result<ParsedQuantity<'t>, ParseError> {
    let Some((value, len)) = number::scan_float(text) else {
        tracing::debug!(input = text, "no numeric literal");
        return Err(ParseError::NoNumericLiteral {
            input: text.to_string(),
        });
    };

    let unit = &text[len..];
    if unit.is_empty() {
        return Ok(ParsedQuantity {
            result: TranslateResult::unitless(value),
            dimension: Dimension::None,
        });
    }

    match find_by_symbol_in(tables, unit) {
        Some(row) => {
            tracing::trace!(input = text, symbol = %row.symbol, dimension = %row.dimension, "matched unit");
            Ok(ParsedQuantity {
                result: TranslateResult::new(value, &row.symbol, row.factor),
                dimension: row.dimension,
            })
        }
        None => {
            tracing::debug!(input = text, unit, "unknown unit");
            Err(ParseError::UnknownUnit {
                value,
                unit: unit.to_string(),
            })
        }
    }
}
