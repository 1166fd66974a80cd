use serde::Serialize;

use crate::types::units::DisplayTranslated;

/// Value, unit symbol and factor such that `canonical = factor * displayed`.
///
/// Translating, `value` is already divided by `factor` and ready for
/// display. Parsing, `value` is the literal the user typed and the caller
/// multiplies by `factor` to get back to canonical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TranslateResult<'a> {
    pub value: f64,
    pub symbol: Option<&'a str>,
    pub factor: f64,
}

impl<'a> TranslateResult<'a> {
    pub fn new(value: f64, symbol: &'a str, factor: f64) -> Self {
        Self {
            value,
            symbol: Some(symbol),
            factor,
        }
    }

    /// Result with no unit symbol and a factor of one
    pub fn unitless(value: f64) -> Self {
        Self {
            value,
            symbol: None,
            factor: 1.,
        }
    }

    pub fn symbol_or_empty(&self) -> &'a str {
        self.symbol.unwrap_or("")
    }

    /// `value * factor`
    pub fn scaled_value(&self) -> f64 {
        self.value * self.factor
    }

    /// Formats as `"<value> <symbol>"` with a fixed number of decimals
    pub fn display(&self, decimals: usize) -> DisplayTranslated<'a> {
        DisplayTranslated {
            result: *self,
            decimals,
        }
    }

    /// Value immediately followed by the symbol, in a form the quantity
    /// parser reads back without loss
    pub fn to_input_string(&self) -> String {
        format!("{}{}", self.value, self.symbol_or_empty())
    }
}
