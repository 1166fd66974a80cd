use std::fmt;

use crate::types::TranslateResult;

/// Fixed-decimals rendering of a translated value, e.g. `25.40 mm`
#[derive(Debug, Clone, Copy)]
pub struct DisplayTranslated<'a> {
    pub result: TranslateResult<'a>,
    pub decimals: usize,
}

impl fmt::Display for DisplayTranslated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result.symbol {
            Some(symbol) if !symbol.is_empty() => {
                write!(f, "{:.*} {}", self.decimals, self.result.value, symbol)
            }
            _ => write!(f, "{:.*}", self.decimals, self.result.value),
        }
    }
}

/// Canonical point rendered per axis, e.g. `(1.00 in, 2.00 in, 0.00 in)`
#[derive(Debug, Clone, Copy)]
pub struct DisplayPoint<'a> {
    pub coords: [f64; 3],
    pub symbol: &'a str,
    pub decimals: usize,
}

impl fmt::Display for DisplayPoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.coords;
        let d = self.decimals;
        let s = self.symbol;
        write!(f, "({:.*} {s}, {:.*} {s}, {:.*} {s})", d, x, d, y, d, z)
    }
}
