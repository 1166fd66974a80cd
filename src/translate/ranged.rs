//! Magnitude-dependent display units

use crate::tables::{INCH, METER};
use crate::types::{Dimension, Schema, TranslateResult};

use super::translate;

/// Use `symbol` while `|value| < below`
struct Threshold {
    below: f64,
    symbol: &'static str,
    factor: f64,
}

const fn threshold(below: f64, symbol: &'static str, factor: f64) -> Threshold {
    Threshold { below, symbol, factor }
}

const SI_LENGTH: &[Threshold] = &[
    threshold(1e-9, "m", METER),
    threshold(0.001, "nm", 1e-6),
    threshold(0.1, "µm", 0.001),
    threshold(100., "mm", 1.),
    threshold(1e7, "m", METER),
    threshold(1e11, "km", 1e6),
    threshold(f64::MAX, "m", METER),
];

const SI_AREA: &[Threshold] = &[
    threshold(100., "mm²", 1.),
    threshold(1e12, "m²", 1e6),
    threshold(f64::MAX, "km²", 1e12),
];

const SI_VOLUME: &[Threshold] = &[
    threshold(1e4, "mm³", 1.),
    threshold(1e18, "m³", 1e9),
    threshold(f64::MAX, "km³", 1e18),
];

const SI_PRESSURE: &[Threshold] = &[
    threshold(10., "Pa", 0.001),
    threshold(1e4, "kPa", 1.),
    threshold(1e7, "MPa", 1000.),
    threshold(1e10, "GPa", 1e6),
    threshold(f64::MAX, "Pa", 0.001),
];

const IMPERIAL_UK_LENGTH: &[Threshold] = &[
    threshold(0.00000254, "in", INCH),
    threshold(2.54, "thou", 0.0254),
    threshold(304.8, "\"", INCH),
    threshold(914.4, "'", 304.8),
    threshold(1609344., "yd", 914.4),
    threshold(1609344000., "mi", 1609344.),
    threshold(f64::MAX, "in", INCH),
];

/// Like [`translate`], but picks the display unit from the magnitude of
/// `value`. Pairs without a threshold list use the fixed default unit.
pub fn translate_ranged(schema: Schema, value: f64, dimension: Dimension) -> TranslateResult<'static> {
    let thresholds = match (schema, dimension) {
        (Schema::SI, Dimension::Length) => SI_LENGTH,
        (Schema::SI, Dimension::Area) => SI_AREA,
        (Schema::SI, Dimension::Volume) => SI_VOLUME,
        (Schema::SI, Dimension::Pressure) => SI_PRESSURE,
        (Schema::ImperialUK, Dimension::Length) => IMPERIAL_UK_LENGTH,
        _ => return translate(schema, value, dimension),
    };

    let magnitude = value.abs();
    thresholds
        .iter()
        .find(|t| magnitude < t.below)
        .map(|t| TranslateResult::new(value / t.factor, t.symbol, t.factor))
        .unwrap_or_else(|| translate(schema, value, dimension))
}
