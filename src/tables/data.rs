//! Recognized unit symbols per schema
//!
//! Factors convert a displayed value to canonical units:
//! `canonical = factor * displayed`.

use crate::types::Dimension;

/// One degree in radians
pub const DEGREE: f64 = std::f64::consts::PI / 180.;

/// One meter in canonical length units (mm)
pub const METER: f64 = 1000.;

/// One inch in canonical length units (mm)
pub const INCH: f64 = 25.4;

pub(crate) const SI_UNITS: &[(Dimension, &str, f64)] = &[
    (Dimension::Length, "mm", 1.),
    (Dimension::Length, "m", METER),
    (Dimension::Length, "nm", 1e-6),
    (Dimension::Length, "µm", 0.001),
    (Dimension::Length, "km", 1e6),
    (Dimension::Angle, "rad", 1.),
    (Dimension::Angle, "deg", DEGREE),
    (Dimension::Angle, "°", DEGREE),
    (Dimension::Area, "mm²", 1.),
    (Dimension::Area, "m²", 1e6),
    (Dimension::Area, "km²", 1e12),
    (Dimension::Volume, "mm³", 1.),
    (Dimension::Volume, "m³", 1e9),
    (Dimension::Volume, "km³", 1e18),
    (Dimension::Velocity, "mm/s", 1.),
    (Dimension::Density, "kg/m³", 1.),
    (Dimension::Density, "g/m³", 1000.),
    (Dimension::Density, "g/cm³", 0.001),
    (Dimension::Density, "g/mm³", 1e-6),
    (Dimension::Pressure, "kPa", 1.),
    (Dimension::Pressure, "Pa", 0.001),
    (Dimension::Pressure, "MPa", 1000.),
    (Dimension::Pressure, "GPa", 1e6),
];

pub(crate) const IMPERIAL_UK_UNITS: &[(Dimension, &str, f64)] = &[
    (Dimension::Length, "in", INCH),
    (Dimension::Length, "thou", 0.0254),
    (Dimension::Length, "\"", INCH),
    (Dimension::Length, "'", 304.8),
    (Dimension::Length, "yd", 914.4),
    (Dimension::Length, "mi", 1609344.),
    // Kept as recorded; one square inch is 645.16 mm²
    (Dimension::Area, "in²", 654.16),
    (Dimension::Volume, "in³", 16387.064),
    (Dimension::Velocity, "in/min", INCH / 60.),
];
