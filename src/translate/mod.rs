//! Canonical values to display values
//!
//! The default display unit of each schema is fixed per dimension and does
//! not consult the schema tables. Those only drive parsing.

pub mod canonical;
mod ranged;

pub use canonical::{
    cubic_millimeters, degrees, meters, millimeters, millimeters_per_second, radians, seconds,
};
pub use ranged::translate_ranged;

use nalgebra as na;

use crate::tables::INCH;
use crate::types::{CanonicalQuantity, Dimension, Schema, TranslateResult};

/// One square inch in canonical area units (mm²)
const SQUARE_INCH: f64 = 645.16;

/// Factor reported alongside Imperial UK areas, as recorded in the unit table
const SQUARE_INCH_FACTOR: f64 = 654.16;

/// One cubic inch in canonical volume units (mm³)
const CUBIC_INCH: f64 = 16387.064;

/// One inch per minute in canonical velocity units (mm/s)
const INCH_PER_MINUTE: f64 = INCH / 60.;

/// Express a canonical `value` of `dimension` in the default unit of `schema`
pub fn translate(schema: Schema, value: f64, dimension: Dimension) -> TranslateResult<'static> {
    match schema {
        Schema::SI => translate_si(value, dimension),
        Schema::ImperialUK => translate_imperial_uk(value, dimension),
    }
}

/// Translate a typed quantity through its canonical value
pub fn translate_quantity<Q: CanonicalQuantity>(schema: Schema, quantity: Q) -> TranslateResult<'static> {
    translate(schema, quantity.to_canonical(), Q::DIMENSION)
}

/// Translate each axis of a canonical point as a length.
///
/// Returns the display coordinates and the shared length symbol.
pub fn translate_point(schema: Schema, point: &na::Point3<f64>) -> (na::Point3<f64>, &'static str) {
    let x = translate(schema, point.x, Dimension::Length);
    let y = translate(schema, point.y, Dimension::Length);
    let z = translate(schema, point.z, Dimension::Length);

    (na::Point3::new(x.value, y.value, z.value), x.symbol_or_empty())
}

fn translate_si(value: f64, dimension: Dimension) -> TranslateResult<'static> {
    match dimension {
        Dimension::Length => TranslateResult::new(value, "mm", 1.),
        Dimension::Area => TranslateResult::new(value, "mm²", 1.),
        Dimension::Volume => TranslateResult::new(value, "mm³", 1.),
        Dimension::Velocity => TranslateResult::new(value, "mm/s", 1.),
        Dimension::Density => TranslateResult::new(value, "kg/m³", 1.),
        Dimension::Pressure => TranslateResult::new(value, "kPa", 1.),
        Dimension::None
        | Dimension::Mass
        | Dimension::Time
        | Dimension::ElectricCurrent
        | Dimension::ThermodynamicTemperature
        | Dimension::AmountOfSubstance
        | Dimension::LuminousIntensity
        | Dimension::Angle
        | Dimension::Acceleration => base_unit(value, dimension),
    }
}

fn translate_imperial_uk(value: f64, dimension: Dimension) -> TranslateResult<'static> {
    match dimension {
        Dimension::Length => TranslateResult::new(value / INCH, "in", INCH),
        Dimension::Area => TranslateResult::new(value / SQUARE_INCH, "in²", SQUARE_INCH_FACTOR),
        Dimension::Volume => TranslateResult::new(value / CUBIC_INCH, "in³", CUBIC_INCH),
        Dimension::Velocity => TranslateResult::new(value / INCH_PER_MINUTE, "in/min", INCH_PER_MINUTE),
        Dimension::None
        | Dimension::Mass
        | Dimension::Time
        | Dimension::ElectricCurrent
        | Dimension::ThermodynamicTemperature
        | Dimension::AmountOfSubstance
        | Dimension::LuminousIntensity
        | Dimension::Angle
        | Dimension::Density
        | Dimension::Pressure
        | Dimension::Acceleration => base_unit(value, dimension),
    }
}

fn base_unit(value: f64, dimension: Dimension) -> TranslateResult<'static> {
    TranslateResult::new(value, dimension.symbol(), 1.)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use uom::si::f64::{Length, Pressure};
    use uom::si::{length::meter, pressure::megapascal};

    #[test]
    fn test_si_default_units() {
        for value in [0.0, -12.5, 1e9] {
            let result = translate(Schema::SI, value, Dimension::Length);
            assert_eq!(result.symbol, Some("mm"));
            assert_eq!(result.factor, 1.0);
            assert_eq!(result.value, value);
        }

        assert_eq!(translate(Schema::SI, 1.0, Dimension::Area).symbol, Some("mm²"));
        assert_eq!(translate(Schema::SI, 1.0, Dimension::Volume).symbol, Some("mm³"));
        assert_eq!(translate(Schema::SI, 1.0, Dimension::Velocity).symbol, Some("mm/s"));
        assert_eq!(translate(Schema::SI, 1.0, Dimension::Density).symbol, Some("kg/m³"));
        assert_eq!(translate(Schema::SI, 1.0, Dimension::Pressure).symbol, Some("kPa"));
    }

    #[test]
    fn test_si_fallback_uses_base_symbol() {
        let result = translate(Schema::SI, 1.5, Dimension::Angle);
        assert_eq!(result, TranslateResult::new(1.5, "rad", 1.0));

        let result = translate(Schema::SI, 3.0, Dimension::Acceleration);
        assert_eq!(result, TranslateResult::new(3.0, "m/s²", 1.0));

        let result = translate(Schema::SI, 7.0, Dimension::None);
        assert_eq!(result, TranslateResult::new(7.0, "", 1.0));
    }

    #[test]
    fn test_imperial_length() {
        for value in [25.4, 0.0, -100.0, 1e6] {
            let result = translate(Schema::ImperialUK, value, Dimension::Length);
            assert_eq!(result.factor, 25.4);
            assert_eq!(result.symbol, Some("in"));
            assert_relative_eq!(result.value, value / 25.4);
        }
    }

    #[test]
    fn test_imperial_area_keeps_recorded_factor() {
        let result = translate(Schema::ImperialUK, 645.16, Dimension::Area);
        assert_relative_eq!(result.value, 1.0);
        assert_eq!(result.symbol, Some("in²"));
        assert_eq!(result.factor, 654.16);
    }

    #[test]
    fn test_imperial_volume_and_velocity() {
        let result = translate(Schema::ImperialUK, 16387.064, Dimension::Volume);
        assert_relative_eq!(result.value, 1.0);
        assert_eq!(result.symbol, Some("in³"));

        let result = translate(Schema::ImperialUK, 25.4 / 60.0, Dimension::Velocity);
        assert_relative_eq!(result.value, 1.0, epsilon = 1e-12);
        assert_eq!(result.symbol, Some("in/min"));
        assert_relative_eq!(result.factor, 25.4 / 60.0);
    }

    #[test]
    fn test_imperial_falls_back_like_si() {
        for dimension in [Dimension::Angle, Dimension::Mass, Dimension::Time, Dimension::Pressure] {
            let imperial = translate(Schema::ImperialUK, 2.0, dimension);
            assert_eq!(imperial, TranslateResult::new(2.0, dimension.symbol(), 1.0));
        }
    }

    #[test]
    fn test_every_dimension_translates() {
        for schema in Schema::ALL {
            for dimension in Dimension::ALL {
                let result = translate(schema, 10.0, dimension);
                assert!(result.symbol.is_some());
                assert!(result.factor > 0.0);
            }
        }
    }

    #[test]
    fn test_translate_quantity() {
        let result = translate_quantity(Schema::SI, Length::new::<meter>(1.5));
        assert_relative_eq!(result.value, 1500.0, epsilon = 1e-9);
        assert_eq!(result.symbol, Some("mm"));

        let result = translate_quantity(Schema::ImperialUK, Length::new::<meter>(0.0254));
        assert_relative_eq!(result.value, 1.0, epsilon = 1e-9);

        let result = translate_quantity(Schema::SI, Pressure::new::<megapascal>(1.0));
        assert_relative_eq!(result.value, 1000.0, epsilon = 1e-9);
        assert_eq!(result.symbol, Some("kPa"));
    }

    #[test]
    fn test_translate_point() {
        let point = na::Point3::new(25.4, 50.8, 0.0);

        let (display, symbol) = translate_point(Schema::ImperialUK, &point);
        assert_eq!(symbol, "in");
        assert_relative_eq!(display.x, 1.0);
        assert_relative_eq!(display.y, 2.0);
        assert_relative_eq!(display.z, 0.0);

        let (display, symbol) = translate_point(Schema::SI, &point);
        assert_eq!(symbol, "mm");
        assert_eq!(display, point);
    }
}
