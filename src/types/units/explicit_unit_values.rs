use serde::{self, Deserialize, Serialize};
use std::marker::PhantomData;
use uom::si::f64::{Angle, Area, Length, MassDensity, Pressure, Velocity, Volume};

use crate::parse::{parse_quantity, ParseError};
use crate::tables::{find_by_symbol, UnitInfo};
use crate::types::{CanonicalQuantity, Dimension};

/// A value paired with the unit symbol it was written in, e.g. in a
/// settings or document file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WithUnit<T> {
    pub value: f64,
    pub unit: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

pub type LengthValue = WithUnit<Length>;
pub type AreaValue = WithUnit<Area>;
pub type VolumeValue = WithUnit<Volume>;
pub type VelocityValue = WithUnit<Velocity>;
pub type AngleValue = WithUnit<Angle>;
pub type DensityValue = WithUnit<MassDensity>;
pub type PressureValue = WithUnit<Pressure>;

impl<T> WithUnit<T> {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
            _marker: PhantomData,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Unit {unit} is a {found} unit, expected {expected}")]
    DimensionMismatch {
        unit: String,
        expected: Dimension,
        found: Dimension,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl<T: CanonicalQuantity> WithUnit<T> {
    /// Parse text such as `"12.5mm"`; a bare number is rejected
    pub fn from_text(text: &str) -> Result<Self, UnitError> {
        let parsed = parse_quantity(text)?;
        if parsed.dimension != T::DIMENSION {
            return Err(UnitError::DimensionMismatch {
                unit: parsed.symbol().unwrap_or_default().to_string(),
                expected: T::DIMENSION,
                found: parsed.dimension,
            });
        }

        Ok(Self::new(parsed.literal(), parsed.symbol().unwrap_or_default()))
    }

    pub fn to_quantity(&self) -> Result<T, UnitError> {
        let row = unit_row::<T>(&self.unit)?;
        Ok(T::from_canonical(self.value * row.factor))
    }

    pub fn from_quantity(quantity: T, unit: &str) -> Result<Self, UnitError> {
        let row = unit_row::<T>(unit)?;
        Ok(Self::new(quantity.to_canonical() / row.factor, unit))
    }
}

fn unit_row<T: CanonicalQuantity>(unit: &str) -> Result<&'static UnitInfo, UnitError> {
    let row = find_by_symbol(unit).ok_or_else(|| UnitError::UnknownUnit(unit.to_string()))?;
    if row.dimension != T::DIMENSION {
        return Err(UnitError::DimensionMismatch {
            unit: unit.to_string(),
            expected: T::DIMENSION,
            found: row.dimension,
        });
    }
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use uom::si::{angle::degree, length::{foot, inch, millimeter}, pressure::megapascal};

    #[test]
    fn test_length_value() {
        let value = LengthValue::new(2.0, "in");
        let length = value.to_quantity().unwrap();
        assert_relative_eq!(length.get::<millimeter>(), 50.8, epsilon = 1e-9);

        let value = LengthValue::new(1.0, "'");
        assert_relative_eq!(value.to_quantity().unwrap().get::<foot>(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_from_quantity() {
        let value = LengthValue::from_quantity(Length::new::<inch>(3.0), "mm").unwrap();
        assert_relative_eq!(value.value, 76.2, epsilon = 1e-9);
        assert_eq!(value.unit, "mm");

        let value = AngleValue::from_quantity(Angle::new::<degree>(45.0), "deg").unwrap();
        assert_relative_eq!(value.value, 45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_unit() {
        let value = LengthValue::new(1.0, "furlong");
        assert!(matches!(value.to_quantity(), Err(UnitError::UnknownUnit(_))));
    }

    #[test]
    fn test_dimension_mismatch() {
        let value = LengthValue::new(1.0, "kPa");
        match value.to_quantity() {
            Err(UnitError::DimensionMismatch { expected, found, .. }) => {
                assert_eq!(expected, Dimension::Length);
                assert_eq!(found, Dimension::Pressure);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_text() {
        let value = PressureValue::from_text("2.5MPa").unwrap();
        assert_eq!(value.value, 2.5);
        assert_eq!(value.unit, "MPa");
        assert_relative_eq!(value.to_quantity().unwrap().get::<megapascal>(), 2.5, epsilon = 1e-9);

        assert!(matches!(AngleValue::from_text("3mm"), Err(UnitError::DimensionMismatch { .. })));
        assert!(matches!(AngleValue::from_text("30"), Err(UnitError::DimensionMismatch { .. })));
        assert!(matches!(AngleValue::from_text("x"), Err(UnitError::Parse(_))));
    }

    #[test]
    fn test_serde_json() {
        let value: VolumeValue = serde_json::from_str(r#"{"value": 2.0, "unit": "in³"}"#).unwrap();
        assert_eq!(value.unit, "in³");
        assert_relative_eq!(value.to_quantity().unwrap().to_canonical(), 32774.128, epsilon = 1e-6);

        let json = serde_json::to_string(&LengthValue::new(1.5, "m")).unwrap();
        assert_eq!(json, r#"{"value":1.5,"unit":"m"}"#);
    }
}
