//! Typed quantities to and from canonical values
//!
//! Canonical units are not uniformly SI: geometry is stored in millimeters
//! (mm, mm², mm³, mm/s), angles in radians, time in seconds, density in
//! kg/m³ and pressure in kPa.

use nalgebra as na;
use uom::si::f64::{
    AmountOfSubstance, Angle, Area, ElectricCurrent, Length, LuminousIntensity, Mass,
    MassDensity, Pressure, ThermodynamicTemperature, Time, Velocity, Volume,
};
use uom::si::{
    amount_of_substance::mole, angle::radian, area::square_millimeter,
    electric_current::ampere, length::millimeter, luminous_intensity::candela, mass::kilogram,
    mass_density::kilogram_per_cubic_meter, pressure::kilopascal,
    thermodynamic_temperature::kelvin, time::second, velocity::millimeter_per_second,
    volume::cubic_millimeter,
};

use crate::types::Dimension;

/// A uom quantity with a fixed canonical unit
pub trait CanonicalQuantity: Sized {
    const DIMENSION: Dimension;

    /// Magnitude expressed in the canonical unit of `DIMENSION`
    fn to_canonical(&self) -> f64;

    fn from_canonical(value: f64) -> Self;
}

macro_rules! canonical_quantity {
    ($quantity:ty, $dimension:expr, $unit:ty) => {
        impl CanonicalQuantity for $quantity {
            const DIMENSION: Dimension = $dimension;

            #[inline]
            fn to_canonical(&self) -> f64 {
                self.get::<$unit>()
            }

            #[inline]
            fn from_canonical(value: f64) -> Self {
                <$quantity>::new::<$unit>(value)
            }
        }
    };
}

canonical_quantity!(Length, Dimension::Length, millimeter);
canonical_quantity!(Area, Dimension::Area, square_millimeter);
canonical_quantity!(Volume, Dimension::Volume, cubic_millimeter);
canonical_quantity!(Velocity, Dimension::Velocity, millimeter_per_second);
canonical_quantity!(Angle, Dimension::Angle, radian);
canonical_quantity!(Time, Dimension::Time, second);
canonical_quantity!(Mass, Dimension::Mass, kilogram);
canonical_quantity!(MassDensity, Dimension::Density, kilogram_per_cubic_meter);
canonical_quantity!(Pressure, Dimension::Pressure, kilopascal);
canonical_quantity!(ElectricCurrent, Dimension::ElectricCurrent, ampere);
canonical_quantity!(ThermodynamicTemperature, Dimension::ThermodynamicTemperature, kelvin);
canonical_quantity!(AmountOfSubstance, Dimension::AmountOfSubstance, mole);
canonical_quantity!(LuminousIntensity, Dimension::LuminousIntensity, candela);

/// Canonical point (mm) from uom lengths
pub fn point_from_lengths(x: Length, y: Length, z: Length) -> na::Point3<f64> {
    na::Point3::new(x.to_canonical(), y.to_canonical(), z.to_canonical())
}

/// Extract X coordinate as Length
pub fn x_length(point: &na::Point3<f64>) -> Length {
    Length::from_canonical(point.x)
}

/// Extract Y coordinate as Length
pub fn y_length(point: &na::Point3<f64>) -> Length {
    Length::from_canonical(point.y)
}

pub fn z_length(point: &na::Point3<f64>) -> Length {
    Length::from_canonical(point.z)
}
