mod conversion;
mod dimension;
mod result;
mod schema;
pub mod units;

pub use conversion::{point_from_lengths, x_length, y_length, z_length, CanonicalQuantity};
pub use dimension::Dimension;
pub use result::TranslateResult;
pub use schema::Schema;
pub use units::*;

pub use uom::si::f64::{
    AmountOfSubstance, Angle, Area, ElectricCurrent, Length, LuminousIntensity, Mass,
    MassDensity, Pressure, ThermodynamicTemperature, Time, Velocity, Volume,
};

// Re-export nalgebra
pub use nalgebra as na;

