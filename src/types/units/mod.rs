mod display;
mod explicit_unit_values;

pub use display::{DisplayPoint, DisplayTranslated};
pub use explicit_unit_values::{
    AngleValue, AreaValue, DensityValue, LengthValue, PressureValue, UnitError,
    VelocityValue, VolumeValue, WithUnit,
};
