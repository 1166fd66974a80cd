//! Physical dimensions known to the unit system
//!
//! The set is closed. Every consumer matches it exhaustively, so adding a
//! variant fails the build until each dispatch site handles it.

use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimension {
    /// Untyped or dimensionless value
    #[default]
    None,

    // Base
    Length,
    Mass,
    Time,
    ElectricCurrent,
    ThermodynamicTemperature,
    AmountOfSubstance,
    LuminousIntensity,
    Angle,

    // Derived
    Area,
    Volume,
    Velocity,
    Acceleration,
    Density,
    Pressure,
}

impl Dimension {
    pub const ALL: [Dimension; 15] = [
        Dimension::None,
        Dimension::Length,
        Dimension::Mass,
        Dimension::Time,
        Dimension::ElectricCurrent,
        Dimension::ThermodynamicTemperature,
        Dimension::AmountOfSubstance,
        Dimension::LuminousIntensity,
        Dimension::Angle,
        Dimension::Area,
        Dimension::Volume,
        Dimension::Velocity,
        Dimension::Acceleration,
        Dimension::Density,
        Dimension::Pressure,
    ];

    /// Base SI symbol, used when a schema has nothing better to show
    pub fn symbol(self) -> &'static str {
        match self {
            Dimension::None => "",
            Dimension::Length => "m",
            Dimension::Mass => "kg",
            Dimension::Time => "s",
            Dimension::ElectricCurrent => "A",
            Dimension::ThermodynamicTemperature => "K",
            Dimension::AmountOfSubstance => "mol",
            Dimension::LuminousIntensity => "cd",
            Dimension::Angle => "rad",
            Dimension::Area => "m²",
            Dimension::Volume => "m³",
            Dimension::Velocity => "m/s",
            Dimension::Acceleration => "m/s²",
            Dimension::Density => "kg/m³",
            Dimension::Pressure => "kg/m.s²",
        }
    }

    pub fn is_base(self) -> bool {
        match self {
            Dimension::Length
            | Dimension::Mass
            | Dimension::Time
            | Dimension::ElectricCurrent
            | Dimension::ThermodynamicTemperature
            | Dimension::AmountOfSubstance
            | Dimension::LuminousIntensity
            | Dimension::Angle => true,
            Dimension::None
            | Dimension::Area
            | Dimension::Volume
            | Dimension::Velocity
            | Dimension::Acceleration
            | Dimension::Density
            | Dimension::Pressure => false,
        }
    }

    pub fn is_derived(self) -> bool {
        self != Dimension::None && !self.is_base()
    }

    pub fn name(self) -> &'static str {
        match self {
            Dimension::None => "dimensionless",
            Dimension::Length => "length",
            Dimension::Mass => "mass",
            Dimension::Time => "time",
            Dimension::ElectricCurrent => "electric current",
            Dimension::ThermodynamicTemperature => "thermodynamic temperature",
            Dimension::AmountOfSubstance => "amount of substance",
            Dimension::LuminousIntensity => "luminous intensity",
            Dimension::Angle => "angle",
            Dimension::Area => "area",
            Dimension::Volume => "volume",
            Dimension::Velocity => "velocity",
            Dimension::Acceleration => "acceleration",
            Dimension::Density => "density",
            Dimension::Pressure => "pressure",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
