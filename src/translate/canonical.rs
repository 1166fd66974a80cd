//! Schema-independent shortcuts for the most common quantities

use uom::si::f64::{Angle, Length, Time, Velocity, Volume};

use crate::tables::{DEGREE, METER};
use crate::types::{CanonicalQuantity, TranslateResult};

pub fn radians(angle: Angle) -> TranslateResult<'static> {
    TranslateResult::new(angle.to_canonical(), "rad", 1.)
}

pub fn degrees(angle: Angle) -> TranslateResult<'static> {
    TranslateResult::new(angle.to_canonical() / DEGREE, "°", DEGREE)
}

pub fn meters(length: Length) -> TranslateResult<'static> {
    TranslateResult::new(length.to_canonical() / METER, "m", METER)
}

pub fn millimeters(length: Length) -> TranslateResult<'static> {
    TranslateResult::new(length.to_canonical(), "mm", 1.)
}

pub fn cubic_millimeters(volume: Volume) -> TranslateResult<'static> {
    TranslateResult::new(volume.to_canonical(), "mm³", 1.)
}

pub fn millimeters_per_second(speed: Velocity) -> TranslateResult<'static> {
    TranslateResult::new(speed.to_canonical(), "mm/s", 1.)
}

pub fn seconds(duration: Time) -> TranslateResult<'static> {
    TranslateResult::new(duration.to_canonical(), "s", 1.)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;
    use uom::si::{
        angle::{degree, radian}, length::{inch, millimeter}, time::minute,
        velocity::meter_per_second, volume::cubic_centimeter,
    };

    #[test]
    fn test_degrees_exactness() {
        for rad in [0.0, PI / 6.0, PI / 2.0, PI, -2.5, 10.0] {
            let result = degrees(Angle::new::<radian>(rad));
            assert_eq!(result.symbol, Some("°"));
            assert_relative_eq!(result.value * result.factor, rad, epsilon = 1e-12);
        }

        let result = degrees(Angle::new::<degree>(90.0));
        assert_relative_eq!(result.value, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_radians() {
        let result = radians(Angle::new::<radian>(1.25));
        assert_eq!(result, TranslateResult::new(1.25, "rad", 1.0));
    }

    #[test]
    fn test_meters_factor() {
        let result = meters(Length::new::<millimeter>(2500.0));
        assert_relative_eq!(result.value, 2.5, epsilon = 1e-12);
        assert_eq!(result.symbol, Some("m"));
        assert_eq!(result.factor, 1000.0);
    }

    #[test]
    fn test_millimeters() {
        let result = millimeters(Length::new::<inch>(1.0));
        assert_relative_eq!(result.value, 25.4, epsilon = 1e-9);
        assert_eq!(result.factor, 1.0);
    }

    #[test]
    fn test_cubic_millimeters() {
        let result = cubic_millimeters(Volume::new::<cubic_centimeter>(1.0));
        assert_relative_eq!(result.value, 1000.0, epsilon = 1e-9);
        assert_eq!(result.symbol, Some("mm³"));
    }

    #[test]
    fn test_velocity_and_time() {
        let result = millimeters_per_second(Velocity::new::<meter_per_second>(0.5));
        assert_relative_eq!(result.value, 500.0, epsilon = 1e-9);
        assert_eq!(result.symbol, Some("mm/s"));

        let result = seconds(Time::new::<minute>(2.0));
        assert_relative_eq!(result.value, 120.0, epsilon = 1e-9);
        assert_eq!(result.symbol, Some("s"));
    }
}
