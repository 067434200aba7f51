use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};

/// Approximate length of one degree of latitude in meters.
pub const METERS_PER_DEGREE: f64 = 111_300.0;

/// The radius of a sampling disk in meters, always finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Radius(f64);

impl Radius {
    pub fn from_meters(meters: f64) -> Option<Self> {
        (meters.is_finite() && meters >= 0.0).then_some(Radius(meters))
    }

    pub fn meters(&self) -> f64 {
        self.0
    }

    pub fn degrees(&self) -> f64 {
        self.0 / METERS_PER_DEGREE
    }
}

impl<'de> Deserialize<'de> for Radius {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let meters = f64::deserialize(deserializer)?;
        Radius::from_meters(meters).ok_or_else(|| Error::invalid_value(Unexpected::Float(meters), &"a radius of zero or more meters"))
    }
}
