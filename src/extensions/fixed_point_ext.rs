/// Scale of the E7 fixed-point encoding: degrees multiplied by 10^7.
pub const E7_SCALE: f64 = 1e7;

/// Conversions between decimal degrees and E7 fixed-point integers.
pub trait E7Conversions {
    /// Returns `self` in degrees as an E7 integer, truncated toward zero.
    fn to_e7(self) -> i64;
}

pub trait FromE7 {
    /// Returns the E7 integer `self` in decimal degrees.
    fn e7_to_degrees(self) -> f64;
}

impl E7Conversions for f64 {
    fn to_e7(self) -> i64 {
        (self * E7_SCALE) as i64
    }
}

impl FromE7 for i64 {
    fn e7_to_degrees(self) -> f64 {
        self as f64 / E7_SCALE
    }
}
