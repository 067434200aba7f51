use crate::domain::{GeoLocation, GeoPoint, Radius, TimeWindow};
use crate::extensions::fixed_point_ext::E7Conversions;
use rand::Rng;
use std::f64::consts::PI;

/// Draws locations uniformly by area from a disk around `center` with timestamps from `time_window`.
#[derive(Clone, Debug)]
pub struct PointSampler {
    center: GeoLocation,
    radius: Radius,
    time_window: TimeWindow,
}

impl PointSampler {
    pub fn new(center: GeoLocation, radius: Radius, time_window: TimeWindow) -> Self {
        PointSampler {
            center,
            radius,
            time_window,
        }
    }

    pub fn center(&self) -> GeoLocation {
        self.center
    }

    pub fn sample_random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> GeoPoint {
        let u: f64 = rng.random();
        let v: f64 = rng.random();

        // sqrt keeps the density uniform over the area instead of the radius
        let w = self.radius.degrees() * u.sqrt();
        let t = 2.0 * PI * v;
        let x = w * t.cos();
        let y = w * t.sin();

        GeoPoint {
            latitude_e7: (self.center.latitude + y).to_e7(),
            longitude_e7: (self.center.longitude + x).to_e7(),
            timestamp_ms: self.sample_timestamp(rng),
        }
    }

    pub fn generate_dataset<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<GeoPoint> {
        (0..count).map(|_| self.sample_random_point(rng)).collect()
    }

    fn sample_timestamp<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        if self.time_window.window_ms() == 0 {
            return self.time_window.start_ms();
        }
        rng.random_range(self.time_window.start_ms()..self.time_window.end_ms())
    }
}
