use crate::domain::GeoPoint;
use crate::extensions::fixed_point_ext::FromE7;
use std::fmt::{Display, Formatter};

/// What ended up in a written dataset file.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetSummary {
    points: usize,
    bytes: usize,
    bounds: Option<Bounds>,
}

/// Bounding box and time span of a non-empty set of points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min_latitude_e7: i64,
    pub max_latitude_e7: i64,
    pub min_longitude_e7: i64,
    pub max_longitude_e7: i64,
    pub first_timestamp_ms: u64,
    pub last_timestamp_ms: u64,
}

impl DatasetSummary {
    pub fn of(points: &[GeoPoint]) -> Self {
        DatasetSummary {
            points: points.len(),
            bytes: 0,
            bounds: Bounds::of(points),
        }
    }

    pub fn with_bytes(mut self, bytes: usize) -> Self {
        self.bytes = bytes;
        self
    }

    pub fn points(&self) -> usize {
        self.points
    }

    pub fn bytes(&self) -> usize {
        self.bytes
    }
}

impl Bounds {
    pub fn of(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let initial = Bounds {
            min_latitude_e7: first.latitude_e7,
            max_latitude_e7: first.latitude_e7,
            min_longitude_e7: first.longitude_e7,
            max_longitude_e7: first.longitude_e7,
            first_timestamp_ms: first.timestamp_ms,
            last_timestamp_ms: first.timestamp_ms,
        };

        Some(rest.iter().fold(initial, |bounds, point| Bounds {
            min_latitude_e7: bounds.min_latitude_e7.min(point.latitude_e7),
            max_latitude_e7: bounds.max_latitude_e7.max(point.latitude_e7),
            min_longitude_e7: bounds.min_longitude_e7.min(point.longitude_e7),
            max_longitude_e7: bounds.max_longitude_e7.max(point.longitude_e7),
            first_timestamp_ms: bounds.first_timestamp_ms.min(point.timestamp_ms),
            last_timestamp_ms: bounds.last_timestamp_ms.max(point.timestamp_ms),
        }))
    }
}

impl Display for DatasetSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} point(s), {} byte(s)", self.points, self.bytes)?;
        if let Some(bounds) = &self.bounds {
            write!(
                f,
                ", lat [{:.5}, {:.5}], lon [{:.5}, {:.5}], timestamps [{}, {}] ms",
                bounds.min_latitude_e7.e7_to_degrees(),
                bounds.max_latitude_e7.e7_to_degrees(),
                bounds.min_longitude_e7.e7_to_degrees(),
                bounds.max_longitude_e7.e7_to_degrees(),
                bounds.first_timestamp_ms,
                bounds.last_timestamp_ms
            )?;
        }
        Ok(())
    }
}
