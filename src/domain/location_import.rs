use crate::domain::GeoPoint;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Wrapper mimicking the payload of a location history import:
/// `{"import_google_locations": {"data": {"locations": [...]}}}`.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationImport<'a> {
    import_google_locations: ImportData<'a>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct ImportData<'a> {
    data: Locations<'a>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Locations<'a> {
    locations: Cow<'a, [GeoPoint]>,
}

impl<'a> LocationImport<'a> {
    pub fn new(locations: &'a [GeoPoint]) -> Self {
        LocationImport {
            import_google_locations: ImportData {
                data: Locations {
                    locations: Cow::Borrowed(locations),
                },
            },
        }
    }

    pub fn into_locations(self) -> Vec<GeoPoint> {
        self.import_google_locations.data.locations.into_owned()
    }
}
