use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single generated location in E7 fixed-point degrees.
///
/// The field names and the string-encoded timestamp follow the location history export format the datasets mimic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub latitude_e7: i64,
    pub longitude_e7: i64,
    #[serde(with = "timestamp_string")]
    pub timestamp_ms: u64,
}

mod timestamp_string {
    use super::*;

    pub fn serialize<S>(timestamp_ms: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(timestamp_ms)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value
            .parse()
            .map_err(|_| Error::invalid_value(Unexpected::Str(&value), &"a string holding milliseconds since the epoch"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn serializes_timestamp_as_a_string() -> Result<(), serde_json::Error> {
        let point = GeoPoint {
            latitude_e7: 525200000,
            longitude_e7: -134050000,
            timestamp_ms: 1600129528950,
        };

        let value = serde_json::to_value(&point)?;

        assert_eq!(
            value,
            json!({ "latitudeE7": 525200000, "longitudeE7": -134050000, "timestampMs": "1600129528950" })
        );
        Ok(())
    }

    #[test]
    fn deserializes_a_location() -> Result<(), serde_json::Error> {
        let value = json!({ "latitudeE7": 1, "longitudeE7": 2, "timestampMs": "3" });

        let point: GeoPoint = serde_json::from_value(value)?;

        assert_eq!(
            point,
            GeoPoint {
                latitude_e7: 1,
                longitude_e7: 2,
                timestamp_ms: 3,
            }
        );
        Ok(())
    }

    #[rstest]
    #[case::numeric_timestamp(json!({ "latitudeE7": 1, "longitudeE7": 2, "timestampMs": 3 }))]
    #[case::non_numeric_timestamp(json!({ "latitudeE7": 1, "longitudeE7": 2, "timestampMs": "soon" }))]
    #[case::negative_timestamp(json!({ "latitudeE7": 1, "longitudeE7": 2, "timestampMs": "-3" }))]
    #[case::float_latitude(json!({ "latitudeE7": 1.5, "longitudeE7": 2, "timestampMs": "3" }))]
    #[case::missing_longitude(json!({ "latitudeE7": 1, "timestampMs": "3" }))]
    fn fails_for_an_invalid_location(#[case] value: serde_json::Value) {
        let result = serde_json::from_value::<GeoPoint>(value);
        assert!(result.is_err());
    }
}
