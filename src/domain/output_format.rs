use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Layout of a dataset file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// A bare JSON array of locations.
    Flat,
    /// Locations nested inside a [`LocationImport`](crate::domain::LocationImport) envelope.
    Envelope,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Flat => write!(f, "flat"),
            OutputFormat::Envelope => write!(f, "envelope"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("flat", OutputFormat::Flat)]
    #[case("envelope", OutputFormat::Envelope)]
    fn deserializes_valid_format(#[case] format: &str, #[case] expected: OutputFormat) {
        let result = serde_json::from_value::<OutputFormat>(json!(format)).unwrap();
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case("Flat")]
    #[case("csv")]
    fn fails_for_an_unknown_format(#[case] format: &str) {
        let result = serde_json::from_value::<OutputFormat>(json!(format));
        assert!(result.is_err());
    }
}
