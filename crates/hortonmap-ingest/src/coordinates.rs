//! Latitude/longitude recovery.
//!
//! The decimal coordinate columns drift even within one layout, so instead of
//! reading fixed positions the row is scanned for the first numeric token.

/// First token index considered by the scan.
pub const COORDINATE_SCAN_START: usize = 10;

/// Raw coordinate text found by [`resolve_coordinates`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateScan {
    pub latitude: String,
    /// Empty when the latitude was the last token of the row.
    pub longitude: String,
    /// Index of the latitude token; `None` when the scan found nothing and
    /// both values defaulted to `"0"`.
    pub found_at: Option<usize>,
}

impl CoordinateScan {
    fn defaulted() -> Self {
        Self {
            latitude: "0".to_string(),
            longitude: "0".to_string(),
            found_at: None,
        }
    }
}

/// Scan `tokens` from [`COORDINATE_SCAN_START`] for the first numeric token.
///
/// That token is the latitude and the next one the longitude. Without a
/// numeric token both default to zero.
#[must_use]
pub fn resolve_coordinates(tokens: &[&str]) -> CoordinateScan {
    tokens
        .iter()
        .enumerate()
        .skip(COORDINATE_SCAN_START)
        .find(|(_, token)| parse_coordinate(token).is_some())
        .map_or_else(CoordinateScan::defaulted, |(index, latitude)| {
            CoordinateScan {
                latitude: (*latitude).to_string(),
                longitude: tokens
                    .get(index + 1)
                    .map(|t| (*t).to_string())
                    .unwrap_or_default(),
                found_at: Some(index),
            }
        })
}

/// Parse a coordinate token as a finite number.
#[must_use]
pub fn parse_coordinate(token: &str) -> Option<f64> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(tail: &[&'static str]) -> Vec<&'static str> {
        let mut tokens = vec!["x"; COORDINATE_SCAN_START];
        tokens.extend_from_slice(tail);
        tokens
    }

    #[test]
    fn finds_first_numeric_pair_after_start() {
        let tokens = padded(&["Ontario", "43.37", "-79.79", "L7M"]);
        let scan = resolve_coordinates(&tokens);
        assert_eq!(scan.latitude, "43.37");
        assert_eq!(scan.longitude, "-79.79");
        assert_eq!(scan.found_at, Some(11));
    }

    #[test]
    fn ignores_numeric_tokens_before_start() {
        let mut tokens = padded(&["45.5", "-73.6"]);
        tokens[0] = "1234";
        tokens[9] = "99.9";
        let scan = resolve_coordinates(&tokens);
        assert_eq!(scan.latitude, "45.5");
        assert_eq!(scan.found_at, Some(10));
    }

    #[test]
    fn defaults_to_zero_without_numeric_token() {
        let tokens = padded(&["MAINWAY", "\"43.37\""]);
        let scan = resolve_coordinates(&tokens);
        assert_eq!(scan.latitude, "0");
        assert_eq!(scan.longitude, "0");
        assert!(scan.found_at.is_none());
    }

    #[test]
    fn defaults_to_zero_for_short_rows() {
        let tokens = ["1", "43.37", "-79.79"];
        let scan = resolve_coordinates(&tokens);
        assert!(scan.found_at.is_none());
        assert_eq!((scan.latitude.as_str(), scan.longitude.as_str()), ("0", "0"));
    }

    #[test]
    fn latitude_as_last_token_leaves_longitude_empty() {
        let tokens = padded(&["43.37"]);
        let scan = resolve_coordinates(&tokens);
        assert_eq!(scan.latitude, "43.37");
        assert_eq!(scan.longitude, "");
    }

    #[test]
    fn parse_coordinate_rejects_non_finite() {
        assert_eq!(parse_coordinate("43.37"), Some(43.37));
        assert_eq!(parse_coordinate("-79"), Some(-79.0));
        assert!(parse_coordinate("NaN").is_none());
        assert!(parse_coordinate("inf").is_none());
        assert!(parse_coordinate("L7M").is_none());
    }
}
