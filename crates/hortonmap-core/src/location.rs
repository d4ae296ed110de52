//! Normalized location documents and the geometry used to query them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schedule::WeeklySchedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeoType {
    Point,
}

/// GeoJSON point. Coordinates are stored longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: GeoType,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: GeoType::Point,
            coordinates: [longitude, latitude],
        }
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    /// True for the `(0, 0)` placeholder written when a row had no usable
    /// coordinates.
    #[must_use]
    pub fn is_origin(&self) -> bool {
        self.coordinates == [0.0, 0.0]
    }
}

/// One normalized store location, ready for storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDocument {
    pub dining_room_hours: WeeklySchedule,
    pub drive_thru_hours: WeeklySchedule,
    pub geo: GeoPoint,
    pub address: String,
    pub phone: String,
}

/// A [`LocationDocument`] as read back from a store, with its assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLocation {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub document: LocationDocument,
}

/// Rectangle given by its north-east and south-west corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub ne_lat: f64,
    pub ne_long: f64,
    pub sw_lat: f64,
    pub sw_long: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn new(ne_lat: f64, ne_long: f64, sw_lat: f64, sw_long: f64) -> Self {
        Self {
            ne_lat,
            ne_long,
            sw_lat,
            sw_long,
        }
    }

    /// Closed polygon ring in `[longitude, latitude]` pairs, starting and
    /// ending at the south-west corner.
    #[must_use]
    pub fn ring(&self) -> [[f64; 2]; 5] {
        [
            [self.sw_long, self.sw_lat],
            [self.sw_long, self.ne_lat],
            [self.ne_long, self.ne_lat],
            [self.ne_long, self.sw_lat],
            [self.sw_long, self.sw_lat],
        ]
    }

    /// Edges are inclusive. Swapped corners describe the same rectangle.
    #[must_use]
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let (lng, lat) = (point.longitude(), point.latitude());
        let (west, east) = (self.sw_long.min(self.ne_long), self.sw_long.max(self.ne_long));
        let (south, north) = (self.sw_lat.min(self.ne_lat), self.sw_lat.max(self.ne_lat));
        (west..=east).contains(&lng) && (south..=north).contains(&lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> LocationDocument {
        LocationDocument {
            dining_room_hours: WeeklySchedule::closed(),
            drive_thru_hours: WeeklySchedule::always_open(),
            geo: GeoPoint::new(-79.79, 43.37),
            address: "4000 MAINWAY".to_string(),
            phone: "9053192663".to_string(),
        }
    }

    #[test]
    fn geo_point_serializes_as_geojson_longitude_first() {
        let json = serde_json::to_value(GeoPoint::new(-79.79, 43.37)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "Point", "coordinates": [-79.79, 43.37] })
        );
    }

    #[test]
    fn document_uses_camel_case_keys() {
        let json = serde_json::to_value(sample_document()).unwrap();
        let obj = json.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["diningRoomHours", "driveThruHours", "geo", "address", "phone"]
        );
        assert_eq!(json["driveThruHours"]["wednesday"], "24/7");
    }

    #[test]
    fn stored_location_flattens_document_under_id() {
        let id = Uuid::nil();
        let stored = StoredLocation {
            id,
            document: sample_document(),
        };
        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["_id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["address"], "4000 MAINWAY");
        let back: StoredLocation = serde_json::from_value(json).unwrap();
        assert_eq!(back, stored);
    }

    #[test]
    fn bounding_box_ring_is_closed() {
        let bbox = BoundingBox::new(54.4567, 60.234, 39.3456, 43.2345);
        let ring = bbox.ring();
        assert_eq!(ring[0], ring[4]);
        assert_eq!(ring[0], [43.2345, 39.3456]);
        assert_eq!(ring[2], [60.234, 54.4567]);
    }

    #[test]
    fn bounding_box_contains_is_inclusive() {
        let bbox = BoundingBox::new(45.0, -75.0, 43.0, -80.0);
        assert!(bbox.contains(&GeoPoint::new(-79.79, 43.37)));
        assert!(bbox.contains(&GeoPoint::new(-80.0, 43.0)));
        assert!(!bbox.contains(&GeoPoint::new(-73.56, 45.50)));
        assert!(!bbox.contains(&GeoPoint::new(0.0, 0.0)));
    }

    #[test]
    fn origin_point_is_flagged() {
        assert!(GeoPoint::new(0.0, 0.0).is_origin());
        assert!(!GeoPoint::new(-79.79, 43.37).is_origin());
    }
}
