//! Row types for the `locations` table.

use chrono::{DateTime, Utc};
use hortonmap_core::{GeoPoint, LocationDocument, StoredLocation, WeeklySchedule};
use sqlx::types::Json;
use uuid::Uuid;

/// Input record for inserting a location.
///
/// Schedules are pre-serialized so a whole batch binds as `jsonb[]`.
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub id: Uuid,
    pub dining_room_hours: serde_json::Value,
    pub drive_thru_hours: serde_json::Value,
    pub longitude: f64,
    pub latitude: f64,
    pub address: String,
    pub phone: String,
}

impl TryFrom<&LocationDocument> for NewLocation {
    type Error = serde_json::Error;

    fn try_from(document: &LocationDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::new_v4(),
            dining_room_hours: serde_json::to_value(&document.dining_room_hours)?,
            drive_thru_hours: serde_json::to_value(&document.drive_thru_hours)?,
            longitude: document.geo.longitude(),
            latitude: document.geo.latitude(),
            address: document.address.clone(),
            phone: document.phone.clone(),
        })
    }
}

/// A row from the `locations` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LocationRow {
    pub id: Uuid,
    pub dining_room_hours: Json<WeeklySchedule>,
    pub drive_thru_hours: Json<WeeklySchedule>,
    pub longitude: f64,
    pub latitude: f64,
    pub address: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl From<LocationRow> for StoredLocation {
    fn from(row: LocationRow) -> Self {
        Self {
            id: row.id,
            document: LocationDocument {
                dining_room_hours: row.dining_room_hours.0,
                drive_thru_hours: row.drive_thru_hours.0,
                geo: GeoPoint::new(row.longitude, row.latitude),
                address: row.address,
                phone: row.phone,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> LocationDocument {
        LocationDocument {
            dining_room_hours: WeeklySchedule::always_open(),
            drive_thru_hours: WeeklySchedule::closed(),
            geo: GeoPoint::new(-79.79, 43.37),
            address: "4000 Mainway".to_string(),
            phone: "9053192663".to_string(),
        }
    }

    #[test]
    fn new_location_splits_point_into_columns() {
        let row = NewLocation::try_from(&document()).unwrap();
        assert_eq!(row.longitude, -79.79);
        assert_eq!(row.latitude, 43.37);
        assert_eq!(row.dining_room_hours["monday"], "24/7");
        assert_eq!(row.drive_thru_hours["sunday"], "closed");
    }

    #[test]
    fn row_maps_back_to_the_same_document() {
        let doc = document();
        let row = LocationRow {
            id: Uuid::new_v4(),
            dining_room_hours: Json(doc.dining_room_hours.clone()),
            drive_thru_hours: Json(doc.drive_thru_hours.clone()),
            longitude: -79.79,
            latitude: 43.37,
            address: doc.address.clone(),
            phone: doc.phone.clone(),
            created_at: Utc::now(),
        };
        let id = row.id;

        let stored = StoredLocation::from(row);
        assert_eq!(stored.id, id);
        assert_eq!(stored.document, doc);
    }
}
