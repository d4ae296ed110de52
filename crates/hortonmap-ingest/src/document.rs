//! Assembly of a [`LocationDocument`] from extracted fields.

use hortonmap_core::{GeoPoint, LocationDocument, WeeklySchedule};

use crate::coordinates::parse_coordinate;
use crate::extract::ExtractedFields;
use crate::hours::normalize_hours;
use crate::report::{AnomalyKind, HoursColumn};

#[derive(Debug, Clone)]
pub struct BuiltDocument {
    pub document: LocationDocument,
    pub anomalies: Vec<AnomalyKind>,
}

/// Build the document for one row.
///
/// Never fails: a malformed hours blob becomes an all-closed schedule and a
/// coordinate that does not parse becomes zero, each with an anomaly.
#[must_use]
pub fn build_document(fields: &ExtractedFields) -> BuiltDocument {
    let mut anomalies = Vec::new();

    let dining_room_hours = schedule_for(
        &fields.dining_hours_blob,
        HoursColumn::DiningRoom,
        &mut anomalies,
    );
    let drive_thru_hours = schedule_for(
        &fields.drive_thru_hours_blob,
        HoursColumn::DriveThru,
        &mut anomalies,
    );

    let latitude = coordinate_or_zero(&fields.latitude, &mut anomalies);
    let longitude = coordinate_or_zero(&fields.longitude, &mut anomalies);

    BuiltDocument {
        document: LocationDocument {
            dining_room_hours,
            drive_thru_hours,
            geo: GeoPoint::new(longitude, latitude),
            address: fields.address.replace('"', ""),
            phone: fields.phone.clone(),
        },
        anomalies,
    }
}

fn schedule_for(
    blob: &str,
    column: HoursColumn,
    anomalies: &mut Vec<AnomalyKind>,
) -> WeeklySchedule {
    match normalize_hours(blob) {
        Ok(hours) => {
            anomalies.extend(
                hours
                    .unparsed_times
                    .into_iter()
                    .map(|value| AnomalyKind::UnparseableTime { column, value }),
            );
            hours.schedule
        }
        Err(error) => {
            anomalies.push(AnomalyKind::MalformedHours {
                column,
                reason: error.to_string(),
            });
            WeeklySchedule::closed()
        }
    }
}

fn coordinate_or_zero(raw: &str, anomalies: &mut Vec<AnomalyKind>) -> f64 {
    parse_coordinate(raw).unwrap_or_else(|| {
        anomalies.push(AnomalyKind::InvalidCoordinate {
            value: raw.to_string(),
        });
        0.0
    })
}
