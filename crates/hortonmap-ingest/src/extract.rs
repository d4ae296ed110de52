//! Positional field extraction from a tokenized row.

use crate::coordinates::resolve_coordinates;
use crate::layout::LayoutVariant;
use crate::report::{AnomalyKind, HoursColumn};
use crate::tokenize::RawRow;

/// The fields of one row that survive into a document, still as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    pub id: String,
    pub dining_hours_blob: String,
    pub drive_thru_hours_blob: String,
    pub latitude: String,
    pub longitude: String,
    /// Double quotes already stripped.
    pub address: String,
    pub phone: String,
    pub layout: LayoutVariant,
    /// False when the coordinate scan found nothing and defaulted to zero.
    pub coordinates_found: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub fields: ExtractedFields,
    pub anomalies: Vec<AnomalyKind>,
}

/// Map a row's tokens to [`ExtractedFields`] using the layout picked from its
/// token count.
///
/// Missing tokens never fail the row: the field becomes empty and an anomaly
/// is recorded.
#[must_use]
pub fn extract_fields(row: &RawRow<'_>) -> Extraction {
    let layout = LayoutVariant::for_token_count(row.len());
    let columns = layout.columns();
    let mut anomalies = Vec::new();

    let mut take = |index: usize, missing: AnomalyKind| -> String {
        row.get(index).map_or_else(
            || {
                anomalies.push(missing);
                String::new()
            },
            str::to_string,
        )
    };

    let dining_hours_blob = take(
        columns.dining_hours,
        AnomalyKind::MissingHoursBlob {
            column: HoursColumn::DiningRoom,
        },
    );
    let drive_thru_hours_blob = take(
        columns.drive_thru_hours,
        AnomalyKind::MissingHoursBlob {
            column: HoursColumn::DriveThru,
        },
    );
    let address = take(columns.address, AnomalyKind::MissingAddress).replace('"', "");
    let phone = take(columns.phone, AnomalyKind::MissingPhone);
    let id = row.get(columns.id).unwrap_or_default().to_string();

    let scan = resolve_coordinates(row.tokens());
    if scan.found_at.is_none() {
        anomalies.push(AnomalyKind::CoordinatesDefaulted);
    }

    Extraction {
        fields: ExtractedFields {
            id,
            dining_hours_blob,
            drive_thru_hours_blob,
            latitude: scan.latitude,
            longitude: scan.longitude,
            address,
            phone,
            layout,
            coordinates_found: scan.found_at.is_some(),
        },
        anomalies,
    }
}
