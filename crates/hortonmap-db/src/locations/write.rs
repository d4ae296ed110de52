//! Write operations for the `locations` table.

use sqlx::PgPool;

use super::types::NewLocation;

/// Insert a batch of locations in one round-trip.
///
/// Uses a single `INSERT … SELECT * FROM UNNEST(…)`; rows keep the order of
/// `locations` in the `ordinal` column. Returns the number of rows inserted.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn insert_locations(pool: &PgPool, locations: &[NewLocation]) -> Result<u64, sqlx::Error> {
    if locations.is_empty() {
        return Ok(0);
    }

    // Collect each column into a parallel Vec for UNNEST binding.
    let mut ids = Vec::with_capacity(locations.len());
    let mut dining_room_hours = Vec::with_capacity(locations.len());
    let mut drive_thru_hours = Vec::with_capacity(locations.len());
    let mut longitudes = Vec::with_capacity(locations.len());
    let mut latitudes = Vec::with_capacity(locations.len());
    let mut addresses = Vec::with_capacity(locations.len());
    let mut phones = Vec::with_capacity(locations.len());

    for loc in locations {
        ids.push(loc.id);
        dining_room_hours.push(loc.dining_room_hours.clone());
        drive_thru_hours.push(loc.drive_thru_hours.clone());
        longitudes.push(loc.longitude);
        latitudes.push(loc.latitude);
        addresses.push(loc.address.clone());
        phones.push(loc.phone.clone());
    }

    let rows_affected = sqlx::query(
        "INSERT INTO locations \
             (id, dining_room_hours, drive_thru_hours, longitude, latitude, address, phone) \
         SELECT * FROM UNNEST(\
              $1::uuid[], $2::jsonb[], $3::jsonb[], $4::float8[], $5::float8[], \
              $6::text[], $7::text[])",
    )
    .bind(&ids)
    .bind(&dining_room_hours)
    .bind(&drive_thru_hours)
    .bind(&longitudes)
    .bind(&latitudes)
    .bind(&addresses)
    .bind(&phones)
    .execute(pool)
    .await?
    .rows_affected();

    Ok(rows_affected)
}

/// Create the GiST index over each location's point.
///
/// The indexed expression matches the one used by
/// [`super::list_locations_in_box`], so bounding-box lookups can use it.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the statement fails.
pub async fn create_geo_index(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS locations_geo_idx \
         ON locations USING GIST (point(longitude, latitude))",
    )
    .execute(pool)
    .await?;
    Ok(())
}
