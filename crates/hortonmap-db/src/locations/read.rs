//! Read operations for the `locations` table.

use hortonmap_core::BoundingBox;
use sqlx::PgPool;
use uuid::Uuid;

use super::types::LocationRow;

/// List every location in insertion order.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_locations(pool: &PgPool) -> Result<Vec<LocationRow>, sqlx::Error> {
    sqlx::query_as::<_, LocationRow>(
        "SELECT id, dining_room_hours, drive_thru_hours, longitude, latitude, \
                address, phone, created_at \
         FROM locations \
         ORDER BY ordinal ASC",
    )
    .fetch_all(pool)
    .await
}

/// Fetch one location by its id.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn get_location(pool: &PgPool, id: Uuid) -> Result<Option<LocationRow>, sqlx::Error> {
    sqlx::query_as::<_, LocationRow>(
        "SELECT id, dining_room_hours, drive_thru_hours, longitude, latitude, \
                address, phone, created_at \
         FROM locations \
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List locations whose point lies inside `bbox`, edges included.
///
/// `box(...)` normalizes its corners, so the result does not depend on which
/// corner is north-east.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_locations_in_box(
    pool: &PgPool,
    bbox: &BoundingBox,
) -> Result<Vec<LocationRow>, sqlx::Error> {
    sqlx::query_as::<_, LocationRow>(
        "SELECT id, dining_room_hours, drive_thru_hours, longitude, latitude, \
                address, phone, created_at \
         FROM locations \
         WHERE point(longitude, latitude) <@ box(point($1, $2), point($3, $4)) \
         ORDER BY ordinal ASC",
    )
    .bind(bbox.sw_long)
    .bind(bbox.sw_lat)
    .bind(bbox.ne_long)
    .bind(bbox.ne_lat)
    .fetch_all(pool)
    .await
}
