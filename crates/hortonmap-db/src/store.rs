//! The storage seam between the ingest pipeline and its consumers.

use async_trait::async_trait;
use hortonmap_core::{BoundingBox, LocationDocument, StoredLocation};
use uuid::Uuid;

use crate::DbError;

/// A document collection of locations with a geospatial index.
///
/// Implemented by [`crate::PgLocationStore`] for Postgres and by
/// [`crate::InMemoryLocationStore`] for tests and dry runs.
#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Insert every document as a new record. Returns the number inserted.
    async fn insert_many(&self, documents: &[LocationDocument]) -> Result<u64, DbError>;

    /// Ensure the spatial index over `geo` exists. Safe to call repeatedly.
    async fn create_geo_index(&self) -> Result<(), DbError>;

    /// All stored locations, in insertion order.
    async fn find_all(&self) -> Result<Vec<StoredLocation>, DbError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StoredLocation>, DbError>;

    /// Locations whose point lies inside `bbox`, edges included.
    async fn find_within_bounding_box(
        &self,
        bbox: &BoundingBox,
    ) -> Result<Vec<StoredLocation>, DbError>;
}
