//! Database operations for the `locations` table.

mod read;
mod types;
mod write;

use hortonmap_core::{BoundingBox, LocationDocument, StoredLocation};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{DbError, LocationStore};

pub use read::{get_location, list_locations, list_locations_in_box};
pub use types::{LocationRow, NewLocation};
pub use write::{create_geo_index, insert_locations};

/// [`LocationStore`] backed by a Postgres pool owned by the caller.
#[derive(Debug, Clone)]
pub struct PgLocationStore {
    pool: PgPool,
}

impl PgLocationStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl LocationStore for PgLocationStore {
    async fn insert_many(&self, documents: &[LocationDocument]) -> Result<u64, DbError> {
        let rows = documents
            .iter()
            .map(NewLocation::try_from)
            .collect::<Result<Vec<_>, serde_json::Error>>()?;
        let inserted = insert_locations(&self.pool, &rows).await?;
        tracing::debug!(inserted, "inserted location documents");
        Ok(inserted)
    }

    async fn create_geo_index(&self) -> Result<(), DbError> {
        create_geo_index(&self.pool).await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<StoredLocation>, DbError> {
        let rows = list_locations(&self.pool).await?;
        Ok(rows.into_iter().map(StoredLocation::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StoredLocation>, DbError> {
        Ok(get_location(&self.pool, id).await?.map(StoredLocation::from))
    }

    async fn find_within_bounding_box(
        &self,
        bbox: &BoundingBox,
    ) -> Result<Vec<StoredLocation>, DbError> {
        let rows = list_locations_in_box(&self.pool, bbox).await?;
        Ok(rows.into_iter().map(StoredLocation::from).collect())
    }
}
