//! Process-local [`LocationStore`] used by tests and `load --dry-run`.

use std::sync::atomic::{AtomicBool, Ordering};

use hortonmap_core::{BoundingBox, LocationDocument, StoredLocation};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{DbError, LocationStore};

#[derive(Debug, Default)]
pub struct InMemoryLocationStore {
    locations: RwLock<Vec<StoredLocation>>,
    geo_indexed: AtomicBool,
}

impl InMemoryLocationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`LocationStore::create_geo_index`] has been called.
    #[must_use]
    pub fn has_geo_index(&self) -> bool {
        self.geo_indexed.load(Ordering::Acquire)
    }

    pub async fn len(&self) -> usize {
        self.locations.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.locations.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl LocationStore for InMemoryLocationStore {
    async fn insert_many(&self, documents: &[LocationDocument]) -> Result<u64, DbError> {
        let mut locations = self.locations.write().await;
        locations.extend(documents.iter().cloned().map(|document| StoredLocation {
            id: Uuid::new_v4(),
            document,
        }));
        Ok(documents.len() as u64)
    }

    async fn create_geo_index(&self) -> Result<(), DbError> {
        self.geo_indexed.store(true, Ordering::Release);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<StoredLocation>, DbError> {
        Ok(self.locations.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StoredLocation>, DbError> {
        Ok(self
            .locations
            .read()
            .await
            .iter()
            .find(|location| location.id == id)
            .cloned())
    }

    async fn find_within_bounding_box(
        &self,
        bbox: &BoundingBox,
    ) -> Result<Vec<StoredLocation>, DbError> {
        Ok(self
            .locations
            .read()
            .await
            .iter()
            .filter(|location| bbox.contains(&location.document.geo))
            .cloned()
            .collect())
    }
}
