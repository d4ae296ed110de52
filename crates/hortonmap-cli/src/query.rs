//! Read-only `query` subcommands.

use clap::Subcommand;
use hortonmap_core::{BoundingBox, StoredLocation};
use hortonmap_db::{DbError, LocationStore};
use uuid::Uuid;

#[derive(Debug, Subcommand)]
pub enum QueryCommands {
    /// Every stored location
    All,
    /// One location by id
    Id {
        id: Uuid,
    },
    /// Locations inside a bounding box
    Bbox {
        /// North-east corner latitude
        #[arg(long, allow_negative_numbers = true)]
        ne_lat: f64,
        /// North-east corner longitude
        #[arg(long, allow_negative_numbers = true)]
        ne_long: f64,
        /// South-west corner latitude
        #[arg(long, allow_negative_numbers = true)]
        sw_lat: f64,
        /// South-west corner longitude
        #[arg(long, allow_negative_numbers = true)]
        sw_long: f64,
    },
}

pub(crate) async fn run_query<S: LocationStore>(
    store: &S,
    command: &QueryCommands,
) -> anyhow::Result<()> {
    let locations = fetch(store, command).await?;
    crate::print_json(&locations, true)
}

/// Resolve a query against `store`.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] when `query id` matches nothing, or the
/// store's error if the lookup fails.
pub(crate) async fn fetch<S: LocationStore>(
    store: &S,
    command: &QueryCommands,
) -> Result<Vec<StoredLocation>, DbError> {
    match command {
        QueryCommands::All => store.find_all().await,
        QueryCommands::Id { id } => {
            let location = store.find_by_id(*id).await?.ok_or(DbError::NotFound)?;
            Ok(vec![location])
        }
        QueryCommands::Bbox {
            ne_lat,
            ne_long,
            sw_lat,
            sw_long,
        } => {
            let bbox = BoundingBox::new(*ne_lat, *ne_long, *sw_lat, *sw_long);
            let found = store.find_within_bounding_box(&bbox).await?;
            tracing::debug!(count = found.len(), "bounding box query");
            Ok(found)
        }
    }
}

#[cfg(test)]
mod tests {
    use hortonmap_core::{GeoPoint, LocationDocument, WeeklySchedule};
    use hortonmap_db::InMemoryLocationStore;

    use super::*;

    async fn seeded() -> InMemoryLocationStore {
        let store = InMemoryLocationStore::new();
        let documents: Vec<LocationDocument> = [(-79.79, 43.37), (-73.56, 45.50)]
            .into_iter()
            .map(|(lng, lat)| LocationDocument {
                dining_room_hours: WeeklySchedule::closed(),
                drive_thru_hours: WeeklySchedule::closed(),
                geo: GeoPoint::new(lng, lat),
                address: String::new(),
                phone: String::new(),
            })
            .collect();
        store.insert_many(&documents).await.unwrap();
        store
    }

    #[tokio::test]
    async fn all_returns_everything() {
        let store = seeded().await;
        assert_eq!(fetch(&store, &QueryCommands::All).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = seeded().await;
        let err = fetch(&store, &QueryCommands::Id { id: Uuid::new_v4() })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound));
    }

    #[tokio::test]
    async fn known_id_returns_that_location() {
        let store = seeded().await;
        let first = store.find_all().await.unwrap().remove(0);
        let found = fetch(&store, &QueryCommands::Id { id: first.id })
            .await
            .unwrap();
        assert_eq!(found, vec![first]);
    }

    #[tokio::test]
    async fn bbox_filters_by_point() {
        let store = seeded().await;
        let command = QueryCommands::Bbox {
            ne_lat: 44.0,
            ne_long: -79.0,
            sw_lat: 43.0,
            sw_long: -80.0,
        };
        let found = fetch(&store, &command).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].document.geo.coordinates, [-79.79, 43.37]);
    }
}
