use std::path::Path;

use hortonmap_core::{AppConfig, LocationDocument};
use hortonmap_db::{InMemoryLocationStore, LocationStore, PgLocationStore};

/// Parse the export at `path` and write every document to the store.
///
/// Pending migrations are applied before the insert, so `load` works against
/// a fresh database without a prior `db migrate`. When `dry_run` is `true`
/// the documents go to an in-memory store and the database is never contacted.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the database is unreachable,
/// a migration fails, or the insert fails. Row anomalies are logged, not propagated.
pub(crate) async fn run_load(config: &AppConfig, path: &Path, dry_run: bool) -> anyhow::Result<()> {
    let report = hortonmap_ingest::parse_source(path)?;
    eprintln!("{}", crate::parse::summary_line(&report));

    if dry_run {
        let store = InMemoryLocationStore::new();
        let entered = load_documents(&store, &report.documents).await?;
        println!("dry-run: would enter {entered} documents from {}", path.display());
        return Ok(());
    }

    let pool = crate::db::connect(config).await?;
    let applied = hortonmap_db::run_migrations(&pool).await?;
    tracing::debug!(applied, "migrations applied before load");
    let store = PgLocationStore::new(pool);
    let entered = load_documents(&store, &report.documents).await?;
    println!("entered {entered} documents");
    Ok(())
}

/// Insert `documents` then ensure the geospatial index exists.
///
/// # Errors
///
/// Returns an error if either store operation fails.
pub(crate) async fn load_documents<S: LocationStore>(
    store: &S,
    documents: &[LocationDocument],
) -> anyhow::Result<u64> {
    let entered = store.insert_many(documents).await?;
    store.create_geo_index().await?;
    tracing::info!(entered, "entered {entered} documents!");
    Ok(entered)
}
