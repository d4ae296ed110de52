//! `db` subcommands and the shared pool constructor.

use clap::Subcommand;
use hortonmap_core::AppConfig;
use sqlx::PgPool;

#[derive(Debug, Subcommand)]
pub enum DbCommands {
    /// Check that the database is reachable
    Ping,
    /// Apply pending migrations
    Migrate,
}

/// Open a pool from the configured `DATABASE_URL`.
///
/// # Errors
///
/// Returns an error if `DATABASE_URL` is unset or the connection fails.
pub(crate) async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let pool = hortonmap_db::connect_pool_from_config(config).await?;
    tracing::debug!(env = %config.env, "connected to database");
    Ok(pool)
}

pub(crate) async fn run_db(config: &AppConfig, command: &DbCommands) -> anyhow::Result<()> {
    let pool = connect(config).await?;
    match command {
        DbCommands::Ping => {
            hortonmap_db::health_check(&pool).await?;
            println!("database ok");
        }
        DbCommands::Migrate => {
            let applied = hortonmap_db::run_migrations(&pool).await?;
            println!("applied {applied} migration(s)");
        }
    }
    Ok(())
}
