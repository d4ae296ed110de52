mod db;
mod load;
mod parse;
mod query;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::db::DbCommands;
use crate::query::QueryCommands;

#[derive(Debug, Parser)]
#[command(name = "hortonmap")]
#[command(about = "Parse restaurant location exports and load them into a geo-indexed store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse an export and print the documents as JSON
    Parse {
        /// Export file to read
        path: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Parse an export and insert the documents, applying pending migrations first
    Load {
        /// Export file to read (defaults to `HORTONMAP_SOURCE_PATH`)
        path: Option<PathBuf>,
        /// Parse and count documents without touching the database
        #[arg(long)]
        dry_run: bool,
    },
    /// Read stored locations
    Query {
        #[command(subcommand)]
        command: QueryCommands,
    },
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = hortonmap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Parse { path, pretty } => parse::run_parse(&path, pretty)?,
        Commands::Load { path, dry_run } => {
            let path = path.unwrap_or_else(|| config.source_path.clone());
            load::run_load(&config, &path, dry_run).await?;
        }
        Commands::Query { command } => {
            let pool = db::connect(&config).await?;
            query::run_query(&hortonmap_db::PgLocationStore::new(pool), &command).await?;
        }
        Commands::Db { command } => db::run_db(&config, &command).await?,
    }

    Ok(())
}

/// Print `value` as JSON on stdout.
fn print_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests;
