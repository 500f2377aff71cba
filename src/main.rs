use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use confsync::modules::conference::descriptors;
use confsync::{FrenchKitClient, ImportService, JsonFileStore};

#[derive(Parser, Debug)]
#[command(name = "confsync")]
#[command(about = "Import conference schedule and speaker data into the local datastore")]
struct Args {
    /// Conference id to import (see --list)
    #[arg(short, long)]
    conference: Option<String>,

    /// Directory for conference batch files (default: $CONFSYNC_DATA_DIR or ./data)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Fetch and map only, skip the datastore write
    #[arg(long)]
    dry_run: bool,

    /// List known conference ids and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let args = Args::parse();

    if args.list {
        for descriptor in descriptors::all() {
            println!("{}", descriptor.conference_id);
        }
        return Ok(());
    }

    let conference = args
        .conference
        .context("--conference is required (use --list to see known ids)")?;
    let descriptor = descriptors::find(&conference)
        .with_context(|| format!("unknown conference '{}'", conference))?;

    let data_dir = args
        .data_dir
        .or_else(|| std::env::var("CONFSYNC_DATA_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("data"));

    let source = Arc::new(FrenchKitClient::new(&descriptor)?);
    let store = Arc::new(JsonFileStore::new(&data_dir));
    let service = ImportService::new(source, store);

    if args.dry_run {
        let batch = service.fetch_batch(&descriptor).await?;
        info!(
            "Dry run for {}: {} sessions, {} rooms, {} speakers (nothing written)",
            descriptor.conference_id,
            batch.sessions.len(),
            batch.rooms.len(),
            batch.speakers.len()
        );
    } else {
        let report = service.run(&descriptor).await?;
        info!(
            "Import of {} complete: {} sessions, {} rooms, {} speakers",
            descriptor.conference_id, report.sessions, report.rooms, report.speakers
        );
    }

    Ok(())
}
