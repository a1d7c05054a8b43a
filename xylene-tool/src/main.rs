mod config;
mod error;

#[cfg(feature = "dialog")]
mod dialog;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use xylene_core::{LocationDirectory, MemoryDirectory, StoredLocation, resolve_location};
use xylene_directory::DirectoryClient;

use crate::error::XylError;

#[derive(Parser)]
#[command(name = "xyl")]
#[command(about = "Xylene tools for campus asset locations", long_about = None)]
struct Cli {
    /// Directory API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Bearer token for the directory API
    #[arg(long, global = true)]
    token: Option<String>,

    /// Serve lookups from a TOML fixture instead of the remote API
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[cfg(feature = "dialog")]
    /// Open the interactive asset-location dialog
    Dialog {
        /// Edit mode: the asset's stored zone id
        #[arg(long, conflicts_with = "asset_area")]
        asset_zone: Option<String>,

        /// Edit mode: the asset's stored outdoor area id
        #[arg(long)]
        asset_area: Option<String>,
    },

    /// Reconstruct the ancestor path of a stored location
    Resolve {
        #[arg(long, conflicts_with = "area")]
        zone: Option<String>,

        #[arg(long)]
        area: Option<String>,
    },
}

fn open_directory(cli: &Cli) -> Result<Arc<dyn LocationDirectory>, XylError> {
    if let Some(path) = &cli.fixture {
        let content = std::fs::read_to_string(path)?;
        let directory: MemoryDirectory = toml::from_str(&content)?;
        return Ok(Arc::new(directory));
    }

    let (base_url, token) = config::resolve_api(cli.base_url.clone(), cli.token.clone())?;
    Ok(match token {
        Some(token) => Arc::new(DirectoryClient::with_token(base_url, token)),
        None => Arc::new(DirectoryClient::new(base_url)),
    })
}

fn stored_location(zone: Option<String>, area: Option<String>) -> StoredLocation {
    match (zone, area) {
        (Some(zone), _) => StoredLocation::Zone(zone),
        (None, Some(area)) => StoredLocation::Area(area),
        (None, None) => StoredLocation::Unassigned,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let directory = open_directory(&cli)?;

    match cli.command {
        #[cfg(feature = "dialog")]
        Command::Dialog {
            asset_zone,
            asset_area,
        } => {
            let stored = stored_location(asset_zone, asset_area);
            dialog::run(directory, stored).await?;
        }
        Command::Resolve { zone, area } => {
            let stored = stored_location(zone, area);
            let path = resolve_location(directory.as_ref(), &stored)
                .await
                .map_err(XylError::from)?;
            println!("{}", serde_json::to_string_pretty(&path.selection)?);
        }
    }

    Ok(())
}
