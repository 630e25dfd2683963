//! Campaign player export
//!
//! Turns a GM's campaign snapshot into the document players get to see.
//!
//! Usage:
//!   campaign-export --snapshot campaign.json --config export.toml --output players.json

use anyhow::Result;
use campaign_export_cli::{run_export, ExportOptions};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "campaign-export")]
#[command(about = "Export campaign data for players")]
struct Args {
    /// Campaign snapshot JSON (entities and entity types)
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Player export configuration (.json or .toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON document
    #[arg(long)]
    pretty: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let options = ExportOptions {
        snapshot: args.snapshot,
        config: args.config,
        output: args.output,
        pretty: args.pretty,
    };
    let summary = run_export(&options)?;

    info!(
        "Exported {} of {} entities ({} excluded)",
        summary.included,
        summary.total,
        summary.excluded_count()
    );
    for (reason, count) in &summary.excluded {
        info!("  {}: {}", reason, count);
    }
    Ok(())
}
