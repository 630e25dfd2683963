//! Player export runner shared by the `campaign-export` binary and its tests.

use anyhow::{Context, Result};
use campaign_export::{
    export_campaign, CampaignSnapshot, ExportSummary, PlayerExport, PlayerExportFieldConfig,
};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// What to export and where to write it.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub snapshot: PathBuf,
    pub config: Option<PathBuf>,
    /// Destination file. `None` writes to stdout.
    pub output: Option<PathBuf>,
    pub pretty: bool,
}

/// Loads the inputs, runs the export and writes the player document.
pub fn run_export(options: &ExportOptions) -> Result<ExportSummary> {
    let snapshot = CampaignSnapshot::load_from(&options.snapshot)
        .with_context(|| format!("Failed to load snapshot {:?}", options.snapshot))?;
    debug!(
        "Loaded {} entities and {} entity types",
        snapshot.entities.len(),
        snapshot.entity_types.len()
    );

    let config = options
        .config
        .as_ref()
        .map(|path| {
            PlayerExportFieldConfig::load_from(path)
                .with_context(|| format!("Failed to load export config {:?}", path))
        })
        .transpose()?;

    let export = export_campaign(&snapshot, config.as_ref());
    let document = render(&export, options.pretty)?;

    match &options.output {
        Some(path) => {
            fs::write(path, document).with_context(|| format!("Failed to write {:?}", path))?;
            info!("Wrote player export to {:?}", path);
        }
        None => println!("{document}"),
    }

    Ok(export.summary)
}

/// Serializes the player-facing part of an export.
pub fn render(export: &PlayerExport, pretty: bool) -> Result<String> {
    let document = if pretty {
        serde_json::to_string_pretty(export)
    } else {
        serde_json::to_string(export)
    };
    document.context("Failed to serialize player export")
}
