//! Whole-campaign export: snapshot in, player document out.

use crate::config::PlayerExportFieldConfig;
use crate::error::{ExportError, ExportResult};
use crate::filter::{index_type_definitions, redact_entity, PlayerEntity};
use crate::visibility::{explain_entity_visibility, EntityVisibility, ExclusionReason};
use campaign_model::{Entity, EntityTypeDefinition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// A campaign's entities and type schemas, as handed over by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSnapshot {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub entity_types: Vec<EntityTypeDefinition>,
}

impl CampaignSnapshot {
    /// Reads a snapshot from a JSON file.
    pub fn load_from(path: impl AsRef<Path>) -> ExportResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Counts of what an export kept and dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    pub total: usize,
    pub included: usize,
    pub excluded: BTreeMap<ExclusionReason, usize>,
}

impl ExportSummary {
    pub fn excluded_count(&self) -> usize {
        self.excluded.values().sum()
    }
}

/// The player-facing document plus an operator summary.
///
/// Only `entities` is serialized; the summary never reaches players.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerExport {
    pub entities: Vec<PlayerEntity>,
    #[serde(skip)]
    pub summary: ExportSummary,
}

/// Runs the player export over a whole snapshot.
pub fn export_campaign(
    snapshot: &CampaignSnapshot,
    config: Option<&PlayerExportFieldConfig>,
) -> PlayerExport {
    let types = index_type_definitions(&snapshot.entity_types);
    let mut summary = ExportSummary {
        total: snapshot.entities.len(),
        ..ExportSummary::default()
    };

    let mut entities = Vec::with_capacity(snapshot.entities.len());
    for entity in &snapshot.entities {
        match explain_entity_visibility(entity, config) {
            EntityVisibility::Visible => {
                let type_definition = types.get(entity.entity_type.as_str()).copied();
                entities.push(redact_entity(entity, type_definition, config));
            }
            EntityVisibility::Excluded(reason) => {
                debug!("Excluding entity {} from player export: {}", entity.id, reason);
                *summary.excluded.entry(reason).or_default() += 1;
            }
        }
    }
    summary.included = entities.len();

    info!(
        "Player export: {} of {} entities included, {} excluded",
        summary.included,
        summary.total,
        summary.excluded_count()
    );
    PlayerExport { entities, summary }
}
