//! Custom field redaction.

use crate::config::{PlayerExportFieldConfig, VisibilityOverrides};
use crate::overrides::{entity_overrides, resolve_override};
use campaign_model::{Entity, FieldDefinition, FieldValue};
use std::collections::{BTreeMap, HashSet};

/// Custom field that always holds GM notes.
pub const NOTES_FIELD: &str = "notes";
/// Session field holding the GM's preparation.
pub const PREPARATION_FIELD: &str = "preparation";

/// Optional context for field redaction.
///
/// An empty scope reproduces the structural rules only: hidden keys, notes
/// and session preparation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldScope<'a> {
    /// Selects the category override map. Falls back to the entity's type.
    pub entity_type: Option<&'a str>,
    /// Supplies the per-entity override map from its metadata.
    pub entity: Option<&'a Entity>,
    /// Already-parsed per-entity overrides. Takes the place of the entity's
    /// metadata when set.
    pub entity_overrides: Option<&'a VisibilityOverrides>,
    /// Hidden-section definitions are added to the hidden keys.
    pub field_defs: Option<&'a [FieldDefinition]>,
    pub config: Option<&'a PlayerExportFieldConfig>,
}

impl<'a> FieldScope<'a> {
    /// Scope for one entity: its type, its overrides, nothing else.
    pub fn for_entity(entity: &'a Entity) -> Self {
        Self {
            entity_type: Some(entity.entity_type.as_str()),
            entity: Some(entity),
            ..Self::default()
        }
    }

    pub fn with_field_defs(mut self, field_defs: &'a [FieldDefinition]) -> Self {
        self.field_defs = Some(field_defs);
        self
    }

    pub fn with_entity_overrides(mut self, overrides: Option<&'a VisibilityOverrides>) -> Self {
        self.entity_overrides = overrides;
        self
    }

    pub fn with_config(mut self, config: Option<&'a PlayerExportFieldConfig>) -> Self {
        self.config = config;
        self
    }

    fn entity_type(&self) -> Option<&'a str> {
        self.entity_type
            .or_else(|| self.entity.map(|e| e.entity_type.as_str()))
    }
}

/// Filters a field map using structural rules only.
pub fn filter_fields_for_player(
    fields: &BTreeMap<String, FieldValue>,
    hidden_keys: &[String],
    is_session: bool,
) -> BTreeMap<String, FieldValue> {
    filter_fields_for_player_with(fields, hidden_keys, is_session, &FieldScope::default())
}

/// Filters a field map down to the keys players may see.
///
/// For each key: an explicit override (per-entity, then per-category)
/// decides; otherwise `notes`, session `preparation` and hidden keys are
/// dropped; everything else is kept. Values are copied unchanged.
pub fn filter_fields_for_player_with(
    fields: &BTreeMap<String, FieldValue>,
    hidden_keys: &[String],
    is_session: bool,
    scope: &FieldScope<'_>,
) -> BTreeMap<String, FieldValue> {
    let parsed;
    let per_entity = match scope.entity_overrides {
        Some(overrides) => Some(overrides),
        None => {
            parsed = scope.entity.and_then(entity_overrides);
            parsed.as_ref()
        }
    };
    let per_category = scope
        .config
        .zip(scope.entity_type())
        .and_then(|(config, entity_type)| config.field_overrides_for(entity_type));

    let mut hidden: HashSet<&str> = hidden_keys.iter().map(String::as_str).collect();
    if let Some(defs) = scope.field_defs {
        hidden.extend(defs.iter().filter(|d| d.is_hidden()).map(|d| d.key.as_str()));
    }

    fields
        .iter()
        .filter(|(key, _)| {
            resolve_override(per_entity, per_category, key)
                .unwrap_or_else(|| !is_hidden_by_default(key, is_session, &hidden))
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn is_hidden_by_default(key: &str, is_session: bool, hidden: &HashSet<&str>) -> bool {
    key == NOTES_FIELD || (is_session && key == PREPARATION_FIELD) || hidden.contains(key)
}
