//! Operator-supplied player export configuration.
//!
//! Both maps are keyed by entity type. A type that is absent from a map has
//! no opinion and defers to the next layer of the cascade.

use crate::attribute::CoreAttribute;
use crate::error::{ExportError, ExportResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Explicit visibility decisions keyed by custom field key or core key
/// (`__core_*`). A key that is absent means "no decision".
pub type VisibilityOverrides = BTreeMap<String, bool>;

/// Category- and field-level visibility chosen by the Game Master.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerExportFieldConfig {
    /// Whole-category default visibility per entity type.
    #[serde(default)]
    pub category_visibility: BTreeMap<String, bool>,
    /// Per-field overrides per entity type, core keys included.
    #[serde(default)]
    pub field_visibility: BTreeMap<String, VisibilityOverrides>,
}

impl PlayerExportFieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration file. The format is chosen by extension
    /// (`.json` or `.toml`).
    pub fn load_from(path: impl AsRef<Path>) -> ExportResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> ExportResult<Self> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => return Err(ExportError::UnsupportedFormat(path.display().to_string())),
        };

        let contents = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = parse(&contents)?;

        info!(
            "Loaded player export config from {:?} ({} categories, {} field maps)",
            path,
            config.category_visibility.len(),
            config.field_visibility.len()
        );
        Ok(config)
    }

    pub fn from_json_str(contents: &str) -> ExportResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_toml_str(contents: &str) -> ExportResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns the explicit category decision for an entity type, if any.
    pub fn category_visibility_for(&self, entity_type: &str) -> Option<bool> {
        self.category_visibility.get(entity_type).copied()
    }

    /// Returns the field override map for an entity type, if any.
    pub fn field_overrides_for(&self, entity_type: &str) -> Option<&VisibilityOverrides> {
        self.field_visibility.get(entity_type)
    }

    /// Sets the category default for an entity type.
    pub fn with_category_visibility(mut self, entity_type: &str, visible: bool) -> Self {
        self.category_visibility.insert(entity_type.to_string(), visible);
        self
    }

    /// Sets a custom field override for an entity type.
    pub fn with_field_visibility(
        mut self,
        entity_type: &str,
        field_key: &str,
        visible: bool,
    ) -> Self {
        self.field_visibility
            .entry(entity_type.to_string())
            .or_default()
            .insert(field_key.to_string(), visible);
        self
    }

    /// Sets a core attribute override for an entity type.
    pub fn with_core_visibility(
        self,
        entity_type: &str,
        attribute: CoreAttribute,
        visible: bool,
    ) -> Self {
        self.with_field_visibility(entity_type, attribute.override_key(), visible)
    }
}
