use crate::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A campaign object (NPC, location, session, timeline event, ...).
///
/// `entity_type` is an open-ended tag: built-in types and user-defined ones
/// share the same space. Custom field values live in `fields`, keyed by the
/// `key` of the type's field definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
    #[serde(default)]
    pub links: Vec<Link>,
    /// GM-only notes. Never exported.
    #[serde(default)]
    pub notes: String,
    /// Explicit visibility flag. `None` defers to configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_visible: Option<bool>,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Entity {
    /// Creates an entity with empty content and zeroed timestamps.
    pub fn new(
        id: impl Into<String>,
        entity_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            entity_type: entity_type.into(),
            name: name.into(),
            description: String::new(),
            summary: None,
            image_url: None,
            tags: Vec::new(),
            fields: BTreeMap::new(),
            links: Vec::new(),
            notes: String::new(),
            player_visible: None,
            created_at: 0,
            updated_at: 0,
            metadata: BTreeMap::new(),
        }
    }

    /// Returns a custom field value.
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Returns a custom field value if it is a string.
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(FieldValue::as_str)
    }

    /// Returns a metadata entry.
    pub fn metadata_value(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.get(key)
    }
}

/// Qualitative strength of a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStrength {
    Weak,
    Moderate,
    Strong,
}

/// A directed relationship from one entity to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    #[serde(default)]
    pub source_id: String,
    pub target_id: String,
    pub target_type: String,
    pub relationship: String,
    #[serde(default)]
    pub bidirectional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_relationship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<LinkStrength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_visible: Option<bool>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
}

impl Link {
    /// Creates a one-way link with no optional attributes set.
    pub fn new(
        id: impl Into<String>,
        target_id: impl Into<String>,
        target_type: impl Into<String>,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: String::new(),
            target_id: target_id.into(),
            target_type: target_type.into(),
            relationship: relationship.into(),
            bidirectional: false,
            reverse_relationship: None,
            strength: None,
            notes: None,
            player_visible: None,
            created_at: 0,
            updated_at: 0,
            metadata: None,
        }
    }
}
