//! Entity and collection filters that compose the redactors.

use crate::config::PlayerExportFieldConfig;
use crate::core_attributes::redact_core_attributes;
use crate::fields::{filter_fields_for_player_with, FieldScope};
use crate::hidden::hidden_field_keys;
use crate::links::PlayerLink;
use crate::overrides::entity_overrides;
use crate::visibility::{explain_entity_visibility, EntityVisibility};
use campaign_model::{Entity, EntityTypeDefinition, FieldValue};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Entity type whose `preparation` field is GM-only.
pub const SESSION_TYPE: &str = "session";

/// An entity as players see it.
///
/// `id`, `type` and `name` are copied verbatim. Everything else has been
/// through the redactors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntity {
    pub id: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub fields: BTreeMap<String, FieldValue>,
    pub links: Vec<PlayerLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// Produces the player view of one entity, or `None` if it is excluded.
///
/// Without a type definition no field is structurally hidden, but the notes
/// and session preparation rules still apply.
pub fn filter_entity_for_player(
    entity: &Entity,
    type_definition: Option<&EntityTypeDefinition>,
    config: Option<&PlayerExportFieldConfig>,
) -> Option<PlayerEntity> {
    match explain_entity_visibility(entity, config) {
        EntityVisibility::Visible => Some(redact_entity(entity, type_definition, config)),
        EntityVisibility::Excluded(reason) => {
            debug!("Excluding entity {} from player export: {}", entity.id, reason);
            None
        }
    }
}

/// Filters a collection, keeping visible entities in their original order.
///
/// Each entity is matched to the first type definition with the same type.
pub fn filter_entities_for_player(
    entities: &[Entity],
    type_definitions: &[EntityTypeDefinition],
    config: Option<&PlayerExportFieldConfig>,
) -> Vec<PlayerEntity> {
    let types = index_type_definitions(type_definitions);
    entities
        .iter()
        .filter_map(|entity| {
            let type_definition = types.get(entity.entity_type.as_str()).copied();
            filter_entity_for_player(entity, type_definition, config)
        })
        .collect()
}

pub(crate) fn index_type_definitions(
    type_definitions: &[EntityTypeDefinition],
) -> HashMap<&str, &EntityTypeDefinition> {
    let mut types = HashMap::with_capacity(type_definitions.len());
    for def in type_definitions {
        types.entry(def.entity_type.as_str()).or_insert(def);
    }
    types
}

/// Redacts an entity already known to be visible.
pub(crate) fn redact_entity(
    entity: &Entity,
    type_definition: Option<&EntityTypeDefinition>,
    config: Option<&PlayerExportFieldConfig>,
) -> PlayerEntity {
    let field_defs = type_definition.map(|def| def.field_definitions.as_slice());
    let hidden_keys = field_defs.map(hidden_field_keys).unwrap_or_default();
    let is_session = entity.entity_type == SESSION_TYPE;

    let per_entity = entity_overrides(entity);
    let scope = FieldScope {
        entity_type: Some(entity.entity_type.as_str()),
        entity_overrides: per_entity.as_ref(),
        field_defs,
        config,
        ..FieldScope::default()
    };
    let fields = filter_fields_for_player_with(&entity.fields, &hidden_keys, is_session, &scope);

    let per_category = config.and_then(|c| c.field_overrides_for(&entity.entity_type));
    let core = redact_core_attributes(entity, per_entity.as_ref(), per_category);

    PlayerEntity {
        id: entity.id.clone(),
        entity_type: entity.entity_type.clone(),
        name: entity.name.clone(),
        description: core.description,
        summary: core.summary,
        image_url: core.image_url,
        tags: core.tags,
        fields,
        links: core.links,
        created_at: core.created_at,
        updated_at: core.updated_at,
    }
}
