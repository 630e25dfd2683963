//! Shared fixtures for player export tests.

#![allow(dead_code)]

use campaign_model::{Entity, EntityTypeDefinition, FieldDefinition, Link};

/// The NPC used throughout the redaction scenarios.
pub fn spy_npc() -> Entity {
    let mut e = Entity::new("npc-1", "npc", "Mira the Smith");
    e.player_visible = Some(true);
    e.notes = "secret".to_string();
    e.description = "Runs the forge by the river.".to_string();
    e.summary = Some("Blacksmith".to_string());
    e.image_url = Some("img/mira.png".to_string());
    e.tags = vec!["smith".to_string(), "river-ward".to_string()];
    e.fields.insert("alignment".into(), "good".into());
    e.fields.insert("secret_motivation".into(), "spy".into());
    e.created_at = 1_700_000_000_000;
    e.updated_at = 1_700_000_500_000;
    e
}

pub fn npc_type() -> EntityTypeDefinition {
    EntityTypeDefinition::new(
        "npc",
        vec![
            FieldDefinition::text("alignment", "Alignment").with_order(0),
            FieldDefinition::textarea("secret_motivation", "Secret Motivation")
                .hidden()
                .with_order(1),
        ],
    )
}

pub fn entity_of(id: &str, entity_type: &str) -> Entity {
    Entity::new(id, entity_type, format!("{entity_type} {id}"))
}

pub fn timeline_event(id: &str, known_by: &str) -> Entity {
    let mut e = entity_of(id, "timeline_event");
    e.fields.insert("knownBy".into(), known_by.into());
    e
}

pub fn link(id: &str, target_id: &str) -> Link {
    Link::new(id, target_id, "npc", "knows")
}

/// Attaches a per-entity override map to the entity's metadata.
pub fn with_overrides(mut entity: Entity, overrides: serde_json::Value) -> Entity {
    entity
        .metadata
        .insert(campaign_export::ENTITY_OVERRIDES_KEY.to_string(), overrides);
    entity
}
