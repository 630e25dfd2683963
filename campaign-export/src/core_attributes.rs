//! Redaction of built-in entity attributes.
//!
//! Every core attribute is visible unless an override hides it. Hidden
//! attributes collapse to their empty form: `""` for the description, `[]`
//! for tags and relationships, absent for the rest.

use crate::attribute::CoreAttribute;
use crate::config::VisibilityOverrides;
use crate::links::{filter_links_for_player, PlayerLink};
use crate::overrides::resolve_override;
use campaign_model::Entity;

/// Core attribute values after redaction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoreAttributes {
    pub description: String,
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub image_url: Option<String>,
    pub links: Vec<PlayerLink>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Applies the override cascade to an entity's core attributes.
pub fn redact_core_attributes(
    entity: &Entity,
    per_entity: Option<&VisibilityOverrides>,
    per_category: Option<&VisibilityOverrides>,
) -> CoreAttributes {
    let visible = |attribute: CoreAttribute| {
        resolve_override(per_entity, per_category, attribute.override_key()).unwrap_or(true)
    };

    CoreAttributes {
        description: if visible(CoreAttribute::Description) {
            entity.description.clone()
        } else {
            String::new()
        },
        tags: if visible(CoreAttribute::Tags) {
            entity.tags.clone()
        } else {
            Vec::new()
        },
        summary: entity.summary.clone().filter(|_| visible(CoreAttribute::Summary)),
        image_url: entity.image_url.clone().filter(|_| visible(CoreAttribute::ImageUrl)),
        links: if visible(CoreAttribute::Relationships) {
            filter_links_for_player(&entity.links)
        } else {
            Vec::new()
        },
        created_at: Some(entity.created_at).filter(|_| visible(CoreAttribute::CreatedAt)),
        updated_at: Some(entity.updated_at).filter(|_| visible(CoreAttribute::UpdatedAt)),
    }
}
