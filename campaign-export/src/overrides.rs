//! The override cascade shared by field and core attribute resolution.

use crate::config::VisibilityOverrides;
use campaign_model::Entity;
use tracing::warn;

/// Metadata key under which an entity carries its own override map.
pub const ENTITY_OVERRIDES_KEY: &str = "playerFieldVisibility";

/// Resolves one key against the per-entity and per-category maps.
///
/// The per-entity map wins over the per-category map. `None` means neither
/// layer has an opinion and the caller applies its own default.
pub fn resolve_override(
    per_entity: Option<&VisibilityOverrides>,
    per_category: Option<&VisibilityOverrides>,
    key: &str,
) -> Option<bool> {
    per_entity
        .and_then(|overrides| overrides.get(key))
        .or_else(|| per_category.and_then(|overrides| overrides.get(key)))
        .copied()
}

/// Extracts the per-entity override map from `entity.metadata`.
///
/// Entries whose value is not a boolean are skipped. A value under the
/// reserved key that is not an object yields `None`.
pub fn entity_overrides(entity: &Entity) -> Option<VisibilityOverrides> {
    let raw = entity.metadata_value(ENTITY_OVERRIDES_KEY)?;
    let Some(object) = raw.as_object() else {
        if !raw.is_null() {
            warn!(
                "Ignoring malformed {} on entity {}: expected an object",
                ENTITY_OVERRIDES_KEY, entity.id
            );
        }
        return None;
    };

    let mut overrides = VisibilityOverrides::new();
    for (key, value) in object {
        match value.as_bool() {
            Some(visible) => {
                overrides.insert(key.clone(), visible);
            }
            None => warn!(
                "Ignoring non-boolean override {:?} on entity {}",
                key, entity.id
            ),
        }
    }
    Some(overrides)
}
