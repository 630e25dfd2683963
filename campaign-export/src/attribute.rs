//! Built-in entity attributes that take part in the override cascade.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix that separates core attribute keys from custom field keys in
/// override maps.
pub const CORE_KEY_PREFIX: &str = "__core_";

/// A built-in (non-custom) entity attribute whose visibility can be
/// configured per category or per entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoreAttribute {
    Description,
    Tags,
    Summary,
    ImageUrl,
    /// The entity's links.
    Relationships,
    CreatedAt,
    UpdatedAt,
}

impl CoreAttribute {
    pub const ALL: [CoreAttribute; 7] = [
        Self::Description,
        Self::Tags,
        Self::Summary,
        Self::ImageUrl,
        Self::Relationships,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    /// Returns the key this attribute uses in override maps.
    pub fn override_key(&self) -> &'static str {
        match self {
            Self::Description => "__core_description",
            Self::Tags => "__core_tags",
            Self::Summary => "__core_summary",
            Self::ImageUrl => "__core_imageUrl",
            Self::Relationships => "__core_relationships",
            Self::CreatedAt => "__core_createdAt",
            Self::UpdatedAt => "__core_updatedAt",
        }
    }

    /// Parses an override key back into an attribute.
    /// Returns `None` for custom field keys and unknown core keys.
    pub fn from_override_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.override_key() == key)
    }

    /// Returns true if `key` is in the reserved core key space.
    pub fn is_core_key(key: &str) -> bool {
        key.starts_with(CORE_KEY_PREFIX)
    }
}

impl fmt::Display for CoreAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.override_key();
        f.write_str(&key[CORE_KEY_PREFIX.len()..])
    }
}
