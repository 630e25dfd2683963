//! Whole-entity visibility.
//!
//! Layers, strongest first:
//! 1. Hard vetoes: player profiles, and timeline events known only as
//!    `"secret"` or `"lost"`. Nothing re-enables these.
//! 2. The entity's own `playerVisible` flag.
//! 3. The category default from [`PlayerExportFieldConfig`].
//! 4. Visible.

use crate::config::PlayerExportFieldConfig;
use campaign_model::Entity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity type of player-owned profiles.
pub const PLAYER_PROFILE_TYPE: &str = "player_profile";
/// Entity type of timeline events.
pub const TIMELINE_EVENT_TYPE: &str = "timeline_event";
/// Timeline event field recording who knows about the event.
pub const KNOWN_BY_FIELD: &str = "knownBy";
/// `knownBy` values that keep a timeline event out of every export.
pub const UNKNOWN_TO_PLAYERS: [&str; 2] = ["secret", "lost"];

/// Why an entity was left out of a player export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// The entity is a player profile.
    PlayerProfile,
    /// A timeline event players do not know about.
    SecretTimelineEvent,
    /// The entity's own `playerVisible` flag is `false`.
    HiddenByEntity,
    /// The category default for the entity's type is hidden.
    HiddenByCategory,
}

impl ExclusionReason {
    /// Returns true for reasons no configuration can lift.
    pub fn is_veto(&self) -> bool {
        matches!(self, Self::PlayerProfile | Self::SecretTimelineEvent)
    }
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PlayerProfile => "player profile",
            Self::SecretTimelineEvent => "secret timeline event",
            Self::HiddenByEntity => "hidden by entity flag",
            Self::HiddenByCategory => "hidden by category",
        };
        f.write_str(s)
    }
}

/// Outcome of whole-entity visibility resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityVisibility {
    Visible,
    Excluded(ExclusionReason),
}

impl EntityVisibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }

    pub fn exclusion_reason(&self) -> Option<ExclusionReason> {
        match self {
            Self::Visible => None,
            Self::Excluded(reason) => Some(*reason),
        }
    }
}

/// Resolves whole-entity visibility and reports which layer decided it.
pub fn explain_entity_visibility(
    entity: &Entity,
    config: Option<&PlayerExportFieldConfig>,
) -> EntityVisibility {
    if let Some(reason) = hard_veto(entity) {
        return EntityVisibility::Excluded(reason);
    }

    match entity.player_visible {
        Some(false) => return EntityVisibility::Excluded(ExclusionReason::HiddenByEntity),
        Some(true) => return EntityVisibility::Visible,
        None => {}
    }

    match config.and_then(|c| c.category_visibility_for(&entity.entity_type)) {
        Some(false) => EntityVisibility::Excluded(ExclusionReason::HiddenByCategory),
        Some(true) | None => EntityVisibility::Visible,
    }
}

/// Returns true if the entity belongs in a player export.
pub fn is_entity_player_visible(entity: &Entity, config: Option<&PlayerExportFieldConfig>) -> bool {
    explain_entity_visibility(entity, config).is_visible()
}

fn hard_veto(entity: &Entity) -> Option<ExclusionReason> {
    match entity.entity_type.as_str() {
        PLAYER_PROFILE_TYPE => Some(ExclusionReason::PlayerProfile),
        TIMELINE_EVENT_TYPE => entity
            .field_str(KNOWN_BY_FIELD)
            .filter(|known_by| UNKNOWN_TO_PLAYERS.contains(known_by))
            .map(|_| ExclusionReason::SecretTimelineEvent),
        _ => None,
    }
}
