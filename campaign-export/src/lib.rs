//! Player export engine for campaign data.
//!
//! Decides what a Game Master's campaign becomes when exported for players,
//! at three granularities:
//! - whole entities ([`is_entity_player_visible`])
//! - custom fields and core attributes ([`filter_fields_for_player`],
//!   [`CoreAttribute`])
//! - relationship links ([`filter_links_for_player`])
//!
//! # Precedence
//!
//! Every decision runs the same cascade, strongest first:
//!
//! 1. Hard-coded domain rules that act as vetoes (player profiles, secret
//!    timeline events, an entity's own `playerVisible: false`).
//! 2. Per-entity overrides stored in `entity.metadata`.
//! 3. Per-category configuration ([`PlayerExportFieldConfig`]).
//! 4. Structural defaults (hidden schema sections, GM notes, session
//!    preparation).
//!
//! All functions are pure: inputs are borrowed, outputs are new values,
//! and no state survives between calls. Configuration is always passed
//! explicitly.
//!
//! # Example
//!
//! ```
//! use campaign_export::{filter_entity_for_player, PlayerExportFieldConfig};
//! use campaign_model::{Entity, EntityTypeDefinition, FieldDefinition};
//!
//! let mut npc = Entity::new("npc-1", "npc", "Mira");
//! npc.fields.insert("alignment".into(), "good".into());
//! npc.fields.insert("secret_motivation".into(), "spy".into());
//!
//! let npc_type = EntityTypeDefinition::new(
//!     "npc",
//!     vec![
//!         FieldDefinition::text("alignment", "Alignment"),
//!         FieldDefinition::text("secret_motivation", "Motivation").hidden(),
//!     ],
//! );
//!
//! let config = PlayerExportFieldConfig::new();
//! let player = filter_entity_for_player(&npc, Some(&npc_type), Some(&config)).unwrap();
//! assert!(player.fields.contains_key("alignment"));
//! assert!(!player.fields.contains_key("secret_motivation"));
//! ```

mod attribute;
mod config;
mod core_attributes;
mod error;
mod export;
mod fields;
mod filter;
mod hidden;
mod links;
mod overrides;
mod visibility;

pub use attribute::{CoreAttribute, CORE_KEY_PREFIX};
pub use config::{PlayerExportFieldConfig, VisibilityOverrides};
pub use core_attributes::{redact_core_attributes, CoreAttributes};
pub use error::{ExportError, ExportResult};
pub use export::{export_campaign, CampaignSnapshot, ExportSummary, PlayerExport};
pub use fields::{
    filter_fields_for_player, filter_fields_for_player_with, FieldScope, NOTES_FIELD,
    PREPARATION_FIELD,
};
pub use filter::{filter_entities_for_player, filter_entity_for_player, PlayerEntity, SESSION_TYPE};
pub use hidden::hidden_field_keys;
pub use links::{filter_links_for_player, PlayerLink};
pub use overrides::{entity_overrides, resolve_override, ENTITY_OVERRIDES_KEY};
pub use visibility::{
    explain_entity_visibility, is_entity_player_visible, EntityVisibility, ExclusionReason,
    KNOWN_BY_FIELD, PLAYER_PROFILE_TYPE, TIMELINE_EVENT_TYPE, UNKNOWN_TO_PLAYERS,
};
