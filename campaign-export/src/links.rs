//! Relationship link redaction.

use campaign_model::{Link, LinkStrength};
use serde::{Deserialize, Serialize};

/// A link as players see it: no notes, audit fields or metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLink {
    pub id: String,
    pub target_id: String,
    pub target_type: String,
    pub relationship: String,
    pub bidirectional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_relationship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<LinkStrength>,
}

impl From<&Link> for PlayerLink {
    fn from(link: &Link) -> Self {
        Self {
            id: link.id.clone(),
            target_id: link.target_id.clone(),
            target_type: link.target_type.clone(),
            relationship: link.relationship.clone(),
            bidirectional: link.bidirectional,
            reverse_relationship: link.reverse_relationship.clone(),
            strength: link.strength,
        }
    }
}

/// Drops links flagged `playerVisible: false` and strips the rest.
/// Order is preserved.
pub fn filter_links_for_player(links: &[Link]) -> Vec<PlayerLink> {
    links
        .iter()
        .filter(|link| link.player_visible != Some(false))
        .map(PlayerLink::from)
        .collect()
}
