mod common;

use campaign_export::{filter_links_for_player, PlayerLink};
use campaign_model::{Link, LinkStrength};
use common::link;
use pretty_assertions::assert_eq;
use serde_json::json;

fn annotated(id: &str, player_visible: Option<bool>) -> Link {
    let mut l = link(id, "npc-9");
    l.source_id = "npc-1".to_string();
    l.notes = Some("x".to_string());
    l.player_visible = player_visible;
    l.created_at = 10;
    l.updated_at = 20;
    l.metadata = Some([("origin".to_string(), json!("ai"))].into_iter().collect());
    l
}

// ── Filtering ────────────────────────────────────────────────────

#[test]
fn hidden_link_is_removed() {
    let out = filter_links_for_player(&[annotated("l1", Some(false))]);
    assert!(out.is_empty());
}

#[test]
fn visible_and_unflagged_links_are_kept() {
    let links = vec![annotated("l1", Some(true)), annotated("l2", None)];
    let out = filter_links_for_player(&links);
    let ids: Vec<&str> = out.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["l1", "l2"]);
}

#[test]
fn order_is_preserved() {
    let links = vec![
        annotated("c", None),
        annotated("a", Some(false)),
        annotated("b", Some(true)),
        annotated("d", None),
    ];
    let ids: Vec<String> = filter_links_for_player(&links).into_iter().map(|l| l.id).collect();
    assert_eq!(ids, vec!["c", "b", "d"]);
}

#[test]
fn empty_input_gives_empty_output() {
    assert!(filter_links_for_player(&[]).is_empty());
}

// ── Projection ───────────────────────────────────────────────────

#[test]
fn kept_link_is_stripped_to_player_shape() {
    let mut l = annotated("l1", Some(true));
    l.bidirectional = true;
    l.reverse_relationship = Some("known_by".to_string());
    l.strength = Some(LinkStrength::Moderate);

    let out = filter_links_for_player(&[l]);
    assert_eq!(
        out,
        vec![PlayerLink {
            id: "l1".to_string(),
            target_id: "npc-9".to_string(),
            target_type: "npc".to_string(),
            relationship: "knows".to_string(),
            bidirectional: true,
            reverse_relationship: Some("known_by".to_string()),
            strength: Some(LinkStrength::Moderate),
        }]
    );
}

#[test]
fn serialized_link_has_no_gm_attributes() {
    let out = filter_links_for_player(&[annotated("l1", Some(true))]);
    let value = serde_json::to_value(&out[0]).unwrap();
    assert_eq!(value["relationship"], "knows");
    for key in ["notes", "metadata", "playerVisible", "createdAt", "updatedAt", "sourceId"] {
        assert!(value.get(key).is_none(), "{key} leaked");
    }
}

#[test]
fn absent_optionals_stay_absent() {
    let out = filter_links_for_player(&[link("l1", "npc-2")]);
    assert_eq!(out[0].reverse_relationship, None);
    assert_eq!(out[0].strength, None);

    let value = serde_json::to_value(&out[0]).unwrap();
    assert!(value.get("reverseRelationship").is_none());
    assert!(value.get("strength").is_none());
}

#[test]
fn input_links_are_not_mutated() {
    let links = vec![annotated("l1", Some(true)), annotated("l2", Some(false))];
    let before = links.clone();
    let _ = filter_links_for_player(&links);
    assert_eq!(links, before);
}
