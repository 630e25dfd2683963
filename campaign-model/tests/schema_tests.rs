use campaign_model::{EntityTypeDefinition, FieldDefinition, FieldKind, HIDDEN_SECTION};

// ── FieldDefinition constructors ─────────────────────────────────

#[test]
fn text_field_defaults() {
    let f = FieldDefinition::text("alignment", "Alignment");
    assert_eq!(f.key, "alignment");
    assert_eq!(f.label, "Alignment");
    assert_eq!(f.kind, FieldKind::Text);
    assert!(!f.required);
    assert_eq!(f.section, None);
    assert!(!f.is_hidden());
}

#[test]
fn hidden_field_is_in_hidden_section() {
    let f = FieldDefinition::textarea("secret_motivation", "Secret Motivation").hidden();
    assert_eq!(f.section.as_deref(), Some(HIDDEN_SECTION));
    assert!(f.is_hidden());
}

#[test]
fn other_sections_are_not_hidden() {
    let f = FieldDefinition::text("hooks", "Hooks").in_section("story");
    assert!(!f.is_hidden());
}

#[test]
fn section_match_is_case_sensitive() {
    let f = FieldDefinition::text("x", "X").in_section("Hidden");
    assert!(!f.is_hidden());
}

#[test]
fn select_field_carries_options() {
    let f = FieldDefinition::select("knownBy", "Known By", vec!["public".into(), "secret".into()]);
    assert_eq!(f.kind, FieldKind::Select);
    assert_eq!(f.options.as_ref().map(Vec::len), Some(2));
}

#[test]
fn builder_sets_order_and_required() {
    let f = FieldDefinition::number("level", "Level").with_order(3).required();
    assert_eq!(f.order, 3);
    assert!(f.required);
}

// ── EntityTypeDefinition ─────────────────────────────────────────

fn make_npc_type() -> EntityTypeDefinition {
    EntityTypeDefinition::new(
        "npc",
        vec![
            FieldDefinition::text("alignment", "Alignment"),
            FieldDefinition::textarea("secret_motivation", "Secret Motivation").hidden(),
            FieldDefinition::boolean("alive", "Alive"),
        ],
    )
}

#[test]
fn type_definition_field_lookup() {
    let t = make_npc_type();
    assert_eq!(t.entity_type, "npc");
    assert!(t.field("alignment").is_some());
    assert!(t.field("missing").is_none());
}

#[test]
fn type_definition_hidden_fields_in_order() {
    let t = make_npc_type();
    let hidden: Vec<&str> = t
        .field_definitions
        .iter()
        .filter(|f| f.is_hidden())
        .map(|f| f.key.as_str())
        .collect();
    assert_eq!(hidden, vec!["secret_motivation"]);
}

// ── JSON contract ────────────────────────────────────────────────

#[test]
fn field_kind_serde_uses_kebab_case() {
    assert_eq!(serde_json::to_string(&FieldKind::MultiSelect).unwrap(), "\"multi-select\"");
    assert_eq!(serde_json::to_string(&FieldKind::EntityRef).unwrap(), "\"entity-ref\"");
    assert_eq!(serde_json::to_string(&FieldKind::Text).unwrap(), "\"text\"");
}

#[test]
fn unknown_field_kind_deserializes_as_other() {
    let kind: FieldKind = serde_json::from_str("\"dice-formula\"").unwrap();
    assert_eq!(kind, FieldKind::Other);
}

#[test]
fn type_definition_deserializes_from_host_json() {
    let json = r#"{
        "type": "session",
        "label": "Session",
        "fieldDefinitions": [
            {"key": "date", "label": "Date", "type": "date", "required": true, "order": 0},
            {"key": "preparation", "label": "Prep", "type": "richtext", "required": false, "order": 1, "section": "hidden"},
            {"key": "recap", "label": "Recap", "type": "textarea", "required": false, "order": 2, "helpText": "What happened"}
        ]
    }"#;
    let t: EntityTypeDefinition = serde_json::from_str(json).unwrap();
    assert_eq!(t.entity_type, "session");
    assert_eq!(t.field_definitions.len(), 3);
    assert_eq!(t.field_definitions[0].kind, FieldKind::Date);
    assert!(t.field_definitions[0].required);
    assert!(t.field_definitions[1].is_hidden());
    assert_eq!(t.field_definitions[2].help_text.as_deref(), Some("What happened"));
}

#[test]
fn type_definition_without_fields_deserializes_empty() {
    let t: EntityTypeDefinition = serde_json::from_str(r#"{"type": "faction"}"#).unwrap();
    assert!(t.field_definitions.is_empty());
}
