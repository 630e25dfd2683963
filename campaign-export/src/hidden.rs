use campaign_model::FieldDefinition;

/// Returns the keys of all field definitions declared in the hidden section,
/// in schema order.
pub fn hidden_field_keys(field_defs: &[FieldDefinition]) -> Vec<String> {
    field_defs
        .iter()
        .filter(|def| def.is_hidden())
        .map(|def| def.key.clone())
        .collect()
}
