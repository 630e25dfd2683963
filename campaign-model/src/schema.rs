use serde::{Deserialize, Serialize};

/// Section name that marks a field as GM-only by default.
pub const HIDDEN_SECTION: &str = "hidden";

/// Describes an entity type: its display name and custom field schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTypeDefinition {
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub field_definitions: Vec<FieldDefinition>,
}

impl EntityTypeDefinition {
    pub fn new(entity_type: impl Into<String>, field_definitions: Vec<FieldDefinition>) -> Self {
        let entity_type = entity_type.into();
        Self {
            label: entity_type.clone(),
            entity_type,
            field_definitions,
        }
    }

    /// Looks up a field definition by key.
    pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
        self.field_definitions.iter().find(|f| f.key == key)
    }
}

/// One custom field in an entity type's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub order: i32,
    /// Layout section. `"hidden"` keeps the field out of player exports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Allowed values. Only meaningful for select kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

impl FieldDefinition {
    fn simple(key: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            required: false,
            order: 0,
            section: None,
            options: None,
            placeholder: None,
            help_text: None,
        }
    }

    /// Shorthand for a single-line text field.
    pub fn text(key: &str, label: &str) -> Self {
        Self::simple(key, label, FieldKind::Text)
    }

    /// Shorthand for a multi-line text field.
    pub fn textarea(key: &str, label: &str) -> Self {
        Self::simple(key, label, FieldKind::Textarea)
    }

    pub fn number(key: &str, label: &str) -> Self {
        Self::simple(key, label, FieldKind::Number)
    }

    pub fn boolean(key: &str, label: &str) -> Self {
        Self::simple(key, label, FieldKind::Boolean)
    }

    /// Shorthand for a select field with fixed options.
    pub fn select(key: &str, label: &str, options: Vec<String>) -> Self {
        Self {
            options: Some(options),
            ..Self::simple(key, label, FieldKind::Select)
        }
    }

    /// Places the field in a layout section.
    pub fn in_section(mut self, section: &str) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Places the field in the GM-only section.
    pub fn hidden(self) -> Self {
        self.in_section(HIDDEN_SECTION)
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Returns true if the field is declared in the GM-only section.
    pub fn is_hidden(&self) -> bool {
        self.section.as_deref() == Some(HIDDEN_SECTION)
    }
}

/// Input kind of a custom field.
///
/// Kinds the engine does not know about deserialize as [`FieldKind::Other`]
/// so schemas written by newer hosts still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Textarea,
    Richtext,
    Number,
    Boolean,
    Select,
    MultiSelect,
    Tags,
    Date,
    Url,
    Image,
    EntityRef,
    EntityRefs,
    #[serde(other)]
    Other,
}
