//! Campaign entity model.
//!
//! Defines the shapes every export path consumes:
//! - [`Entity`] — a campaign object (id, type tag, built-in attributes, custom fields, links)
//! - [`Link`] — a relationship from one entity to another
//! - [`FieldValue`] — the closed variant custom field values are stored as
//! - [`EntityTypeDefinition`] / [`FieldDefinition`] — a type's custom field schema
//!
//! These types are produced by the host application's document store and
//! arrive already parsed. They serialize with camelCase keys so they match
//! the host's JSON documents.

mod entity;
mod schema;
mod value;

pub use entity::{Entity, Link, LinkStrength};
pub use schema::{EntityTypeDefinition, FieldDefinition, FieldKind, HIDDEN_SECTION};
pub use value::FieldValue;
