//! The record trait and the field metadata the derive emits for it.

use crate::Result;
use crate::value::ShapeValue;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// A generated request, result or value shape.
///
/// Implemented by `#[derive(Shape)]`; never written by hand.
pub trait Shape:
    ShapeValue + Default + Clone + Eq + fmt::Debug + fmt::Display + Serialize + DeserializeOwned
{
    /// Service schema name of the shape.
    const NAME: &'static str;

    /// Field descriptors in declared order.
    fn fields() -> &'static [FieldDescriptor];

    /// Wire names of the fields currently set, in declared order.
    fn present_fields(&self) -> Vec<&'static str>;

    /// Looks up a field descriptor by wire name.
    fn field(name: &str) -> Option<&'static FieldDescriptor> {
        Self::fields().iter().find(|d| d.name == name)
    }

    /// Returns true when no field is set.
    fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }

    /// JSON object containing only the present fields, keyed by wire name.
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a JSON object keyed by wire name. Unknown members are ignored.
    fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Describes one field of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Wire name, as the service schema spells it.
    pub name: &'static str,
    /// Rust member name.
    pub member: &'static str,
    pub kind: FieldKind,
    /// Enum, structure, list element or map value type name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<&'static str>,
    pub constraints: Constraints,
    /// Permitted wire strings. Only set for enum fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<&'static [&'static str]>,
}

/// Semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Integer,
    Long,
    Boolean,
    Double,
    Timestamp,
    Blob,
    Enum,
    Structure,
    List,
    Map,
}

impl FieldKind {
    /// Returns true for list and map fields.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::List | Self::Map)
    }
}

/// Documented field constraints.
///
/// These mirror the service schema for tooling and documentation. Nothing in
/// this workspace checks values against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Constraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<&'static str>,
}

impl Constraints {
    /// No documented constraint.
    pub const NONE: Self = Self {
        min_length: None,
        max_length: None,
        min: None,
        max: None,
        pattern: None,
    };

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min_length.is_none()
            && self.max_length.is_none()
            && self.min.is_none()
            && self.max.is_none()
            && self.pattern.is_none()
    }
}
