//! Value types and the record contract shared by every IoT model shape.
//!
//! This crate defines the plumbing that the generated shapes sit on:
//! - [`ShapeValue`]: JVM-compatible hashing, structural equality and
//!   debug rendering for every field type
//! - [`Shape`]: the record trait plus its [`FieldDescriptor`] metadata
//! - [`Timestamp`] and [`Blob`]: the timestamp and byte-buffer field types
//! - [`ServiceEnum`] and [`service_enum!`]: enum-backed string fields
//! - [`map::insert_unique`]: the duplicate-key-checking map insert
//!
//! Shapes themselves are declared with `#[derive(Shape)]`, re-exported here.

extern crate self as iot_model_types;

mod blob;
mod enums;
pub mod map;
mod shape;
mod timestamp;
pub mod value;

pub use blob::Blob;
pub use enums::ServiceEnum;
pub use iot_model_derive::Shape;
pub use shape::{Constraints, FieldDescriptor, FieldKind, Shape};
pub use timestamp::Timestamp;
pub use value::{ShapeFormatter, ShapeValue};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by shape helpers.
///
/// Accessors, setters, equality, hashing and rendering never fail; only the
/// map entry helper and the parsing constructors do.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("duplicated key ({key}) provided for {shape}.{field}")]
    DuplicateKey {
        shape: &'static str,
        field: &'static str,
        key: String,
    },

    #[error("{enum_name} value cannot be empty")]
    EmptyEnumValue { enum_name: &'static str },

    #[error("cannot create {enum_name} from value '{value}'")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("invalid blob: {0}")]
    InvalidBlob(#[from] base64::DecodeError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns true for errors caused by a bad caller-supplied argument.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::Serialization(_))
    }
}

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
