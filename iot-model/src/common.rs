//! Shapes and enums shared by several operation groups.

use iot_model_types::{Shape, service_enum};

service_enum! {
    /// Verbosity of the service's own logging.
    pub enum LogLevel {
        Debug = "DEBUG",
        Info = "INFO",
        Error = "ERROR",
        Warn = "WARN",
        Disabled = "DISABLED",
    }
}

/// A key/value resource tag.
#[derive(Debug, Clone, Default, Shape)]
pub struct Tag {
    #[shape(
        rename = "Key",
        min_length = 1,
        max_length = 128,
        pattern = r"[\p{L}\p{Z}\p{N}_.:/=+\-@]*"
    )]
    key: Option<String>,

    #[shape(rename = "Value", min_length = 0, max_length = 256)]
    value: Option<String>,
}

impl Tag {
    /// Shorthand for `Tag::new().with_key(key).with_value(value)`.
    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with_key(key).with_value(value)
    }
}
