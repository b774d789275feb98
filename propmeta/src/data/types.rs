use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The closed set of types every richer host type is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalType {
    Boolean,
    Integer,
    Number,
    String,
    Object,
    /// Only ever present in grouped descriptors; host types never map here.
    Array,
}

impl LogicalType {
    /// Translate a host type name as found in main configuration descriptors.
    ///
    /// Matching is exact and case-sensitive. Unknown types become
    /// [`LogicalType::Object`].
    pub fn from_host_type(host: &str) -> Self {
        match host {
            "boolean" | "java.lang.Boolean" => Self::Boolean,
            "int" | "java.lang.Integer" | "long" | "java.lang.Long" => Self::Integer,
            "float" | "java.lang.Float" | "double" | "java.lang.Double" => Self::Number,
            "string" | "java.lang.String" => Self::String,
            _ => Self::Object,
        }
    }

    /// The literal stored in a row's `type` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of artifact a descriptor describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptorKind {
    Component,
    DataFormat,
    Language,
    Model,
    Other,
}

impl DescriptorKind {
    pub const ALL: [DescriptorKind; 5] = [
        Self::Component,
        Self::DataFormat,
        Self::Language,
        Self::Model,
        Self::Other,
    ];

    /// Lowercase identifier, also the name of the descriptor's header group.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::DataFormat => "dataformat",
            Self::Language => "language",
            Self::Model => "model",
            Self::Other => "other",
        }
    }

    /// Group holding the singleton attributes of the artifact.
    pub fn header_group(&self) -> &'static str {
        self.as_str()
    }

    /// Directory name used by [`DirSchemaSource`](crate::source::DirSchemaSource).
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Component => "components",
            Self::DataFormat => "dataformats",
            Self::Language => "languages",
            Self::Model => "models",
            Self::Other => "others",
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a descriptor kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown descriptor kind `{0}`, expected one of: component, dataformat, language, model, other")]
pub struct UnknownKind(pub String);

impl FromStr for DescriptorKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
