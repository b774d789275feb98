//! Parse failure reporting.
//!
//! Every variant means the same thing to a caller: the descriptor could not be
//! parsed and no rows were produced. The variants only differ in the cause
//! they carry.

/// Descriptor parse failure.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The text is not valid JSON.
    #[error("cannot parse json")]
    Json(#[from] serde_json::Error),

    /// A value has a different JSON type than the descriptor shape requires.
    #[error("cannot parse json: `{path}` expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// A required attribute is absent.
    #[error("cannot parse json: `{path}` is missing `{field}`")]
    MissingField { path: String, field: String },
}

/// Result alias for descriptor parsing.
pub type Result<T> = std::result::Result<T, SchemaError>;

impl SchemaError {
    pub(crate) fn mismatch(path: impl Into<String>, expected: &str, actual: &serde_json::Value) -> Self {
        SchemaError::TypeMismatch {
            path: path.into(),
            expected: expected.to_string(),
            actual: json_type_name(actual).to_string(),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
