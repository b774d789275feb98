//! # propmeta
//!
//! Parser and typed accessors for component property metadata descriptors.
//!
//! A descriptor is a JSON document describing the configurable properties of
//! a pluggable component, data format, language or model. `propmeta` turns
//! such a document into an ordered sequence of [`Row`]s (string keys to
//! string values) and answers typed questions about it.
//!
//! ## Features
//!
//! - Grouped descriptors (`{"component": {..}, "properties": {..}}`)
//! - Flat main-configuration descriptors (`{"properties": [..]}`)
//! - Enum list flattening and control sequence escaping
//! - Host type translation into a small set of logical types
//! - Case-insensitive property lookups and optional prefix stripping
//! - Pluggable [`SchemaSource`] for obtaining descriptor text
//!
//! ## Quick Start
//!
//! ```rust
//! use propmeta::data::{accessor, parser};
//!
//! let json = r#"{"properties": {"timeout": {"type": "integer", "required": "true"}}}"#;
//! let rows = parser::parse_json_schema("properties", Some(json), true).unwrap();
//!
//! assert!(accessor::is_property_required(&rows, "TIMEOUT"));
//! assert!(accessor::is_property_integer(&rows, "timeout"));
//! ```
//!
//! ## Modules
//!
//! - [`data`] - Row model, descriptor parsing and accessors
//! - [`source`] - Where descriptor text comes from
//! - [`catalog`] - Source and parser tied together
//! - [`error`] - Parse failure type

#[macro_use]
extern crate log;

/// Source-backed descriptor lookups.
pub mod catalog;

/// Row model, descriptor parsing and typed accessors.
pub mod data;

/// Error type for descriptor parsing.
pub mod error;

/// Descriptor text providers.
pub mod source;

pub use catalog::Catalog;
pub use data::{
    row::Row,
    types::{DescriptorKind, LogicalType},
};
pub use error::{Result, SchemaError};
pub use source::{DirSchemaSource, SchemaSource, StaticSchemaSource};
