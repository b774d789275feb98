//! Row model, descriptor parsing and typed accessors.
//!
//! Descriptors come in two shapes:
//!
//! - **Grouped**: a JSON object of named groups, each group a map. Property
//!   groups map a property name to its metadata; header groups (such as
//!   `component`) are a single map of attributes.
//! - **Main**: a JSON object whose `properties` key holds an array of
//!   property objects using dash-separated names and host type names.
//!
//! Both are turned into a `Vec<Row>`, which [`accessor`] then queries.
//!
//! ## Architecture
//!
//! - [`row`] - The ordered string map every property is flattened into
//! - [`types`] - Logical types and descriptor kinds
//! - [`parser`] - JSON to rows
//! - [`accessor`] - Queries over rows

/// Typed queries over parsed rows.
pub mod accessor;

/// Descriptor parsing into rows.
pub mod parser;

/// Ordered string-keyed, string-valued metadata record.
pub mod row;

/// Logical types and descriptor kinds.
pub mod types;
