//! Typed queries over parsed rows.
//!
//! All functions are pure and never fail: a missing row or attribute yields
//! `false` or `None`.
//!
//! Property lookups match `name` case-insensitively and stop at the first
//! matching row, even when a later row carries the same name.

use indexmap::IndexSet;

use crate::data::{row::Row, types::LogicalType};

pub const LENIENT_PROPERTIES: &str = "lenientProperties";
pub const CONSUMER_ONLY: &str = "consumerOnly";
pub const PRODUCER_ONLY: &str = "producerOnly";
pub const LABEL: &str = "label";
pub const REQUIRED: &str = "required";
pub const DEPRECATED: &str = "deprecated";
pub const MULTI_VALUE: &str = "multiValue";
pub const KIND: &str = "kind";
pub const TYPE: &str = "type";
pub const JAVA_TYPE: &str = "javaType";
pub const DEFAULT_VALUE: &str = "defaultValue";
pub const ENUM: &str = "enum";
pub const PREFIX: &str = "prefix";
pub const OPTIONAL_PREFIX: &str = "optionalPrefix";

/// Upper bound on optional prefixes stripped from a single name.
pub const MAX_PREFIX_STRIPS: usize = 64;

fn first_flag(rows: &[Row], key: &str) -> bool {
    rows.iter()
        .find(|row| row.contains_key(key))
        .is_some_and(|row| row.flag(key))
}

/// Whether the component accepts properties it does not declare.
pub fn is_component_lenient_properties(rows: &[Row]) -> bool {
    first_flag(rows, LENIENT_PROPERTIES)
}

pub fn is_component_consumer_only(rows: &[Row]) -> bool {
    first_flag(rows, CONSUMER_ONLY)
}

pub fn is_component_producer_only(rows: &[Row]) -> bool {
    first_flag(rows, PRODUCER_ONLY)
}

/// Compare names ignoring case, with Unicode case folding.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// First row whose `name` equals `name`, ignoring case.
pub fn find_property<'a>(rows: &'a [Row], name: &str) -> Option<&'a Row> {
    rows.iter()
        .find(|row| row.name().is_some_and(|n| eq_ignore_case(n, name)))
}

fn property_attr<'a>(rows: &'a [Row], name: &str, key: &str) -> Option<&'a str> {
    find_property(rows, name).and_then(|row| row.get(key))
}

fn property_flag(rows: &[Row], name: &str, key: &str) -> bool {
    find_property(rows, name).is_some_and(|row| row.flag(key))
}

fn label_contains(rows: &[Row], name: &str, needle: &str) -> bool {
    property_attr(rows, name, LABEL).is_some_and(|label| label.contains(needle))
}

/// Whether the property's label marks it as consumer only.
pub fn is_property_consumer_only(rows: &[Row], name: &str) -> bool {
    label_contains(rows, name, "consumer")
}

/// Whether the property's label marks it as producer only.
pub fn is_property_producer_only(rows: &[Row], name: &str) -> bool {
    label_contains(rows, name, "producer")
}

pub fn is_property_required(rows: &[Row], name: &str) -> bool {
    property_flag(rows, name, REQUIRED)
}

pub fn is_property_deprecated(rows: &[Row], name: &str) -> bool {
    property_flag(rows, name, DEPRECATED)
}

pub fn is_property_multi_value(rows: &[Row], name: &str) -> bool {
    property_flag(rows, name, MULTI_VALUE)
}

pub fn get_property_kind<'a>(rows: &'a [Row], name: &str) -> Option<&'a str> {
    property_attr(rows, name, KIND)
}

pub fn get_property_java_type<'a>(rows: &'a [Row], name: &str) -> Option<&'a str> {
    property_attr(rows, name, JAVA_TYPE)
}

/// The property's logical type literal as stored.
pub fn get_property_type<'a>(rows: &'a [Row], name: &str) -> Option<&'a str> {
    property_attr(rows, name, TYPE)
}

pub fn get_property_default_value<'a>(rows: &'a [Row], name: &str) -> Option<&'a str> {
    property_attr(rows, name, DEFAULT_VALUE)
}

/// Allowed values, comma joined as stored.
pub fn get_property_enum<'a>(rows: &'a [Row], name: &str) -> Option<&'a str> {
    property_attr(rows, name, ENUM)
}

/// Prefix under which a multi-value property collects its entries.
pub fn get_property_prefix<'a>(rows: &'a [Row], name: &str) -> Option<&'a str> {
    property_attr(rows, name, PREFIX)
}

/// Whether the property's `type` is the given logical type.
pub fn is_property_type(rows: &[Row], name: &str, ty: LogicalType) -> bool {
    get_property_type(rows, name) == Some(ty.as_str())
}

pub fn is_property_boolean(rows: &[Row], name: &str) -> bool {
    is_property_type(rows, name, LogicalType::Boolean)
}

pub fn is_property_integer(rows: &[Row], name: &str) -> bool {
    is_property_type(rows, name, LogicalType::Integer)
}

pub fn is_property_array(rows: &[Row], name: &str) -> bool {
    is_property_type(rows, name, LogicalType::Array)
}

pub fn is_property_number(rows: &[Row], name: &str) -> bool {
    is_property_type(rows, name, LogicalType::Number)
}

pub fn is_property_object(rows: &[Row], name: &str) -> bool {
    is_property_type(rows, name, LogicalType::Object)
}

/// Strip optional prefixes from an externally supplied property name.
///
/// Rows are scanned in order. The first named row whose `optionalPrefix`
/// starts `name` has it stripped, and the scan restarts from the first row
/// with the shorter name, so several prefixes can be peeled off in turn. A
/// scan that reaches a row named like the current name stops there.
///
/// Returns the input unchanged when no prefix applies. At most
/// [`MAX_PREFIX_STRIPS`] prefixes are removed.
pub fn strip_optional_prefix_from_name<'n>(rows: &[Row], name: &'n str) -> &'n str {
    let mut current = name;
    let mut strips = 0;

    while let Some(prefix) = next_optional_prefix(rows, current) {
        if strips == MAX_PREFIX_STRIPS {
            warn!("stopped stripping optional prefixes from `{name}` after {MAX_PREFIX_STRIPS} rounds");
            break;
        }
        current = &current[prefix.len()..];
        strips += 1;
    }
    current
}

/// Optional prefix the next strip would remove from `name`, if any.
fn next_optional_prefix<'a>(rows: &'a [Row], name: &str) -> Option<&'a str> {
    for row in rows {
        let Some(row_name) = row.name() else {
            continue;
        };
        if let Some(prefix) = row.get(OPTIONAL_PREFIX) {
            if name.starts_with(prefix) {
                return Some(prefix);
            }
        }
        if eq_ignore_case(row_name, name) {
            return None;
        }
    }
    None
}

/// Resolve a prefixed key such as `header.Foo` to its declared property name.
///
/// Returns the `name` of the first row whose `prefix` starts `name`.
pub fn get_property_name_from_name_with_prefix<'a>(rows: &'a [Row], name: &str) -> Option<&'a str> {
    rows.iter()
        .find(|row| row.get(PREFIX).is_some_and(|prefix| name.starts_with(prefix)))
        .and_then(Row::name)
}

/// Row with exactly this `name` (case-sensitive).
pub fn get_row<'a>(rows: &'a [Row], name: &str) -> Option<&'a Row> {
    rows.iter().find(|row| row.name() == Some(name))
}

/// All property names in first-seen order, without duplicates.
pub fn get_names(rows: &[Row]) -> IndexSet<&str> {
    rows.iter().filter_map(Row::name).collect()
}

/// Find the row an externally supplied option key refers to.
///
/// Optional prefixes are stripped first. The remaining key is then matched
/// against property names, and failing that, against multi-value prefixes.
pub fn resolve_property<'a>(rows: &'a [Row], key: &str) -> Option<&'a Row> {
    let key = strip_optional_prefix_from_name(rows, key);
    find_property(rows, key).or_else(|| {
        get_property_name_from_name_with_prefix(rows, key).and_then(|name| get_row(rows, name))
    })
}
