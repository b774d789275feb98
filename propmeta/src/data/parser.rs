//! Descriptor parsing into rows.
//!
//! Two entry points cover the two descriptor shapes:
//!
//! - [`parse_main_json_schema`] for the flat main configuration descriptor
//! - [`parse_json_schema`] for grouped component, data format, language and
//!   model descriptors
//!
//! Both accept `None` for a descriptor that does not exist and return no rows
//! for it. Parsing is all or nothing: any shape problem fails the whole call.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::{
    data::{
        accessor::{JAVA_TYPE, TYPE},
        row::{NAME, Row},
        types::LogicalType,
    },
    error::{Result, SchemaError},
};

/// Group holding property metadata.
pub const PROPERTIES: &str = "properties";

/// Parse a main configuration descriptor.
///
/// The input is `{"properties": [{"name": "...", "type": "...", ...}, ...]}`.
/// Each property object becomes a row with all of its attributes, where:
///
/// - `name` is converted from `dash-case` to `camelCase`
/// - `javaType` receives the original `type`
/// - `type` is replaced with the [`LogicalType`] translation
///
/// Top level keys other than `properties` are ignored, but must still hold
/// arrays.
pub fn parse_main_json_schema(json: Option<&str>) -> Result<Vec<Row>> {
    let Some(json) = json else {
        return Ok(Vec::new());
    };

    let output: Value = serde_json::from_str(json)?;
    let groups = output
        .as_object()
        .ok_or_else(|| SchemaError::mismatch("$", "object", &output))?;

    let mut rows = Vec::new();
    for (key, value) in groups {
        let array = value
            .as_array()
            .ok_or_else(|| SchemaError::mismatch(key.as_str(), "array", value))?;
        if key != PROPERTIES {
            continue;
        }

        for (idx, obj) in array.iter().enumerate() {
            let path = format!("{key}[{idx}]");
            let entry = obj
                .as_object()
                .ok_or_else(|| SchemaError::mismatch(path.as_str(), "object", obj))?;
            rows.push(main_row(entry, path)?);
        }
    }

    debug!("parsed {} main configuration rows", rows.len());
    Ok(rows)
}

fn main_row(entry: &Map<String, Value>, path: String) -> Result<Row> {
    let name = entry
        .get(NAME)
        .map(stringify)
        .ok_or_else(|| SchemaError::MissingField {
            path,
            field: NAME.to_string(),
        })?;

    let mut row: Row = entry.iter().map(|(k, v)| (k.as_str(), stringify(v))).collect();
    row.insert(NAME, dash_to_camel_case(&name));

    let host_type = row.get(TYPE).map(str::to_string);
    let logical = match host_type {
        Some(host) => {
            let logical = LogicalType::from_host_type(&host);
            row.insert(JAVA_TYPE, host);
            logical
        }
        None => LogicalType::Object,
    };
    row.insert(TYPE, logical.as_str());

    trace!("main row: {row:?}");
    Ok(row)
}

/// Parse one group of a grouped descriptor.
///
/// Only the group whose key equals `group` is read; the others are ignored,
/// but must still be JSON objects.
///
/// With `flatten_properties` set, the group is read as a map of property
/// name to metadata and each property becomes one row whose `name` is the
/// property key. Otherwise the group is treated as a single record and each
/// of its attributes becomes a one-entry row.
///
/// Array values are joined with `,` and `\r`, `\n`, `\t` escape sequences
/// inside values are doubled.
pub fn parse_json_schema(group: &str, json: Option<&str>, flatten_properties: bool) -> Result<Vec<Row>> {
    let Some(json) = json else {
        return Ok(Vec::new());
    };

    let output: Value = serde_json::from_str(json)?;
    let groups = output
        .as_object()
        .ok_or_else(|| SchemaError::mismatch("$", "object", &output))?;

    let mut rows = Vec::new();
    for (key, value) in groups {
        let map = value
            .as_object()
            .ok_or_else(|| SchemaError::mismatch(key.as_str(), "object", value))?;
        if key != group {
            continue;
        }

        if flatten_properties {
            for (name, meta) in map {
                let meta = meta.as_object().ok_or_else(|| {
                    SchemaError::mismatch(format!("{key}.{name}"), "object", meta)
                })?;
                let mut row = Row::single(NAME, name.as_str());
                row.extend(transform_map(meta).iter());
                trace!("{group} row: {row:?}");
                rows.push(row);
            }
        } else {
            rows.extend(transform_map(map).iter().map(|(k, v)| Row::single(k, v)));
        }
    }

    debug!("parsed {} rows from group `{group}`", rows.len());
    Ok(rows)
}

/// Flatten list values and escape every value of a metadata map.
fn transform_map(map: &Map<String, Value>) -> Row {
    map.iter()
        .map(|(key, value)| {
            let flat = match value {
                Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
                other => stringify(other),
            };
            (key.as_str(), escape_json(&flat))
        })
        .collect()
}

/// String form of a JSON value: strings as is, anything else as JSON text.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Double the backslash of literal `\r`, `\n` and `\t` sequences.
///
/// Not idempotent: applying it twice doubles again.
pub fn escape_json(value: &str) -> String {
    value
        .replace("\\r", "\\\\r")
        .replace("\\n", "\\\\n")
        .replace("\\t", "\\\\t")
}

/// Convert `dash-case` to `camelCase` (`hello-great-world` -> `helloGreatWorld`).
///
/// Each `-` is dropped and the following character uppercased. A trailing
/// `-` is dropped. Text without `-` is returned as is.
pub fn dash_to_camel_case(text: &str) -> Cow<'_, str> {
    if !text.contains('-') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.next() {
                out.extend(next.to_uppercase());
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
